use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use skyward::config::{parse_args, Command, USAGE};
use skyward::core::constants::{MAX_FRAME_DELTA_MS, TICK_INTERVAL_MS};
use skyward::game::{map_key, GameInput, GameState};
use skyward::storage::ScoreStore;
use skyward::ui::{Backdrop, Renderer, Sprite};
use skyward::utils::{build_info, logging};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let options = match parse_args(&args) {
        Ok(Command::Play(options)) => options,
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'skyward --help' for usage.");
            std::process::exit(1);
        }
    };

    logging::init_file_logging(&options.log_path());
    info!(version = %build_info::version_line(), "starting");

    let store = options.score_store();
    info!(path = %store.path().display(), "using score file");

    let sprite = options
        .sprite_path()
        .map(|path| Sprite::load_or_placeholder(&path))
        .unwrap_or_default();
    let renderer = Renderer::new(Backdrop::default(), sprite);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &renderer, store);

    // Restore terminal on every exit path before reporting errors
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("exiting");
    result
}

/// Fixed-step loop: ~60 ticks per second, inputs gathered between ticks.
fn run<S: ScoreStore>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    renderer: &Renderer,
    store: S,
) -> io::Result<()> {
    let started = Instant::now();
    let mut rng = rand::thread_rng();
    let mut game = GameState::new(store, 0);
    let mut pending: Vec<GameInput> = Vec::new();
    let mut accumulated_ms = 0u64;
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| {
            let area = frame.size();
            renderer.render(frame, area, &game.snapshot());
        })?;

        if event::poll(Duration::from_millis(TICK_INTERVAL_MS / 2))? {
            if let Event::Key(key) = event::read()? {
                if let Some(input) = map_key(key, game.is_over()) {
                    if input == GameInput::Quit {
                        return Ok(());
                    }
                    pending.push(input);
                }
            }
        }

        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame).as_millis() as u64;
        last_frame = now;
        // Clamp dt to avoid a burst of ticks after a stall
        accumulated_ms += dt_ms.min(MAX_FRAME_DELTA_MS);

        while accumulated_ms >= TICK_INTERVAL_MS {
            accumulated_ms -= TICK_INTERVAL_MS;
            let now_ms = started.elapsed().as_millis() as u64;
            let events = game.tick(&pending, now_ms, &mut rng);
            pending.clear();
            if events.quit_requested {
                return Ok(());
            }
        }
    }
}
