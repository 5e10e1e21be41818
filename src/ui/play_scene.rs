//! Rendering of a frame: play field, status rows, score panel and crash banner.

use super::assets::{Backdrop, Sprite};
use crate::core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::game::Snapshot;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the score panel to the right of the field, borders included.
const PANEL_WIDTH: u16 = 22;
/// Rows of the game-over banner drawn over the bottom of the field.
const BANNER_HEIGHT: u16 = 4;

/// What occupies one terminal cell of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Sky,
    Barrier,
    /// Barrier cell bordering the gap.
    BarrierEdge,
    Avatar,
}

/// Screen regions of one frame.
///
/// ```text
/// ┌─ Skyward ───────────────────────┬─ Scores ────┐
/// │                                 │             │
/// │   field                         │  panel      │
/// │                                 │             │
/// │ status (2 rows)                 │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
struct SceneAreas {
    field: Rect,
    status: Rect,
    panel: Rect,
}

/// Owns the decorative resources and draws snapshots with them.
pub struct Renderer {
    backdrop: Backdrop,
    sprite: Sprite,
}

impl Renderer {
    pub fn new(backdrop: Backdrop, sprite: Sprite) -> Self {
        Self { backdrop, sprite }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
        let areas = split_scene(frame, area, snapshot);

        self.render_play_area(frame, areas.field, snapshot);
        frame.render_widget(
            Paragraph::new(status_lines(snapshot).to_vec()).alignment(Alignment::Center),
            areas.status,
        );
        render_score_panel(frame, areas.panel, snapshot);

        if snapshot.is_over {
            render_crash_banner(frame, areas.field, snapshot);
        }
    }

    fn render_play_area(&self, frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
        let width = area.width as usize;
        let height = area.height as usize;

        if width == 0 || height == 0 {
            return;
        }

        let sky = Style::default().bg(self.backdrop.sky);
        let glyph = self.sprite.glyph_for(snapshot.avatar.angle).to_string();
        let mut lines = Vec::with_capacity(height);

        for row in 0..height {
            let mut spans = Vec::with_capacity(width);
            for col in 0..width {
                let span = match classify_cell(snapshot, col, row, width, height) {
                    Cell::Sky => Span::styled(" ", sky),
                    Cell::Barrier => Span::styled("█", sky.fg(self.backdrop.barrier)),
                    Cell::BarrierEdge => Span::styled("▓", sky.fg(self.backdrop.barrier_edge)),
                    Cell::Avatar => Span::styled(
                        glyph.clone(),
                        sky.fg(self.backdrop.avatar).add_modifier(Modifier::BOLD),
                    ),
                };
                spans.push(span);
            }
            lines.push(Line::from(spans));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Backdrop::default(), Sprite::default())
    }
}

/// Map a cell of a `width` x `height` play field to world space and decide
/// what is drawn there.
///
/// The avatar occupies the single cell containing its centre so it stays
/// visible at any scale.
pub fn classify_cell(
    snapshot: &Snapshot,
    col: usize,
    row: usize,
    width: usize,
    height: usize,
) -> Cell {
    let x_scale = SCREEN_WIDTH / width as f64;
    let y_scale = SCREEN_HEIGHT / height as f64;

    let bounds = snapshot.avatar.bounds;
    let avatar_col = ((bounds.x + bounds.width / 2.0) / x_scale).floor();
    let avatar_row = ((bounds.y + bounds.height / 2.0) / y_scale).floor();
    if avatar_col == col as f64 && avatar_row == row as f64 {
        return Cell::Avatar;
    }

    let world_x = (col as f64 + 0.5) * x_scale;
    let world_y = (row as f64 + 0.5) * y_scale;

    for obstacle in &snapshot.obstacles {
        if world_x < obstacle.top.x || world_x >= obstacle.top.right() {
            continue;
        }
        if world_y < obstacle.gap_top {
            return if world_y + y_scale >= obstacle.gap_top {
                Cell::BarrierEdge
            } else {
                Cell::Barrier
            };
        }
        if world_y >= obstacle.gap_bottom {
            return if world_y - y_scale < obstacle.gap_bottom {
                Cell::BarrierEdge
            } else {
                Cell::Barrier
            };
        }
    }

    Cell::Sky
}

/// Draw the outer border and carve it into field, status rows and panel.
///
/// The border turns red once the run is over.
fn split_scene(frame: &mut Frame, area: Rect, snapshot: &Snapshot) -> SceneAreas {
    frame.render_widget(Clear, area);

    let border = if snapshot.is_over {
        Color::Red
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(" Skyward ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(PANEL_WIDTH)])
        .split(inner);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(columns[0]);

    SceneAreas {
        field: rows[0],
        status: rows[1],
        panel: columns[1],
    }
}

/// The two status rows under the field: what is happening, then which keys
/// do something right now.
fn status_lines(snapshot: &Snapshot) -> [Line<'static>; 2] {
    let (message, color, controls): (String, Color, &[(&str, &str)]) = if snapshot.is_over {
        (
            format!("Crashed with {} points", snapshot.score),
            Color::Red,
            &[("[Space/R]", "Restart"), ("[Q/Esc]", "Quit")],
        )
    } else {
        (
            format!("Score: {}", snapshot.score),
            Color::Green,
            &[("[Space/Up]", "Flap"), ("[Q/Esc]", "Quit")],
        )
    };

    let mut keys = Vec::with_capacity(controls.len() * 3);
    for (key, action) in controls {
        if !keys.is_empty() {
            keys.push(Span::raw("  "));
        }
        keys.push(Span::styled(*key, Style::default().fg(Color::White)));
        keys.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }

    [
        Line::styled(message, Style::default().fg(color)),
        Line::from(keys),
    ]
}

/// Banner over the bottom rows of the field; the crash scene stays visible
/// above it.
fn render_crash_banner(frame: &mut Frame, field: Rect, snapshot: &Snapshot) {
    let height = BANNER_HEIGHT.min(field.height);
    let banner = Rect {
        y: field.y + field.height - height,
        height,
        ..field
    };
    frame.render_widget(Clear, banner);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(banner);
    frame.render_widget(block, banner);

    let new_best = snapshot.score > 0 && snapshot.score >= snapshot.high_score;
    let verdict = if new_best {
        format!("New best: {} gates!", snapshot.score)
    } else {
        format!("You passed {} gates.", snapshot.score)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "Game Over!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(verdict, Style::default().fg(Color::White)),
        ]),
        Line::styled("Press SPACE to restart", Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_score_panel(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let block = Block::default()
        .title(" Scores ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let best_style = if snapshot.score > snapshot.high_score {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", snapshot.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" High Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}", snapshot.high_score), best_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Gates: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", snapshot.obstacles.len()),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Tilt: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:+.0}°", snapshot.avatar.angle),
                Style::default().fg(Color::Cyan),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
