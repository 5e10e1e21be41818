//! Tracing subscriber setup for the binaries.
//!
//! The terminal game owns stdout/stderr while running, so it logs to a file.
//! The filter comes from `RUST_LOG` when set.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Append logs to `path`. Returns false (logging stays off) if the file
/// cannot be opened or a subscriber is already installed.
pub fn init_file_logging(path: &Path) -> bool {
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter_or("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .is_ok()
}

/// Log to stderr, for the headless tools.
pub fn init_stderr_logging(default_filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(filter_or(default_filter))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritable_log_path_disables_logging() {
        let dir = std::env::temp_dir();
        // A directory cannot be opened for appending.
        assert!(!init_file_logging(&dir));
    }
}
