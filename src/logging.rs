//! File logging for the dashboard.
//!
//! The terminal belongs to the UI, so tracing output goes to
//! `~/.trivia-dash/trivia-dash.log`. The level comes from `TRIVIA_LOG`
//! (same syntax as `RUST_LOG`), defaulting to `info`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "TRIVIA_LOG";

const LOG_DIR: &str = ".trivia-dash";
const LOG_FILE: &str = "trivia-dash.log";

/// Default log location under the user's home directory.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(LOG_DIR).join(LOG_FILE))
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Filter from `TRIVIA_LOG`, or `info` when unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `path`.
pub fn init_logging_at(path: &Path) -> io::Result<()> {
    let file = open_log_file(path)?;

    // A second install (tests) is not an error worth surfacing.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(())
}

/// Install file logging at the default location.
///
/// Logging is best-effort: failures are reported on stderr and the
/// dashboard runs without a log.
pub fn init_logging() {
    let Some(path) = default_log_path() else {
        eprintln!("trivia-dash: no home directory, logging disabled");
        return;
    };

    if let Err(e) = init_logging_at(&path) {
        eprintln!("trivia-dash: cannot open {}: {}", path.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_log_path_layout() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with(".trivia-dash/trivia-dash.log"));
        }
    }

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("dash.log");

        open_log_file(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_open_log_file_appends() {
        use std::io::Write;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dash.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }
}
