//! Version and help output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
trivia-dash - explore Open Trivia DB questions in your terminal

USAGE:
    trivia-dash [OPTIONS]

OPTIONS:
    -n, --amount <N>        Questions to fetch (1-50, default 50)
    -u, --base-url <URL>    API base URL (default https://opentdb.com)
    -c, --category <NAME>   Start filtered to this category
    -h, --help              Print this help
    -V, --version           Print version

ENVIRONMENT:
    TRIVIA_BASE_URL, TRIVIA_AMOUNT, TRIVIA_TIMEOUT_SECS, TRIVIA_LOG";

/// Version line printed by `--version`.
pub fn version_line() -> String {
    format!("trivia-dash {}", VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
        assert!(version_line().starts_with("trivia-dash "));
    }

    #[test]
    fn test_usage_mentions_every_flag() {
        for flag in ["--amount", "--base-url", "--category", "--help", "--version"] {
            assert!(USAGE.contains(flag), "missing {flag}");
        }
    }
}
