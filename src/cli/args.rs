//! Command-line argument parsing.

use thiserror::Error;

/// Overrides given on the command line for a dashboard run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// `--amount <n>`
    pub amount: Option<u32>,
    /// `--base-url <url>`
    pub base_url: Option<String>,
    /// `--category <name>`
    pub category: Option<String>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the dashboard (default)
    Run(CliOptions),
}

/// Bad command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(String),
    #[error("invalid amount '{0}': expected a whole number")]
    InvalidAmount(String),
}

/// Parse command-line arguments and return the command to run.
///
/// Unknown flags are ignored.
///
/// # Examples
///
/// ```
/// use trivia_dash::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["trivia-dash".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--amount" | "-n" => {
                let value = value_for(&flag, inline, &mut args)?;
                let amount = value
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| ArgsError::InvalidAmount(value.clone()))?;
                options.amount = Some(amount);
            }
            "--base-url" | "-u" => {
                options.base_url = Some(value_for(&flag, inline, &mut args)?);
            }
            "--category" | "-c" => {
                options.category = Some(value_for(&flag, inline, &mut args)?);
            }
            _ => {}
        }
    }

    Ok(CliCommand::Run(options))
}

fn value_for<I>(flag: &str, inline: Option<String>, args: &mut I) -> Result<String, ArgsError>
where
    I: Iterator<Item = String>,
{
    inline
        .or_else(|| args.next())
        .ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ArgsError> {
        parse_args(
            std::iter::once("trivia-dash")
                .chain(args.iter().copied())
                .map(str::to_string),
        )
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::Run(CliOptions::default())));
    }

    #[test]
    fn test_parse_run_options() {
        let command = parse(&[
            "--amount",
            "10",
            "-u",
            "http://localhost:8080",
            "--category=Science & Nature",
        ])
        .unwrap();

        assert_eq!(
            command,
            CliCommand::Run(CliOptions {
                amount: Some(10),
                base_url: Some("http://localhost:8080".to_string()),
                category: Some("Science & Nature".to_string()),
            })
        );
    }

    #[test]
    fn test_invalid_amount() {
        assert_eq!(
            parse(&["--amount", "lots"]),
            Err(ArgsError::InvalidAmount("lots".to_string()))
        );
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(
            parse(&["--base-url"]),
            Err(ArgsError::MissingValue("--base-url".to_string()))
        );
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--unknown"]),
            Ok(CliCommand::Run(CliOptions::default()))
        );
    }
}
