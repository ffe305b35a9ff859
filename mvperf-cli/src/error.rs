//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Settings file could not be parsed
    ConfigError(String),
    /// Output target refused (existing file, unwritable path)
    OutputError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::OutputError(msg) => write!(f, "Output error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_output_error_display() {
        let error = CliError::OutputError("mvperf.toml already exists".to_string());
        assert_eq!(error.to_string(), "Output error: mvperf.toml already exists");
    }

    #[test]
    fn test_error_converts_into_anyhow() {
        let failure: CliResult<()> = Err(CliError::ConfigError("bad dpi".to_string()).into());
        let err = failure.unwrap_err();

        assert!(err.to_string().contains("bad dpi"));
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::OutputError("グラフ/chart 文件.png".to_string());
        assert_eq!(error.to_string(), "Output error: グラフ/chart 文件.png");
    }
}
