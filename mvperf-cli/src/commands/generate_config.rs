//! Generate config command implementation

use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use mvperf_core::charts::{DEFAULT_DPI, PERFORMANCE_FILE, SCALABILITY_FILE};
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Path of the settings file to write
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.path.exists() && !self.force {
            return Err(CliError::OutputError(format!(
                "{} already exists (use --force to overwrite)",
                self.path.display()
            ))
            .into());
        }

        println!("Generating settings template...");
        println!("  Output file: {}", self.path.display());

        fs::write(&self.path, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.path.display()))?;

        println!("✓ Settings template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to change the output directory or resolution");
        println!("2. Use it for rendering:");
        println!("   mvperf --config {} run", self.path.display());

        Ok(())
    }

    /// Generate template settings content
    fn generate_template(&self) -> String {
        format!(
            r#"# mvperf settings
# Every key is optional; command-line options take precedence.

[charts]
# Directory the PNG files are written to (created when missing)
output_dir = "."

# Output resolution; figure sizes are fixed in inches
dpi = {DEFAULT_DPI}

performance_file = "{PERFORMANCE_FILE}"
scalability_file = "{SCALABILITY_FILE}"

[report]
# text, json or markdown
default_format = "text"
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            path: PathBuf::from("mvperf.toml"),
            force: false,
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("mvperf.toml"));
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let args = GenerateConfigArgs {
            path: PathBuf::from("mvperf.toml"),
            force: false,
        };

        let config = CliConfig::from_toml(&args.generate_template()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mvperf.toml");

        let args = GenerateConfigArgs {
            path: path.clone(),
            force: false,
        };

        assert!(args.execute().is_ok());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[charts]"));
        assert!(content.contains("dpi = 300"));
    }

    #[test]
    fn test_existing_file_needs_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("mvperf.toml");
        std::fs::write(&path, "keep me").unwrap();

        let args = GenerateConfigArgs {
            path: path.clone(),
            force: false,
        };
        let err = args.execute().unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");

        let forced = GenerateConfigArgs { path, force: true };
        assert!(forced.execute().is_ok());
    }
}
