//! Command-line interface definitions using clap

use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::config::StaticConfig;
use crate::errors::{LinkdoError, Result};

/// Default output of `config-gen`
pub const DEFAULT_SAMPLE_CONFIG_PATH: &str = "config.example.toml";

/// Linkdo - a URL shortener and a TODO list, each served over HTTP
#[derive(Parser, Debug)]
#[command(name = "linkdo")]
#[command(version)]
#[command(about = "URL shortener and TODO list HTTP services", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the URL shortening service
    ShortUrl,

    /// Run the TODO list service
    Todo,

    /// Generate example configuration file
    ConfigGen {
        /// Output path
        #[arg(default_value = DEFAULT_SAMPLE_CONFIG_PATH)]
        output_path: String,

        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },
}

/// Generate example configuration file
pub fn config_generate(output_path: &str, force: bool) -> Result<()> {
    // 文件已存在时，非 --force 模式下交互确认
    if !force && Path::new(output_path).exists() {
        print!(
            "{} {} {}",
            "File already exists:".yellow(),
            output_path.blue(),
            "Overwrite? [y/N] ".yellow()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("{}", "Aborted.".red());
            return Ok(());
        }
    }

    println!(
        "{} {}",
        "Generating configuration file...".yellow(),
        output_path.blue()
    );

    match StaticConfig::default().save_to_file(output_path) {
        Ok(()) => {
            println!(
                "  {} {}",
                "Configuration file generated successfully".green(),
                output_path.blue()
            );
            println!(
                "  {}",
                "Copy it to config.toml and edit it before starting a service".yellow()
            );
            Ok(())
        }
        Err(e) => {
            println!(
                "  {} {}",
                "Failed to generate configuration file".red(),
                e.to_string().red()
            );
            Err(LinkdoError::file_operation(format!(
                "Unable to write configuration file: {}",
                e.message()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_service_commands() {
        let cli = Cli::parse_from(["linkdo", "short-url"]);
        assert_eq!(cli.command, Commands::ShortUrl);
        assert!(cli.config.is_none());

        let cli = Cli::parse_from(["linkdo", "todo", "--config", "/etc/linkdo.toml"]);
        assert_eq!(cli.command, Commands::Todo);
        assert_eq!(cli.config.as_deref(), Some("/etc/linkdo.toml"));
    }

    #[test]
    fn test_parse_config_gen_defaults() {
        let cli = Cli::parse_from(["linkdo", "config-gen"]);
        assert_eq!(
            cli.command,
            Commands::ConfigGen {
                output_path: DEFAULT_SAMPLE_CONFIG_PATH.to_string(),
                force: false,
            }
        );
    }

    #[test]
    fn test_missing_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["linkdo"]).is_err());
    }

    #[test]
    fn test_config_generate_force_writes_loadable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.toml");
        std::fs::write(&path, "stale").unwrap();

        config_generate(path.to_str().unwrap(), true).unwrap();

        let loaded = StaticConfig::load(path.to_str()).unwrap();
        assert_eq!(loaded, StaticConfig::default());
    }
}
