use std::path::PathBuf;

use clap::Parser;
use hbnb_console::{Backend, ConfigError, ConsoleConfig};

#[derive(Debug, Parser)]
#[command(
    name = "hbnb",
    about = "HBNB console: create, inspect and update stored objects",
    version
)]
pub struct Cli {
    /// JSON storage file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Keep objects in memory only
    #[arg(long, conflicts_with = "file")]
    pub memory: bool,

    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Configuration file values (or defaults) with the flags applied on top.
    pub fn resolve_config(&self) -> Result<ConsoleConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ConsoleConfig::load(path)?,
            None => ConsoleConfig::default(),
        };
        if let Some(file) = &self.file {
            config.storage_path = file.clone();
            config.backend = Backend::File;
        }
        if self.memory {
            config.backend = Backend::Memory;
        }
        if self.verbose {
            config.log_level = "debug".to_string();
        }
        Ok(config)
    }
}
