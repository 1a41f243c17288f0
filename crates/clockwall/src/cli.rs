//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;
use clockwall_config::{Config, ConfigError, Mode};

/// A wall of analog clocks, animated in your terminal.
#[derive(Parser, Debug)]
#[command(name = "clockwall", version, about)]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(short, long, env = "CLOCKWALL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Animation mode: static, tween or continuous.
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Frames per second for rendering and tweening.
    #[arg(long)]
    pub frame_rate: Option<u32>,

    /// Write logs to this file (filtered by RUST_LOG).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the configuration and apply flag overrides on top.
    pub fn resolve(&self) -> Result<Config, ConfigError> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        let config = self.apply(config);
        config.validate()?;
        Ok(config)
    }

    fn apply(&self, mut config: Config) -> Config {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(frame_rate) = self.frame_rate {
            config.frame_rate = frame_rate;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }
        config
    }
}
