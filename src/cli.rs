//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

use crate::composer::{Action, Tone};
use crate::config::{Config, ConfigError, Defaults};

#[derive(Debug, Parser)]
#[command(
    name = "postcraft",
    version,
    about = "Rewrite short posts with a remote text-generation service"
)]
pub struct Cli {
    /// Config file (default: ~/.config/postcraft/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Tone: Funny, Serious, Casual, Formal, Humorous, Sarcastic
    #[arg(long)]
    pub tone: Option<Tone>,

    /// Action: Formatting, Improving, Correcting
    #[arg(long)]
    pub action: Option<Action>,

    /// Generate once, print the result and exit instead of starting the TUI
    #[arg(long)]
    pub print: bool,

    /// With --print: refine the generated result with these instructions
    #[arg(long, value_name = "TEXT", requires = "print")]
    pub improve: Option<String>,

    /// Initial draft (with --print, read from stdin when omitted)
    pub draft: Option<String>,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    /// Command-line selection wins over config defaults.
    pub fn selection(&self, defaults: &Defaults) -> (Tone, Action) {
        (
            self.tone.unwrap_or(defaults.tone),
            self.action.unwrap_or(defaults.action),
        )
    }
}
