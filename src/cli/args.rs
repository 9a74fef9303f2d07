//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::env;
use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::consts::{HOME_DIR, HOME_ENV, RECORD_EXTENSION, RECORDS_DIR};

use super::commands::Commands;

#[derive(Parser)]
#[command(name = "worklog")]
#[command(about = "Find and filter task time records", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Worklog home holding projects.json (default: $WORKLOG_HOME or ~/.worklog)
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) home: Option<PathBuf>,

    /// Directory scanned for task records (default: <home>/tasks)
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) root: Option<PathBuf>,

    /// Record file extension, without the dot
    #[arg(long, global = true, value_name = "EXT")]
    pub(crate) extension: Option<String>,

    /// Zone for resolving dates: "local" (default), "utc" or an offset like "+02:00"
    #[arg(long, global = true, value_name = "TZ")]
    pub(crate) timezone: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge environment and config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if self.home.is_none() {
            self.home = env::var_os(HOME_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .or_else(|| config.home.clone());
        }
        if self.root.is_none() {
            self.root = config.root.clone();
        }
        if self.extension.is_none() {
            self.extension = config.extension.clone();
        }
        if self.timezone.is_none() {
            self.timezone = config.timezone.clone();
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        self
    }

    pub(crate) fn home_dir(&self) -> PathBuf {
        self.home.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .map(|home| home.join(HOME_DIR))
                .unwrap_or_else(|| PathBuf::from(HOME_DIR))
        })
    }

    pub(crate) fn records_root(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| self.home_dir().join(RECORDS_DIR))
    }

    pub(crate) fn record_extension(&self) -> &str {
        self.extension
            .as_deref()
            .map(|ext| ext.trim_start_matches('.'))
            .unwrap_or(RECORD_EXTENSION)
    }

    pub(crate) fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}
