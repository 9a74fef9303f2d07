//! CLI subcommand definitions

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List task records, filtered by time window, project and tag
    Find(FindArgs),
    /// Show the project hierarchy derived from projects.json
    Projects,
    /// Resolve a date/time string (HH:MM, YYYY-MM-DD [HH:MM], DD-MM-YYYY [HH:MM])
    Date {
        /// Date string; several words are joined with a space
        #[arg(required = true, num_args = 1..)]
        raw: Vec<String>,
        /// Round a bare date up to 23:59:59
        #[arg(long)]
        end_of_day: bool,
    },
    /// Format a number of seconds as H:MM:SS
    Duration {
        seconds: Option<u64>,
    },
}

#[derive(Args, Debug, Default)]
pub(crate) struct FindArgs {
    /// Earliest record start (inclusive)
    #[arg(long, value_name = "DATE")]
    pub(crate) from: Option<String>,

    /// Latest record start (inclusive; a bare date means the whole day)
    #[arg(long, value_name = "DATE")]
    pub(crate) to: Option<String>,

    /// Only records of this project (repeatable)
    #[arg(short, long = "project", value_name = "PROJECT")]
    pub(crate) projects: Vec<String>,

    /// Only records whose text contains this tag (repeatable)
    #[arg(short, long = "tag", value_name = "TAG")]
    pub(crate) tags: Vec<String>,
}
