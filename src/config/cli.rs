use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "toon-resolver")]
#[command(about = "Resolve webtoon backend services and format ratings")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Resolve the backend a selection request points at
    Resolve {
        /// Service name to request, e.g. "daum"
        #[arg(short, long, conflicts_with = "request")]
        service: Option<String>,

        /// Full selection request as a JSON object of extras
        #[arg(short, long)]
        request: Option<String>,
    },

    /// Format a rating for display
    Rate {
        /// Rating as text, e.g. "4.5"
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// List registered backends
    List,

    /// Print the selection request keys
    Keys,
}
