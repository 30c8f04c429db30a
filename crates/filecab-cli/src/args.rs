use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "filecab")]
#[command(about = "Interactive personal-record store with secondary indexes and CSV/XML import-export", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Built-in validation rule set to apply on create/edit
    #[arg(long, value_parser = ["default", "custom"], default_value = "default")]
    pub validation: String,

    /// Load validation rule sets from a TOML file instead of the built-ins
    #[arg(long)]
    pub validation_rules: Option<PathBuf>,

    /// Print the execution duration of every service call
    #[arg(long)]
    pub use_stopwatch: bool,

    /// Append a timestamped line per service call to the log file
    #[arg(long)]
    pub use_logger: bool,

    /// Log file used with --use-logger
    #[arg(long, default_value = "filecab.log")]
    pub log_file: PathBuf,

    /// Output format for the list command
    #[arg(long, value_parser = ["plain", "json"], default_value = "plain")]
    pub format: String,
}
