use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "job-tracker")]
#[command(about = "Terminal tracker for job applications")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Track applications stored in the data directory (default)
    Run,
    /// Run with sample applications kept in memory; applications are not saved
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
}
