pub mod delete;
pub mod init;
pub mod list;
pub mod report;
pub mod search;
pub mod start;
pub mod status;
pub mod stop;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Start a new work session")]
    Start(start::StartArgs),
    #[command(about = "Stop the current work session")]
    Stop(stop::StopArgs),
    #[command(about = "Show the current session status")]
    Status,
    #[command(about = "List past work sessions")]
    List(list::ListArgs),
    #[command(about = "Search sessions by description or notes")]
    Search(search::SearchArgs),
    #[command(about = "Generate a productivity report")]
    Report(report::ReportArgs),
    #[command(about = "Delete a session by ID")]
    Delete(delete::DeleteArgs),
    #[command(about = "Configuration initialization")]
    Init,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Start(args) => start::cmd(args),
            Commands::Stop(args) => stop::cmd(args),
            Commands::Status => status::cmd(),
            Commands::List(args) => list::cmd(args),
            Commands::Search(args) => search::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Init => init::cmd(),
        }
    }
}
