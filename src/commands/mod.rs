pub mod export;
pub mod init;
pub mod intention;
pub mod report;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Monitor screen activity against your planned work until interrupted")]
    Watch(watch::WatchArgs),
    #[command(about = "Show which activity tags a plan resolves to", arg_required_else_help = true)]
    Intention(intention::IntentionArgs),
    #[command(about = "Report on the last recorded session")]
    Report(report::ReportArgs),
    #[command(about = "Export the last recorded session")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Watch(args) => watch::cmd(args).await,
            Commands::Intention(args) => intention::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
