use crate::report::{run_leads_report, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use leadboard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Leadboard",
    about = "Serve the lead analytics API or print a lead pipeline report",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Lead pipeline utilities
    Leads {
        #[command(subcommand)]
        command: LeadsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum LeadsCommand {
    /// Print a status breakdown for a lead snapshot
    Report(ReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Leads {
            command: LeadsCommand::Report(args),
        } => run_leads_report(args),
    }
}
