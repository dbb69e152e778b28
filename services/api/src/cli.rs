use crate::commands::{run_match, run_report, run_screen, MatchArgs, ReportArgs, ScreenArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rehab_ai::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Rehabilitation Services Core",
    about = "Screen eligibility, match jobs, and build RSA-911 reports from the command line",
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
    /// Screen a client profile against every benefit program
    Screen(ScreenArgs),
    /// Score a job catalog against a client's matching request
    Match(MatchArgs),
    /// Aggregate case records into an RSA-911 report
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
        Command::Screen(args) => run_screen(args),
        Command::Match(args) => run_match(args),
        Command::Report(args) => run_report(args),
    }
}
