use crate::demo::{run_audit, run_batch, run_demo, AuditArgs, BatchArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ebd_audit::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "EBD Space Auditor",
    about = "Evaluate care-environment spaces against evidence-based design thresholds",
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
    /// Audit a single space from command-line measurements
    Audit(AuditArgs),
    /// Audit every space in a measurement CSV export
    Batch(BatchArgs),
    /// Audit the built-in survey fixtures end to end
    Demo(DemoArgs),
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
        Command::Audit(args) => run_audit(args),
        Command::Batch(args) => run_batch(args),
        Command::Demo(args) => run_demo(args),
    }
}
