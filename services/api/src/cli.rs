use crate::report::{run_match, run_vocabulary, MatchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use guna_milan::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "guna-milan",
    about = "Ashta-Koota compatibility scoring over HTTP or from the command line",
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
    /// Score a single couple and print the breakdown
    Match(MatchArgs),
    /// List accepted sign and nakshatra names with their classifications
    Vocabulary,
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
        Command::Match(args) => run_match(args),
        Command::Vocabulary => {
            run_vocabulary();
            Ok(())
        }
    }
}
