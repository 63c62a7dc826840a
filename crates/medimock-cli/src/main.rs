// crates/medimock-cli/src/main.rs
//
// CLI entrypoint for the MediMock developer tools.
//
// Provides subcommands that exercise each mock route and print the
// response as a table or as JSON.

mod api_client;
mod commands;
mod output;

use clap::{Parser, Subcommand};
use commands::blockchain::BlockchainCmd;
use commands::report::ReportCmd;
use commands::verify::VerifyCmd;
use output::OutputFormat;

/// MediMock CLI — call the mock verification API from a terminal.
#[derive(Parser, Debug)]
#[command(name = "medimock", version, about = "Client for the MediMock API mock server")]
struct Cli {
    /// Base URL of the MediMock server.
    #[arg(long, global = true, default_value = "http://localhost:3001")]
    api: String,

    /// Print raw JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
enum Commands {
    /// Upload a package photo for verification.
    Verify(VerifyCmd),

    /// Look up the ledger record for a transaction.
    Blockchain(BlockchainCmd),

    /// Submit a report.
    Report(ReportCmd),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = api_client::ApiClient::new(&cli.api);
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };

    match &cli.command {
        Commands::Verify(cmd) => commands::verify::run(&client, cmd, &format).await?,
        Commands::Blockchain(cmd) => commands::blockchain::run(&client, cmd, &format).await?,
        Commands::Report(cmd) => commands::report::run(&client, cmd, &format).await?,
    }

    Ok(())
}
