// crates/medimock-cli/src/commands/blockchain.rs
//
// `medimock blockchain <id>` — fetch a ledger record.

use clap::Args;

use crate::api_client::{ApiClient, CliError};
use crate::output::{self, OutputFormat};

/// Arguments for `medimock blockchain`.
#[derive(Debug, Args)]
pub struct BlockchainCmd {
    /// Transaction id to look up.
    pub id: String,
}

/// Run the blockchain command.
pub async fn run(
    client: &ApiClient,
    cmd: &BlockchainCmd,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let record = client.get_record(&cmd.id).await?;
    println!("{}", output::render(format, &record, &output::record_rows(&record)));
    Ok(())
}
