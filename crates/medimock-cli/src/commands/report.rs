// crates/medimock-cli/src/commands/report.rs
//
// `medimock report` — submit a report to POST /report.

use clap::Args;

use crate::api_client::{ApiClient, CliError};
use crate::output::{self, OutputFormat};

/// Arguments for `medimock report`.
#[derive(Debug, Args)]
pub struct ReportCmd {
    /// JSON body to send.
    #[arg(long, default_value = "{}")]
    pub body: String,
}

/// Run the report command.
pub async fn run(client: &ApiClient, cmd: &ReportCmd, format: &OutputFormat) -> Result<(), CliError> {
    let body = parse_body(&cmd.body)?;
    let ack = client.report(&body).await?;
    println!("{}", output::render(format, &ack, &output::ack_rows(&ack)));
    Ok(())
}

fn parse_body(raw: &str) -> Result<serde_json::Value, CliError> {
    Ok(serde_json::from_str(raw)?)
}
