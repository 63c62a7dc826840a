// crates/medimock-cli/src/commands/verify.rs
//
// `medimock verify` — upload a package photo to POST /verify.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::api_client::{ApiClient, CliError};
use crate::output::{self, OutputFormat};

/// Verification mode sent in the `mode` form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Qr,
    Ai,
}

impl Mode {
    fn as_str(&self) -> &'static str {
        match self {
            Mode::Qr => "qr",
            Mode::Ai => "ai",
        }
    }
}

/// Arguments for `medimock verify`.
#[derive(Debug, Args)]
pub struct VerifyCmd {
    /// Path to the image to upload.
    pub image: PathBuf,

    /// Verification mode. Omitted means the server defaults to "ai".
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
}

/// Run the verify command.
pub async fn run(client: &ApiClient, cmd: &VerifyCmd, format: &OutputFormat) -> Result<(), CliError> {
    let result = client
        .verify(&cmd.image, cmd.mode.as_ref().map(Mode::as_str))
        .await?;
    println!("{}", output::render(format, &result, &output::verification_rows(&result)));
    Ok(())
}
