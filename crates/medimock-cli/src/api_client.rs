// crates/medimock-cli/src/api_client.rs
//
// Lightweight HTTP client for the MediMock routes.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use medimock_core::{BlockchainRecord, ReportAck, VerificationResult};

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Client bound to one MediMock base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Build `<base>/<segments...>`, percent-encoding each segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, CliError> {
        let mut url = Url::parse(&self.base).map_err(|e| CliError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| CliError::InvalidUrl(format!("{} cannot be a base", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// POST /verify with the file at `image` and an optional mode.
    pub async fn verify(
        &self,
        image: &Path,
        mode: Option<&str>,
    ) -> Result<VerificationResult, CliError> {
        let bytes = tokio::fs::read(image).await?;
        let file_name = image
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());

        let mut form = Form::new().part("image", Part::bytes(bytes).file_name(file_name));
        if let Some(mode) = mode {
            form = form.text("mode", mode.to_string());
        }

        let resp = self
            .http
            .post(self.endpoint(&["verify"])?)
            .multipart(form)
            .send()
            .await?;
        decode(resp).await
    }

    /// GET /blockchain/:id
    pub async fn get_record(&self, id: &str) -> Result<BlockchainRecord, CliError> {
        let resp = self
            .http
            .get(self.endpoint(&["blockchain", id])?)
            .send()
            .await?;
        decode(resp).await
    }

    /// POST /report with a JSON body.
    pub async fn report(&self, body: &serde_json::Value) -> Result<ReportAck, CliError> {
        let resp = self
            .http
            .post(self.endpoint(&["report"])?)
            .json(body)
            .send()
            .await?;
        decode(resp).await
    }
}

/// Check the status, then decode the JSON body.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, CliError> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(CliError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(serde_json::from_str(&body)?)
}
