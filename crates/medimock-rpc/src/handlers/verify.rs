// crates/medimock-rpc/src/handlers/verify.rs
//
// Verification handler: POST /verify.
//
// The body is normally multipart/form-data carrying a package photo and an
// optional `mode` text field. The upload is streamed and thrown away; only
// `mode` influences the response. A JSON body with a `mode` key is honoured
// as well; an empty JSON body counts as `{}`. Any other body is treated as
// carrying no mode.

use axum::body::Bytes;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use medimock_core::{RandomSource, VerificationMethod, VerificationResult};

/// Name of the text field selecting the verification method.
pub const MODE_FIELD: &str = "mode";

// ---------------------------------------------------------------------------
// VerifyRequest
// ---------------------------------------------------------------------------

/// What the server keeps from a /verify body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyRequest {
    /// Raw `mode` field, if the client sent one. Holds the first value when
    /// the field is repeated.
    pub mode: Option<String>,
    /// Number of `mode` text fields received.
    pub mode_fields: u32,
    /// Number of non-`mode` fields received (images or stray text).
    pub upload_fields: u32,
    /// Total bytes read and discarded from those fields.
    pub upload_bytes: u64,
}

impl VerifyRequest {
    /// Read a /verify body, dispatching on its content type.
    pub async fn extract(request: Request) -> Result<Self, VerifyError> {
        let content_type = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(request, &()).await?;
            Self::from_multipart(multipart).await
        } else if content_type.starts_with("application/json") {
            let body = Bytes::from_request(request, &()).await?;
            Self::from_json(&body)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse a JSON body. Empty or whitespace-only bodies read as `{}`.
    pub fn from_json(body: &[u8]) -> Result<Self, VerifyError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: serde_json::Value = serde_json::from_slice(body)?;
        let mode = value
            .get(MODE_FIELD)
            .and_then(|m| m.as_str())
            .map(str::to_string);
        Ok(Self {
            mode_fields: u32::from(mode.is_some()),
            mode,
            ..Self::default()
        })
    }

    /// Drain every multipart field, counting the `mode` text fields.
    ///
    /// File contents are consumed chunk by chunk so uploads of any size pass
    /// through without being buffered.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, VerifyError> {
        let mut request = Self::default();

        while let Some(mut field) = multipart.next_field().await? {
            let is_mode = field.name() == Some(MODE_FIELD) && field.file_name().is_none();
            if is_mode {
                let text = field.text().await?;
                request.mode_fields += 1;
                if request.mode.is_none() {
                    request.mode = Some(text);
                }
                continue;
            }

            request.upload_fields += 1;
            while let Some(chunk) = field.chunk().await? {
                request.upload_bytes += chunk.len() as u64;
            }
        }

        Ok(request)
    }

    /// The verification method this request selects.
    ///
    /// A repeated `mode` field arrives as a list of values, which never
    /// equals `"qr"`, so it selects `Ai`.
    pub fn method(&self) -> VerificationMethod {
        if self.mode_fields > 1 {
            return VerificationMethod::Ai;
        }
        VerificationMethod::from_mode(self.mode.as_deref())
    }
}

// ---------------------------------------------------------------------------
// VerifyError
// ---------------------------------------------------------------------------

/// Body-parsing failures. Rejections answer with the status axum chose for
/// them; malformed JSON answers 400.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("Malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Rejected multipart request: {0}")]
    MultipartRejection(#[from] MultipartRejection),

    #[error("Unreadable request body: {0}")]
    Body(#[from] BytesRejection),

    #[error("Malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for VerifyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "Rejected /verify body");
        match self {
            VerifyError::Multipart(e) => e.into_response(),
            VerifyError::MultipartRejection(e) => e.into_response(),
            VerifyError::Body(e) => e.into_response(),
            VerifyError::Json(e) => {
                (StatusCode::BAD_REQUEST, format!("Malformed JSON body: {}", e)).into_response()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Verify
// ---------------------------------------------------------------------------

/// Handle a Verify request.
///
/// The upload is never inspected: authenticity and confidence come from
/// `random`, everything else from the canned fixtures.
pub fn handle_verify(request: &VerifyRequest, random: &dyn RandomSource) -> VerificationResult {
    let result = VerificationResult::generate(request.method(), random);

    tracing::debug!(
        method = %result.verification_method,
        is_authentic = result.is_authentic,
        confidence = %result.confidence,
        upload_fields = request.upload_fields,
        upload_bytes = request.upload_bytes,
        "Generated verification result"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_blank_body_is_empty_request() {
        assert_eq!(VerifyRequest::from_json(b"").unwrap(), VerifyRequest::default());
        assert_eq!(VerifyRequest::from_json(b" \r\n\t").unwrap(), VerifyRequest::default());
    }

    #[test]
    fn test_from_json_reads_string_mode_only() {
        let request = VerifyRequest::from_json(br#"{"mode":"qr"}"#).unwrap();
        assert_eq!(request.mode.as_deref(), Some("qr"));
        assert_eq!(request.method(), VerificationMethod::Qr);

        let request = VerifyRequest::from_json(br#"{"mode":["qr"]}"#).unwrap();
        assert_eq!(request.mode, None);
        assert_eq!(request.method(), VerificationMethod::Ai);

        let request = VerifyRequest::from_json(b"[1, 2]").unwrap();
        assert_eq!(request.method(), VerificationMethod::Ai);
    }

    #[test]
    fn test_from_json_malformed_is_error() {
        assert!(matches!(
            VerifyRequest::from_json(br#"{"mode":"#),
            Err(VerifyError::Json(_))
        ));
    }

    #[test]
    fn test_repeated_mode_selects_ai() {
        let request = VerifyRequest {
            mode: Some("qr".to_string()),
            mode_fields: 2,
            ..VerifyRequest::default()
        };
        assert_eq!(request.method(), VerificationMethod::Ai);
    }

    #[test]
    fn test_malformed_json_answers_bad_request() {
        let err = VerifyRequest::from_json(b"{").unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
