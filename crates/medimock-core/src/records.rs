// crates/medimock-core/src/records.rs
//
// Wire records returned by the MediMock routes. Each record is built fresh
// per request and serialized straight to JSON; field order here is the
// field order on the wire.

use serde::{Deserialize, Serialize};

use crate::fixtures;
use crate::random::{clamp_unit, RandomSource};

// ---------------------------------------------------------------------------
// VerificationMethod
// ---------------------------------------------------------------------------

/// How a medicine package was checked: QR scan or image model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationMethod {
    Qr,
    Ai,
}

impl VerificationMethod {
    /// Map the request's `mode` field to a method.
    ///
    /// Only the exact string `"qr"` selects `Qr`; anything else, including a
    /// missing field or `"QR"`, selects `Ai`.
    pub fn from_mode(mode: Option<&str>) -> Self {
        match mode {
            Some("qr") => VerificationMethod::Qr,
            _ => VerificationMethod::Ai,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationMethod::Qr => "qr",
            VerificationMethod::Ai => "ai",
        }
    }
}

impl std::fmt::Display for VerificationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// VerificationResult
// ---------------------------------------------------------------------------

/// Result of a (simulated) authenticity check, returned by `POST /verify`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub transaction_id: String,
    /// True with probability 0.7.
    pub is_authentic: bool,
    /// Decimal string with exactly four fractional digits, in [0.5, 1.0).
    pub confidence: String,
    pub medicine_name: String,
    pub manufacturer: String,
    pub batch_number: String,
    pub expiry_date: String,
    pub production_date: String,
    pub verification_method: VerificationMethod,
}

impl VerificationResult {
    /// Build a result, drawing `is_authentic` then `confidence` from `source`.
    pub fn generate(method: VerificationMethod, source: &dyn RandomSource) -> Self {
        let is_authentic = clamp_unit(source.next_unit()) > fixtures::AUTHENTIC_THRESHOLD;
        let confidence = format_confidence(clamp_unit(source.next_unit()));

        Self {
            transaction_id: fixtures::TRANSACTION_ID.to_string(),
            is_authentic,
            confidence,
            medicine_name: fixtures::MEDICINE_NAME.to_string(),
            manufacturer: fixtures::MANUFACTURER.to_string(),
            batch_number: fixtures::BATCH_NUMBER.to_string(),
            expiry_date: fixtures::EXPIRY_DATE.to_string(),
            production_date: fixtures::PRODUCTION_DATE.to_string(),
            verification_method: method,
        }
    }

    /// Parse the confidence string back into a number.
    pub fn confidence_value(&self) -> Option<f64> {
        self.confidence.parse().ok()
    }
}

/// Scale a unit draw into the confidence interval and render it.
///
/// Truncates rather than rounds so a draw just below 1.0 never renders as
/// "1.0000".
fn format_confidence(unit: f64) -> String {
    let scale = 10f64.powi(fixtures::CONFIDENCE_DIGITS as i32);
    let value = fixtures::CONFIDENCE_FLOOR + fixtures::CONFIDENCE_SPAN * unit;
    let min_ticks = (fixtures::CONFIDENCE_FLOOR * scale) as u64;
    let max_ticks = scale as u64 - 1;
    let ticks = ((value * scale).floor() as u64).clamp(min_ticks, max_ticks);
    format!("{:.*}", fixtures::CONFIDENCE_DIGITS, ticks as f64 / scale)
}

// ---------------------------------------------------------------------------
// BlockchainRecord
// ---------------------------------------------------------------------------

/// Ledger entry for a verified package, returned by `GET /blockchain/:id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockchainRecord {
    pub transaction_hash: String,
    pub block_number: String,
    pub timestamp: String,
    pub owner_address: String,
    pub manufacturer_address: String,
    pub previous_owners: Vec<String>,
}

impl BlockchainRecord {
    /// The single record every lookup returns.
    pub fn canned() -> Self {
        Self {
            transaction_hash: fixtures::TRANSACTION_HASH.to_string(),
            block_number: fixtures::BLOCK_NUMBER.to_string(),
            timestamp: fixtures::TIMESTAMP.to_string(),
            owner_address: fixtures::OWNER_ADDRESS.to_string(),
            manufacturer_address: fixtures::MANUFACTURER_ADDRESS.to_string(),
            previous_owners: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// ReportAck
// ---------------------------------------------------------------------------

/// Acknowledgement returned by `POST /report`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportAck {
    pub success: bool,
}

impl ReportAck {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{FixedRandom, ThreadRandom};

    #[test]
    fn test_from_mode() {
        assert_eq!(VerificationMethod::from_mode(Some("qr")), VerificationMethod::Qr);
        assert_eq!(VerificationMethod::from_mode(Some("ai")), VerificationMethod::Ai);
        assert_eq!(VerificationMethod::from_mode(Some("QR")), VerificationMethod::Ai);
        assert_eq!(VerificationMethod::from_mode(Some(" qr")), VerificationMethod::Ai);
        assert_eq!(VerificationMethod::from_mode(Some("")), VerificationMethod::Ai);
        assert_eq!(VerificationMethod::from_mode(None), VerificationMethod::Ai);
    }

    #[test]
    fn test_method_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&VerificationMethod::Qr).unwrap(), "\"qr\"");
        assert_eq!(serde_json::to_string(&VerificationMethod::Ai).unwrap(), "\"ai\"");
    }

    #[test]
    fn test_generate_with_fixed_draws() {
        let source = FixedRandom::new(vec![0.9, 0.5]);
        let result = VerificationResult::generate(VerificationMethod::Qr, &source);
        assert!(result.is_authentic);
        assert_eq!(result.confidence, "0.7500");
        assert_eq!(result.verification_method, VerificationMethod::Qr);
        assert_eq!(result.transaction_id, "txn_123456789");
        assert_eq!(result.medicine_name, "Paracetamol 500mg");
        assert_eq!(result.manufacturer, "MediPharm Inc.");
        assert_eq!(result.batch_number, "B2023-08-15");
        assert_eq!(result.expiry_date, "2025-08-15");
        assert_eq!(result.production_date, "2023-08-15");
    }

    #[test]
    fn test_authentic_threshold_is_exclusive() {
        let at_threshold = FixedRandom::new(vec![0.3, 0.0]);
        let result = VerificationResult::generate(VerificationMethod::Ai, &at_threshold);
        assert!(!result.is_authentic);

        let above = FixedRandom::new(vec![0.3001, 0.0]);
        let result = VerificationResult::generate(VerificationMethod::Ai, &above);
        assert!(result.is_authentic);
    }

    #[test]
    fn test_confidence_bounds() {
        let low = FixedRandom::new(vec![0.0, 0.0]);
        let result = VerificationResult::generate(VerificationMethod::Ai, &low);
        assert_eq!(result.confidence, "0.5000");

        let high = FixedRandom::new(vec![0.0, 0.999_999_999]);
        let result = VerificationResult::generate(VerificationMethod::Ai, &high);
        assert_eq!(result.confidence, "0.9999");

        // Out-of-range draws from a misbehaving source are clamped.
        let wild = FixedRandom::new(vec![5.0, 5.0]);
        let result = VerificationResult::generate(VerificationMethod::Ai, &wild);
        assert!(result.is_authentic);
        assert_eq!(result.confidence, "0.9999");
    }

    #[test]
    fn test_confidence_always_four_digits_in_range() {
        let source = ThreadRandom;
        for _ in 0..2_000 {
            let result = VerificationResult::generate(VerificationMethod::Ai, &source);
            let (_, frac) = result.confidence.split_once('.').unwrap();
            assert_eq!(frac.len(), 4, "bad format: {}", result.confidence);
            let value = result.confidence_value().unwrap();
            assert!((0.5..1.0).contains(&value), "out of range: {}", value);
        }
    }

    #[test]
    fn test_verification_field_order() {
        let source = FixedRandom::new(vec![0.0, 0.0]);
        let result = VerificationResult::generate(VerificationMethod::Ai, &source);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            "{\"transaction_id\":\"txn_123456789\",\"is_authentic\":false,\
             \"confidence\":\"0.5000\",\"medicine_name\":\"Paracetamol 500mg\",\
             \"manufacturer\":\"MediPharm Inc.\",\"batch_number\":\"B2023-08-15\",\
             \"expiry_date\":\"2025-08-15\",\"production_date\":\"2023-08-15\",\
             \"verification_method\":\"ai\"}"
        );
    }

    #[test]
    fn test_blockchain_record_literal() {
        let json = serde_json::to_string(&BlockchainRecord::canned()).unwrap();
        assert_eq!(
            json,
            "{\"transaction_hash\":\"0xabcd1234efgh5678\",\"block_number\":\"123456\",\
             \"timestamp\":\"2023-08-15T12:34:56Z\",\"owner_address\":\"0x1234abcd5678efgh\",\
             \"manufacturer_address\":\"0xmedipharm123456\",\"previous_owners\":[]}"
        );
    }

    #[test]
    fn test_report_ack() {
        let json = serde_json::to_string(&ReportAck::ok()).unwrap();
        assert_eq!(json, "{\"success\":true}");
    }
}
