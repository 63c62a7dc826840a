// crates/medimock-core/src/fixtures.rs
//
// Canned values baked into every mock response. Clients develop against
// these, so they must stay byte-for-byte stable.

// ---------------------------------------------------------------------------
// VerificationResult constants
// ---------------------------------------------------------------------------

pub const TRANSACTION_ID: &str = "txn_123456789";
pub const MEDICINE_NAME: &str = "Paracetamol 500mg";
pub const MANUFACTURER: &str = "MediPharm Inc.";
pub const BATCH_NUMBER: &str = "B2023-08-15";
pub const EXPIRY_DATE: &str = "2025-08-15";
pub const PRODUCTION_DATE: &str = "2023-08-15";

/// Draws above this threshold mark a verification as authentic (70% odds).
pub const AUTHENTIC_THRESHOLD: f64 = 0.3;

/// Lower bound of the reported confidence interval [0.5, 1.0).
pub const CONFIDENCE_FLOOR: f64 = 0.5;

/// Width of the reported confidence interval.
pub const CONFIDENCE_SPAN: f64 = 0.5;

/// Fractional digits in the formatted confidence string.
pub const CONFIDENCE_DIGITS: usize = 4;

// ---------------------------------------------------------------------------
// BlockchainRecord constants
// ---------------------------------------------------------------------------

pub const TRANSACTION_HASH: &str = "0xabcd1234efgh5678";
pub const BLOCK_NUMBER: &str = "123456";
pub const TIMESTAMP: &str = "2023-08-15T12:34:56Z";
pub const OWNER_ADDRESS: &str = "0x1234abcd5678efgh";
pub const MANUFACTURER_ADDRESS: &str = "0xmedipharm123456";

// ---------------------------------------------------------------------------
// Server defaults
// ---------------------------------------------------------------------------

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3001;

/// Default bind host (all interfaces).
pub const DEFAULT_HOST: &str = "0.0.0.0";
