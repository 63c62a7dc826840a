// crates/medimock-core/src/lib.rs
//
// medimock-core: Response records, canned fixtures, and the random source
// for the MediMock API.
//
// This is the leaf crate that the server, daemon, and CLI depend on.
// It defines the wire records returned by each route, the constant values
// baked into them, and the injectable randomness behind /verify.

pub mod error;
pub mod fixtures;
pub mod random;
pub mod records;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use medimock_core::VerificationResult;`

// Records
pub use records::{BlockchainRecord, ReportAck, VerificationMethod, VerificationResult};

// Randomness
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};

// Error type
pub use error::MockError;
