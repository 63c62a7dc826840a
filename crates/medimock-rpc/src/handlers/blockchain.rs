// crates/medimock-rpc/src/handlers/blockchain.rs
//
// Ledger lookup handler: GET /blockchain/:id.

use medimock_core::BlockchainRecord;

/// Route prefix the record id follows.
pub const ROUTE_PREFIX: &str = "/blockchain/";

/// Request for a ledger record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRecordRequest {
    /// Id segment exactly as it appeared in the path (still percent-encoded).
    pub id: String,
}

impl GetRecordRequest {
    /// Take the id from a request path. Any path, even one without the
    /// prefix, yields a request; the id never affects the response.
    pub fn from_path(path: &str) -> Self {
        Self {
            id: path.strip_prefix(ROUTE_PREFIX).unwrap_or_default().to_string(),
        }
    }
}

/// Handle a GetRecord request.
///
/// Every id, well-formed or not, maps to the same canned record.
pub fn handle_get_record(request: &GetRecordRequest) -> BlockchainRecord {
    tracing::debug!(id = %request.id, "Serving canned blockchain record");
    BlockchainRecord::canned()
}
