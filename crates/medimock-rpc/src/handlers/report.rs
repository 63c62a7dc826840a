// crates/medimock-rpc/src/handlers/report.rs
//
// Report handler: POST /report. The body is neither validated nor stored.

use medimock_core::ReportAck;

/// Handle a Report request with a body of `body_len` bytes.
pub fn handle_report(body_len: usize) -> ReportAck {
    tracing::debug!(body_len, "Discarding report body");
    ReportAck::ok()
}
