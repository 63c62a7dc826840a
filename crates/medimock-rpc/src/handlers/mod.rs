// crates/medimock-rpc/src/handlers/mod.rs
//
// Handler modules for all MediMock routes.
// Each module defines request types and handler functions
// for a single route group.

pub mod blockchain;
pub mod report;
pub mod verify;
