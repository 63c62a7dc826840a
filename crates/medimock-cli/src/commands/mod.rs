// crates/medimock-cli/src/commands/mod.rs
//
// Command module declarations for the MediMock CLI.

pub mod blockchain;
pub mod report;
pub mod verify;
