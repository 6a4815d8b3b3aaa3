//! Library surface of the roster-import CLI.
//!
//! Only the logging setup lives here so integration tests can drive it;
//! command wiring stays in the binary.

pub mod logging;
