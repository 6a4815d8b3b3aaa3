//! Import orchestration: the session state machine that sequences
//! upload, mapping, preview, and submission.

pub mod session;

pub use session::{EntryTab, ImportSession, ImportStep, SessionContext, SubmissionSummary};
