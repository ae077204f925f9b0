pub mod host;
pub mod report;
pub mod run;

// Re-export key types for easier usage
pub use host::{DocumentModel, HostError, Hyperlink, Typeface};
pub use report::{NodeFailure, RunReport};
pub use run::{RELAUNCH_DESCRIPTION, run};
