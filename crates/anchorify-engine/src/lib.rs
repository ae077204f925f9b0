pub mod options;
pub mod patterns;
pub mod resolve;
pub mod scan;
pub mod splice;

// Re-export key types for easier usage
pub use options::ScanOptions;
pub use patterns::{Pattern, SyntaxKind};
pub use resolve::{LinkTarget, NodeLookup, resolve_target};
pub use scan::{Match, overlap::resolve_overlaps, scan};
pub use splice::{Edit, RewriteRange, edits, splice};
