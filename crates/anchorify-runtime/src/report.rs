use serde::{Deserialize, Serialize};

/// What happened during one run, accumulated across all nodes in scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Text nodes in scope, whether or not they held links.
    pub nodes_in_scope: usize,
    /// Hyperlinks actually attached.
    pub links_fixed: usize,
    /// Arrow-prefixed node names no node in scope carries.
    pub unresolved: Vec<String>,
    /// Nodes whose processing failed and was skipped.
    pub failures: Vec<NodeFailure>,
}

/// A per-node failure, recorded instead of aborting the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeFailure {
    pub node: String,
    pub error: String,
}

impl RunReport {
    /// The single end-of-run line shown to the user. Unresolved names stay
    /// in the diagnostic log; only their count surfaces here.
    pub fn summary(&self) -> String {
        let mut line = format!(
            "Anchorified {} links in {} text nodes.",
            self.links_fixed, self.nodes_in_scope
        );
        if !self.unresolved.is_empty() {
            line.push_str(&format!(
                " Warning: {} node reference(s) could not be resolved.",
                self.unresolved.len()
            ));
        }
        line
    }
}
