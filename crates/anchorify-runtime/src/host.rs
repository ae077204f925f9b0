use serde::{Deserialize, Serialize};

/// A typeface descriptor for a styled run, the unit design tools key font
/// loading on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Typeface {
    pub family: String,
    pub style: String,
}

/// A hyperlink the host can attach to a text range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hyperlink {
    Url(String),
    Node(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("node not found: {0}")]
    NodeNotFound(String),
    #[error("typeface load failed: {} {}", .0.family, .0.style)]
    TypefaceLoad(Typeface),
    #[error("host rejected operation: {0}")]
    Rejected(String),
}

/// The host document model, as the design tool exposes it.
///
/// All ranges are `[start, end)` byte offsets into the UTF-8 text returned
/// by [`node_text`](DocumentModel::node_text). Hosts that index text in
/// UTF-16 code units must convert at this boundary.
pub trait DocumentModel {
    /// Text-bearing nodes in scope, in a stable order: the explicit
    /// selection if non-empty, otherwise the whole page.
    fn text_nodes(&self) -> Vec<String>;

    /// Full text content of a node.
    fn node_text(&self, node: &str) -> Result<String, HostError>;

    /// Typeface descriptors for every styled run of a node.
    fn node_typefaces(&self, node: &str) -> Result<Vec<Typeface>, HostError>;

    /// Makes the given typefaces ready for use. Called once per run with the
    /// de-duplicated set for every node in scope, before any mutation.
    fn load_typefaces(&mut self, typefaces: &[Typeface]) -> Result<(), HostError>;

    /// Replaces the text range `[start, end)` of a node with `text`.
    fn replace_text(
        &mut self,
        node: &str,
        start: usize,
        end: usize,
        text: &str,
    ) -> Result<(), HostError>;

    /// Attaches a hyperlink to a text range.
    fn set_hyperlink(
        &mut self,
        node: &str,
        start: usize,
        end: usize,
        link: &Hyperlink,
    ) -> Result<(), HostError>;

    /// Attaches an underline decoration to a text range.
    fn set_underline(&mut self, node: &str, start: usize, end: usize) -> Result<(), HostError>;

    /// Looks up a node by exact name within the current scope.
    fn node_id_by_name(&self, name: &str) -> Option<String>;

    /// Attaches a relaunch description to the page so the user can re-run
    /// the plugin from the host UI.
    fn set_relaunch_description(&mut self, description: &str);
}
