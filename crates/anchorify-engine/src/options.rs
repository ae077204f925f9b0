/// Tuning knobs for the scanner.
///
/// Threaded explicitly through the pipeline; there is no global
/// configuration state.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Characters stripped from the tail of a bare-URL match.
    ///
    /// A raw `www.example.com.` at the end of a sentence should link
    /// `www.example.com`, not the full stop. Punctuation conventions vary by
    /// domain, so the set is data rather than logic.
    pub trailing_punctuation: Vec<char>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            trailing_punctuation: vec!['.', ',', ';', ')'],
        }
    }
}
