use crate::options::ScanOptions;
use crate::patterns::{self, Pattern, SyntaxKind};

pub mod overlap;

/// A detected link-syntax occurrence, in original-buffer byte coordinates.
///
/// `start < end` and `end <= buffer.len()` always hold. `display_text` is
/// what the span should read after rewriting; `raw_url` is the link text as
/// written, before any scheme normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    pub display_text: String,
    pub raw_url: String,
    pub kind: SyntaxKind,
}

/// Runs every catalog pattern over the full buffer and collects all matches.
///
/// Each pattern scans independently with its own cursor from position zero,
/// so one pattern's progress never hides occurrences from another. Matches
/// from different patterns commonly overlap (a bare URL nested inside an
/// HTML anchor, say); overlap resolution happens downstream. No output
/// ordering is guaranteed.
pub fn scan(buffer: &str, options: &ScanOptions) -> Vec<Match> {
    let mut matches = Vec::new();
    for pattern in patterns::catalog() {
        for caps in pattern.matcher.captures_iter(buffer) {
            if let Some(m) = match_from_captures(pattern, &caps, options) {
                matches.push(m);
            }
        }
    }
    matches
}

fn match_from_captures(
    pattern: &Pattern,
    caps: &regex::Captures<'_>,
    options: &ScanOptions,
) -> Option<Match> {
    let whole = caps.get(0)?;

    if pattern.kind == SyntaxKind::RawUrl {
        // Sentence punctuation glued to the tail of a bare URL is not part
        // of it; trimming shortens the span so the text is left untouched.
        let token = whole
            .as_str()
            .trim_end_matches(|c| options.trailing_punctuation.contains(&c));
        if token.is_empty() {
            return None;
        }
        return Some(Match {
            start: whole.start(),
            end: whole.start() + token.len(),
            display_text: token.to_owned(),
            raw_url: token.to_owned(),
            kind: pattern.kind,
        });
    }

    let url = caps.get(pattern.url_group)?.as_str();
    let text = caps.get(pattern.text_group)?.as_str();
    Some(Match {
        start: whole.start(),
        end: whole.end(),
        display_text: text.to_owned(),
        raw_url: url.to_owned(),
        kind: pattern.kind,
    })
}
