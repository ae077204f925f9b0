use crate::patterns::SyntaxKind;
use crate::scan::Match;

/// A match's coordinates translated into the buffer after rewriting.
///
/// Derived by [`splice`]; valid in the final buffer it returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRange {
    pub start: usize,
    pub end: usize,
    pub kind: SyntaxKind,
    pub raw_url: String,
}

/// One concrete replacement, in the coordinates of the buffer as it stands
/// when the replacement is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub kind: SyntaxKind,
}

/// The replacements [`splice`] performs, in application order.
///
/// Matches are normally non-overlapping, but overlap resolution lets
/// equal-length ties and partial overlaps through, and a tie can shift a
/// later edit outside the buffer as it stands. Edit bounds are clamped to
/// the live buffer (and to char boundaries), so overlapping survivors
/// degrade to garbled-but-bounded rewrites rather than invalid ranges.
pub fn edits(buffer: &str, matches: &[Match]) -> Vec<Edit> {
    let mut ordered: Vec<&Match> = matches.iter().collect();
    ordered.sort_by_key(|m| m.start);

    let mut shadow = buffer.to_owned();
    let mut out = Vec::with_capacity(ordered.len());
    let mut offset = 0isize;
    for m in ordered {
        let start = clamp_position(&shadow, m.start as isize + offset);
        let end = clamp_position(&shadow, m.end as isize + offset).max(start);
        shadow.replace_range(start..end, &m.display_text);
        out.push(Edit {
            start,
            end,
            text: m.display_text.clone(),
            kind: m.kind,
        });
        offset += m.display_text.len() as isize - (m.end - m.start) as isize;
    }
    out
}

/// Rewrites `buffer` by replacing each matched span with its display text,
/// and reports where every match landed in the rewritten buffer.
///
/// Edits are applied in ascending start order with a running offset: each
/// match's new start is its original start shifted by the length deltas of
/// the edits before it, so every produced range is valid in the final
/// buffer. Zero matches is a no-op.
pub fn splice(buffer: &str, matches: &[Match]) -> (String, Vec<RewriteRange>) {
    let mut ordered: Vec<&Match> = matches.iter().collect();
    ordered.sort_by_key(|m| m.start);

    let mut text = buffer.to_owned();
    let mut ranges = Vec::with_capacity(ordered.len());
    for (edit, m) in edits(buffer, matches).into_iter().zip(ordered) {
        text.replace_range(edit.start..edit.end, &edit.text);
        ranges.push(RewriteRange {
            start: edit.start,
            end: edit.start + edit.text.len(),
            kind: m.kind,
            raw_url: m.raw_url.clone(),
        });
    }
    (text, ranges)
}

/// Clamps a shifted offset into the buffer, backing up to a char boundary.
fn clamp_position(text: &str, at: isize) -> usize {
    let mut i = at.clamp(0, text.len() as isize) as usize;
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}
