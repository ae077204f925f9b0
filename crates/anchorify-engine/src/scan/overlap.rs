use super::Match;

/// Drops every match strictly dominated by a longer one.
///
/// A match is dominated iff another match fully contains its span and is
/// strictly longer. Richer syntaxes always out-span the bare tokens nested
/// inside them, so the dominance rule needs no syntax-priority table.
///
/// Equal-length overlapping matches are NOT filtered: both survive and are
/// left to downstream ordering. That is the documented behavior, not a gap
/// to fix here.
///
/// Survivors come back sorted by start offset.
pub fn resolve_overlaps(matches: Vec<Match>) -> Vec<Match> {
    let spans: Vec<(usize, usize)> = matches.iter().map(|m| (m.start, m.end)).collect();
    let mut kept: Vec<Match> = matches
        .into_iter()
        .enumerate()
        .filter(|(i, m)| {
            !spans.iter().enumerate().any(|(j, &(start, end))| {
                j != *i && start <= m.start && end >= m.end && end - start > m.end - m.start
            })
        })
        .map(|(_, m)| m)
        .collect();
    kept.sort_by_key(|m| (m.start, m.end));
    kept
}
