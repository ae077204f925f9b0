//! End-to-end runs of the engine pipeline: scan, resolve overlaps, splice,
//! classify targets.

use anchorify_engine::{
    LinkTarget, NodeLookup, ScanOptions, SyntaxKind, resolve_overlaps, resolve_target, scan, splice,
};
use pretty_assertions::assert_eq;

struct NoNodes;

impl NodeLookup for NoNodes {
    fn node_id_by_name(&self, _name: &str) -> Option<String> {
        None
    }
}

#[test]
fn markdown_link_becomes_display_text_with_url() {
    let buffer = "See [docs](https://x.io/d) for more";
    let matches = resolve_overlaps(scan(buffer, &ScanOptions::default()));
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].kind, SyntaxKind::Markdown);

    let (text, ranges) = splice(buffer, &matches);
    assert_eq!(text, "See docs for more");
    assert_eq!(&text[ranges[0].start..ranges[0].end], "docs");

    let target = resolve_target(ranges[0].kind, &ranges[0].raw_url, &NoNodes);
    assert_eq!(target, LinkTarget::Url("https://x.io/d".into()));
}

#[test]
fn raw_url_keeps_its_text_and_gains_a_scheme() {
    let buffer = "Visit www.example.com now";
    let matches = resolve_overlaps(scan(buffer, &ScanOptions::default()));
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].kind, SyntaxKind::RawUrl);

    let (text, ranges) = splice(buffer, &matches);
    assert_eq!(text, buffer);
    assert_eq!(&text[ranges[0].start..ranges[0].end], "www.example.com");

    let target = resolve_target(ranges[0].kind, &ranges[0].raw_url, &NoNodes);
    assert_eq!(target, LinkTarget::Url("https://www.example.com".into()));
}

#[test]
fn richer_syntax_dominates_the_url_inside_it() {
    let buffer = r#"go <a href="https://x.io">the site</a>!"#;
    let matches = resolve_overlaps(scan(buffer, &ScanOptions::default()));
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].kind, SyntaxKind::Html);

    let (text, _) = splice(buffer, &matches);
    assert_eq!(text, "go the site!");
}

#[test]
fn mixed_syntaxes_rewrite_left_to_right() {
    let buffer = "a [one](https://x.io/1) b [[https://x.io/2|two]] c www.x.io d";
    let matches = resolve_overlaps(scan(buffer, &ScanOptions::default()));
    let kinds: Vec<SyntaxKind> = matches.iter().map(|m| m.kind).collect();
    assert_eq!(
        kinds,
        vec![SyntaxKind::Markdown, SyntaxKind::Creole, SyntaxKind::RawUrl]
    );

    let (text, ranges) = splice(buffer, &matches);
    assert_eq!(text, "a one b two c www.x.io d");
    assert_eq!(&text[ranges[0].start..ranges[0].end], "one");
    assert_eq!(&text[ranges[1].start..ranges[1].end], "two");
    assert_eq!(&text[ranges[2].start..ranges[2].end], "www.x.io");
}

#[test]
fn manual_left_to_right_surgery_matches_engine_output() {
    let buffer = "x [a](https://x.io/a) y me@example.com z https://x.io/raw.";
    let matches = resolve_overlaps(scan(buffer, &ScanOptions::default()));

    let mut expected = buffer.to_owned();
    let mut offset = 0isize;
    for m in &matches {
        let start = (m.start as isize + offset) as usize;
        let end = (m.end as isize + offset) as usize;
        expected = format!("{}{}{}", &expected[..start], m.display_text, &expected[end..]);
        offset += m.display_text.len() as isize - (m.end - m.start) as isize;
    }

    let (text, _) = splice(buffer, &matches);
    assert_eq!(text, expected);
}

#[test]
fn arrow_target_without_a_node_is_unresolved() {
    let buffer = "[jump](->Frame 2)";
    let matches = resolve_overlaps(scan(buffer, &ScanOptions::default()));
    assert_eq!(matches.len(), 1);

    let target = resolve_target(matches[0].kind, &matches[0].raw_url, &NoNodes);
    assert_eq!(target, LinkTarget::Unresolved("Frame 2".into()));
}

#[test]
fn partially_overlapping_survivors_rewrite_within_bounds() {
    // BbCode and a Markdown-shaped tail overlap without containment, so
    // both survive the resolver; the double-applied rewrite garbles the
    // text but every produced range stays inside the final buffer.
    let buffer = "[url=x]a[/url](y)";
    let matches = resolve_overlaps(scan(buffer, &ScanOptions::default()));
    let kinds: Vec<SyntaxKind> = matches.iter().map(|m| m.kind).collect();
    assert_eq!(kinds, vec![SyntaxKind::BbCode, SyntaxKind::Markdown]);

    let (text, ranges) = splice(buffer, &matches);
    assert_eq!(text, "/url");
    for r in &ranges {
        assert!(r.start <= r.end && r.end <= text.len());
        assert!(text.is_char_boundary(r.start) && text.is_char_boundary(r.end));
    }
}

#[test]
fn buffer_without_links_passes_through() {
    let buffer = "nothing to do here";
    let matches = resolve_overlaps(scan(buffer, &ScanOptions::default()));
    let (text, ranges) = splice(buffer, &matches);
    assert_eq!(text, buffer);
    assert!(ranges.is_empty());
}
