use regex::Regex;
use std::sync::LazyLock;

/// The link syntaxes the scanner understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    /// `[text](url)`
    Markdown,
    /// `<a href="url">text</a>` (straight or curly quotes)
    Html,
    /// `[url=url]text[/url]`
    BbCode,
    /// `https://url[text]`
    AsciiDoc,
    /// `[[target|text]]`
    Creole,
    /// A bare `http(s)://` or `www.` token
    RawUrl,
    /// A bare email-shaped token
    Email,
}

impl SyntaxKind {
    /// Whether matches of this kind replace their span with display text.
    ///
    /// Bare tokens (`RawUrl`, `Email`) are left exactly as found; only the
    /// hyperlink and decoration are attached over the existing span.
    pub fn rewrites_text(self) -> bool {
        !matches!(self, SyntaxKind::RawUrl | SyntaxKind::Email)
    }
}

/// One entry of the pattern catalog.
///
/// Patterns are declarative data: the scanner is generic over the catalog and
/// never branches on `kind`. Capture-group roles are per-entry metadata
/// because group order differs between syntaxes (Markdown puts the URL in
/// group 2, most others in group 1). Group index 0 means "the whole match",
/// used by the bare-token syntaxes.
pub struct Pattern {
    pub kind: SyntaxKind,
    pub matcher: Regex,
    pub url_group: usize,
    pub text_group: usize,
}

static CATALOG: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    let entry = |kind, re: &str, url_group, text_group| Pattern {
        kind,
        matcher: Regex::new(re).expect("pattern regex"),
        url_group,
        text_group,
    };
    vec![
        entry(SyntaxKind::Markdown, r"\[([^\]]+)\]\(([^)]+)\)", 2, 1),
        entry(
            SyntaxKind::Html,
            r#"<a href=["“”]([^"“”]+)["“”]>([^<]+)</a>"#,
            1,
            2,
        ),
        entry(SyntaxKind::BbCode, r"\[url=([^\]]+)\]([^\[]+)\[/url\]", 1, 2),
        entry(
            SyntaxKind::AsciiDoc,
            r"(https?://[^\s\[\]]+)\[([^\]]+)\]",
            1,
            2,
        ),
        // Creole reverses Markdown's order: target first, display text second.
        entry(SyntaxKind::Creole, r"\[\[([^|\]]+)\|([^\]]+)\]\]", 1, 2),
        entry(
            SyntaxKind::RawUrl,
            r"\b(?:https?://|www\.)[^\s<>\[\]{}]+",
            0,
            0,
        ),
        entry(
            SyntaxKind::Email,
            r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}",
            0,
            0,
        ),
    ]
});

/// The fixed, ordered pattern catalog. Adding a syntax means adding one entry.
pub fn catalog() -> &'static [Pattern] {
    &CATALOG
}
