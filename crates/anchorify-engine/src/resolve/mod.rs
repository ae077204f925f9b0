use crate::patterns::SyntaxKind;

/// Where a match should navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// An external URL, normalized to carry a scheme.
    Url(String),
    /// Another node in the same document, by id.
    Node(String),
    /// An arrow-prefixed node name that no node in scope carries.
    Unresolved(String),
}

/// Name-to-id lookup provided by the host document model.
pub trait NodeLookup {
    fn node_id_by_name(&self, name: &str) -> Option<String>;
}

const ARROW_ASCII: &str = "->";
const ARROW_GLYPH: char = '→';

/// Extracts the node name from an arrow-prefixed "magic link" target.
///
/// Accepts `->Name` and `→Name`, with whitespace tolerated on either side
/// of the arrow. Returns `None` for anything else.
pub fn node_reference_name(raw_url: &str) -> Option<&str> {
    let trimmed = raw_url.trim();
    let rest = trimmed
        .strip_prefix(ARROW_ASCII)
        .or_else(|| trimmed.strip_prefix(ARROW_GLYPH))?;
    Some(rest.trim())
}

/// Classifies a match's raw URL text into a navigable target.
///
/// Arrow-prefixed targets resolve through the host's name lookup; a miss is
/// reported as [`LinkTarget::Unresolved`], never an error. Everything else
/// becomes an external URL: emails gain a `mailto:` scheme, the rest gain
/// `https://`. Both prefixes are idempotent.
pub fn resolve_target(kind: SyntaxKind, raw_url: &str, lookup: &dyn NodeLookup) -> LinkTarget {
    if let Some(name) = node_reference_name(raw_url) {
        return match lookup.node_id_by_name(name) {
            Some(id) => LinkTarget::Node(id),
            None => LinkTarget::Unresolved(name.to_owned()),
        };
    }
    let url = raw_url.trim();
    match kind {
        SyntaxKind::Email => LinkTarget::Url(with_mailto(url)),
        _ => LinkTarget::Url(with_https(url)),
    }
}

fn with_mailto(url: &str) -> String {
    if starts_with_ignore_case(url, "mailto:") {
        url.to_owned()
    } else {
        format!("mailto:{url}")
    }
}

fn with_https(url: &str) -> String {
    if starts_with_ignore_case(url, "http://") || starts_with_ignore_case(url, "https://") {
        url.to_owned()
    } else {
        format!("https://{url}")
    }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashMap;

    struct Nodes(HashMap<&'static str, &'static str>);

    impl NodeLookup for Nodes {
        fn node_id_by_name(&self, name: &str) -> Option<String> {
            self.0.get(name).map(|id| id.to_string())
        }
    }

    fn no_nodes() -> Nodes {
        Nodes(HashMap::new())
    }

    #[test]
    fn bare_domain_gains_https() {
        let target = resolve_target(SyntaxKind::Markdown, "example.com", &no_nodes());
        assert_eq!(target, LinkTarget::Url("https://example.com".into()));
    }

    #[rstest]
    #[case("https://example.com")]
    #[case("HTTPS://example.com")]
    #[case("http://example.com")]
    fn scheme_prefixing_is_idempotent(#[case] raw: &str) {
        let target = resolve_target(SyntaxKind::RawUrl, raw, &no_nodes());
        assert_eq!(target, LinkTarget::Url(raw.into()));
    }

    #[test]
    fn email_gains_mailto() {
        let target = resolve_target(SyntaxKind::Email, "me@example.com", &no_nodes());
        assert_eq!(target, LinkTarget::Url("mailto:me@example.com".into()));
    }

    #[test]
    fn mailto_is_not_doubled() {
        let target = resolve_target(SyntaxKind::Email, "mailto:me@example.com", &no_nodes());
        assert_eq!(target, LinkTarget::Url("mailto:me@example.com".into()));
    }

    #[test]
    fn arrow_forms_share_one_lookup_name() {
        assert_eq!(node_reference_name("-> Target Frame"), Some("Target Frame"));
        assert_eq!(node_reference_name("→Target Frame"), Some("Target Frame"));
        assert_eq!(node_reference_name("  ->  Target Frame  "), Some("Target Frame"));
    }

    #[test]
    fn plain_url_is_not_a_node_reference() {
        assert_eq!(node_reference_name("https://example.com"), None);
    }

    #[test]
    fn known_node_resolves_to_its_id() {
        let nodes = Nodes(HashMap::from([("Target Frame", "17:3")]));
        let target = resolve_target(SyntaxKind::Markdown, "->Target Frame", &nodes);
        assert_eq!(target, LinkTarget::Node("17:3".into()));
    }

    #[test]
    fn unknown_node_is_reported_not_thrown() {
        let target = resolve_target(SyntaxKind::Markdown, "->Frame 2", &no_nodes());
        assert_eq!(target, LinkTarget::Unresolved("Frame 2".into()));
    }
}
