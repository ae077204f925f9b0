use std::collections::HashSet;

use anchorify_engine::{
    LinkTarget, NodeLookup, ScanOptions, edits, resolve_overlaps, resolve_target, scan, splice,
};

use crate::host::{DocumentModel, HostError, Hyperlink, Typeface};
use crate::report::{NodeFailure, RunReport};

/// Relaunch entry attached to the page after a run.
pub const RELAUNCH_DESCRIPTION: &str = "Click to re-anchorify the links on this page";

struct ModelLookup<'a, D: DocumentModel>(&'a D);

impl<D: DocumentModel> NodeLookup for ModelLookup<'_, D> {
    fn node_id_by_name(&self, name: &str) -> Option<String> {
        self.0.node_id_by_name(name)
    }
}

/// Runs the whole pipeline over every text node in scope.
///
/// Two phases: gather every node's text and the de-duplicated typeface set
/// (pure reads), then load all typefaces in one batched call, then mutate.
/// A failure on one node is logged and recorded and the rest of the batch
/// still runs. Only a typeface-load failure, which happens before any
/// mutation, fails the run as a whole.
pub fn run<D: DocumentModel>(doc: &mut D, options: &ScanOptions) -> Result<RunReport, HostError> {
    let nodes = doc.text_nodes();
    let mut report = RunReport {
        nodes_in_scope: nodes.len(),
        ..RunReport::default()
    };
    if nodes.is_empty() {
        log::debug!("no text nodes in scope");
        return Ok(report);
    }

    let mut texts: Vec<Option<String>> = Vec::with_capacity(nodes.len());
    let mut typefaces: Vec<Typeface> = Vec::new();
    let mut seen = HashSet::new();
    for node in &nodes {
        let gathered = doc
            .node_text(node)
            .and_then(|text| doc.node_typefaces(node).map(|faces| (text, faces)));
        match gathered {
            Ok((text, faces)) => {
                for face in faces {
                    if seen.insert(face.clone()) {
                        typefaces.push(face);
                    }
                }
                texts.push(Some(text));
            }
            Err(err) => {
                log::error!("skipping node {node}: {err}");
                report.failures.push(NodeFailure {
                    node: node.clone(),
                    error: err.to_string(),
                });
                texts.push(None);
            }
        }
    }

    // One suspension point: every required typeface, loaded once for the
    // whole batch. Nothing has been mutated yet.
    doc.load_typefaces(&typefaces)?;

    for (node, text) in nodes.iter().zip(&texts) {
        let Some(text) = text else { continue };
        if let Err(err) = process_node(doc, node, text, options, &mut report) {
            log::error!("skipping node {node}: {err}");
            report.failures.push(NodeFailure {
                node: node.clone(),
                error: err.to_string(),
            });
        }
    }

    doc.set_relaunch_description(RELAUNCH_DESCRIPTION);
    log::debug!("{}", report.summary());
    Ok(report)
}

fn process_node<D: DocumentModel>(
    doc: &mut D,
    node: &str,
    text: &str,
    options: &ScanOptions,
    report: &mut RunReport,
) -> Result<(), HostError> {
    let matches = resolve_overlaps(scan(text, options));
    if matches.is_empty() {
        return Ok(());
    }

    // Classify every target before the first edit, so name lookups see the
    // document as it was scanned.
    let targets: Vec<LinkTarget> = {
        let lookup = ModelLookup(&*doc);
        matches
            .iter()
            .map(|m| resolve_target(m.kind, &m.raw_url, &lookup))
            .collect()
    };

    let (_, ranges) = splice(text, &matches);

    // Text edits, left to right, with the engine's clamped coordinates so
    // overlapping survivors cannot push a host edit out of bounds. Bare
    // tokens are left exactly as found.
    for edit in edits(text, &matches) {
        if edit.kind.rewrites_text() {
            doc.replace_text(node, edit.start, edit.end, &edit.text)?;
        }
    }

    for (range, target) in ranges.iter().zip(targets) {
        let link = match target {
            LinkTarget::Url(url) => Hyperlink::Url(url),
            LinkTarget::Node(id) => Hyperlink::Node(id),
            LinkTarget::Unresolved(name) => {
                log::warn!("no node named {name:?} in scope (referenced from {node})");
                report.unresolved.push(name);
                continue;
            }
        };
        doc.set_hyperlink(node, range.start, range.end, &link)?;
        doc.set_underline(node, range.start, range.end)?;
        report.links_fixed += 1;
    }

    Ok(())
}
