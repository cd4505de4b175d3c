//! Source link rewriting.
//!
//! Relative link targets that start with the configured match prefix are the
//! authoring convention for "this points at a raw source file shipped next to
//! the docs". They are rewritten into fully-qualified URLs on the external
//! source host, pinned to the resolved revision, so readers always land on
//! the snapshot the documents were written against.

use markdown::mdast::Node;

use crate::config::RewriteConfig;
use crate::visit::{TreeVisitor, VisitFlow, walk_mut};

/// Rewrite eligible link targets in place, returning the rewrite count.
///
/// Pre-order walk; only the `url` attribute of link nodes is touched, link
/// text is never inspected, every other node kind passes through untouched.
/// A link with an empty target is treated as a non-match rather than a
/// failure, so one malformed node never aborts the document.
pub fn rewrite_links(root: &mut Node, cfg: &RewriteConfig) -> usize {
    let mut rewriter = LinkRewriter { cfg, count: 0 };
    walk_mut(root, &mut rewriter);
    rewriter.count
}

struct LinkRewriter<'a> {
    cfg: &'a RewriteConfig,
    count: usize,
}

impl TreeVisitor for LinkRewriter<'_> {
    fn enter(&mut self, node: &mut Node) -> VisitFlow {
        if let Node::Link(link) = node
            && self.cfg.matches_target(&link.url)
        {
            let rewritten = self.cfg.rewritten_target(&link.url);
            log::debug!("Rewriting source link '{}' -> '{}'", link.url, rewritten);
            link.url = rewritten;
            self.count += 1;
        }
        VisitFlow::Descend
    }
}
