//! Pre-order traversal over mdast trees.
//!
//! Transform stages share this single traversal instead of rolling their own
//! recursion, so adding a stage never duplicates tree-walking logic. The
//! walk visits a node, then its (possibly replaced) children in order.

use markdown::mdast::Node;

/// Whether to descend into a node's children after `enter`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitFlow {
    /// Visit the node's children next.
    Descend,
    /// Skip the node's children.
    SkipChildren,
}

/// Visitor invoked for every node of a pre-order walk.
///
/// `enter` receives the node mutably and may replace it wholesale (e.g. swap
/// a blockquote for a directive container); when it returns
/// [`VisitFlow::Descend`], the walk continues into the children of whatever
/// the node is *after* `enter` ran.
pub trait TreeVisitor {
    /// Called before a node's children are visited.
    fn enter(&mut self, node: &mut Node) -> VisitFlow;

    /// Called after a node's children were visited.
    fn leave(&mut self, node: &mut Node) {
        let _ = node;
    }
}

/// Walk a tree in pre-order with stable sibling order.
pub fn walk_mut<V: TreeVisitor>(node: &mut Node, visitor: &mut V) {
    if visitor.enter(node) == VisitFlow::Descend
        && let Some(children) = node.children_mut()
    {
        for child in children.iter_mut() {
            walk_mut(child, visitor);
        }
    }
    visitor.leave(node);
}

/// Human-readable kind discriminator for diagnostics.
pub(crate) fn node_kind(node: &Node) -> &'static str {
    match node {
        Node::Root(_) => "root",
        Node::Paragraph(_) => "paragraph",
        Node::Blockquote(_) => "blockquote",
        Node::Heading(_) => "heading",
        Node::Text(_) => "text",
        Node::Link(_) => "link",
        Node::List(_) => "list",
        Node::ListItem(_) => "list item",
        Node::Code(_) => "code",
        Node::InlineCode(_) => "inline code",
        Node::Image(_) => "image",
        Node::MdxJsxFlowElement(_) => "directive container",
        _ => "other",
    }
}
