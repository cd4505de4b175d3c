//! Callout/admonition normalization.
//!
//! Authors write callouts as blockquotes whose first line carries a bracketed
//! tag, e.g. `> [!NOTE] Heads up`. This stage re-expresses recognized callouts
//! as a canonical directive container (`<Aside type="NOTE" title="Heads up">`
//! in mdast terms) so the downstream renderer presents them uniformly no
//! matter which source convention was used. Tags outside the vocabulary stay
//! ordinary blockquotes.

use markdown::mdast::{
    AttributeContent, AttributeValue, Blockquote, MdxJsxAttribute, MdxJsxFlowElement, Node,
};

use crate::visit::{TreeVisitor, VisitFlow, walk_mut};

/// Element name of the directive container produced for recognized callouts.
pub const DIRECTIVE_NAME: &str = "Aside";

/// Explicit, enumerated set of callout tags eligible for normalization.
///
/// The accepted set is a value rather than an assumption baked into string
/// matching; whoever owns the renderer decides what it can display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmonitionVocabulary {
    tags: Vec<String>,
}

impl AdmonitionVocabulary {
    /// Build a vocabulary from tag names (stored upper-cased, matched
    /// case-insensitively).
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags
                .into_iter()
                .map(|tag| tag.into().to_ascii_uppercase())
                .collect(),
        }
    }

    /// Canonical (upper-cased) form of a raw tag, if it is in the vocabulary.
    pub fn canonicalize(&self, raw: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.eq_ignore_ascii_case(raw))
            .map(String::as_str)
    }

    /// The canonical tag names.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Default for AdmonitionVocabulary {
    fn default() -> Self {
        Self::new(["NOTE", "TIP", "INFO", "CAUTION", "WARNING", "DANGER"])
    }
}

/// Parsed `[!TAG]` marker from the first line of a blockquote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalloutOpening {
    /// Tag as authored, case preserved.
    pub tag: String,
    /// Remainder of the marker line, used as the directive title.
    pub title: Option<String>,
}

/// Parse a callout marker anchored at the start of a line.
///
/// Returns `None` when the line does not start with `[!TAG]` for an
/// alphabetic tag. The remainder of the line becomes the title.
pub fn parse_callout_marker(first_line: &str) -> Option<CalloutOpening> {
    let rest = first_line.strip_prefix("[!")?;
    let tag_len = rest.chars().take_while(|c| c.is_ascii_alphabetic()).count();
    if tag_len == 0 {
        return None;
    }
    let (tag, rest) = rest.split_at(tag_len);
    let rest = rest.strip_prefix(']')?;
    let title = rest.trim();
    Some(CalloutOpening {
        tag: tag.to_string(),
        title: (!title.is_empty()).then(|| title.to_string()),
    })
}

/// Normalize recognized callout blockquotes into directive containers.
///
/// Pre-order walk; matched blockquotes are replaced in their parent's
/// children sequence, sibling order preserved, and the replacement owns a
/// fresh body (no aliasing with the consumed blockquote). Returns the number
/// of callouts normalized.
pub fn normalize_admonitions(root: &mut Node, vocabulary: &AdmonitionVocabulary) -> usize {
    let mut normalizer = AdmonitionNormalizer {
        vocabulary,
        count: 0,
    };
    walk_mut(root, &mut normalizer);
    normalizer.count
}

struct AdmonitionNormalizer<'a> {
    vocabulary: &'a AdmonitionVocabulary,
    count: usize,
}

impl TreeVisitor for AdmonitionNormalizer<'_> {
    fn enter(&mut self, node: &mut Node) -> VisitFlow {
        let Node::Blockquote(quote) = node else {
            return VisitFlow::Descend;
        };
        let Some(opening) = leading_marker(quote) else {
            return VisitFlow::Descend;
        };
        let Some(tag) = self.vocabulary.canonicalize(&opening.tag) else {
            log::warn!(
                "Unrecognized callout tag [!{}], leaving blockquote as-is",
                opening.tag
            );
            return VisitFlow::Descend;
        };
        let tag = tag.to_string();

        let position = quote.position.take();
        let mut body = std::mem::take(&mut quote.children);
        strip_marker_line(&mut body);

        let mut attributes = vec![literal_attribute("type", tag)];
        if let Some(title) = opening.title {
            attributes.push(literal_attribute("title", title));
        }

        *node = Node::MdxJsxFlowElement(MdxJsxFlowElement {
            name: Some(DIRECTIVE_NAME.to_string()),
            attributes,
            children: body,
            position,
        });
        self.count += 1;

        // Descend into the fresh body so nested callouts normalize too.
        VisitFlow::Descend
    }
}

/// Marker lookup: first child must be a paragraph whose first child is a
/// text leaf starting with `[!TAG]` on its first line.
fn leading_marker(quote: &Blockquote) -> Option<CalloutOpening> {
    let Some(Node::Paragraph(paragraph)) = quote.children.first() else {
        return None;
    };
    let Some(Node::Text(text)) = paragraph.children.first() else {
        return None;
    };
    let first_line = text.value.lines().next().unwrap_or("");
    parse_callout_marker(first_line)
}

/// Remove the matched marker line from the body, dropping the leading text
/// node (and paragraph) when nothing of it remains.
fn strip_marker_line(body: &mut Vec<Node>) {
    let Some(Node::Paragraph(paragraph)) = body.first_mut() else {
        return;
    };
    let Some(Node::Text(text)) = paragraph.children.first_mut() else {
        return;
    };
    match text.value.find('\n') {
        Some(newline) => {
            text.value.drain(..=newline);
        }
        None => {
            paragraph.children.remove(0);
        }
    }
    if paragraph.children.is_empty() {
        body.remove(0);
    }
}

fn literal_attribute(name: &str, value: String) -> AttributeContent {
    AttributeContent::Property(MdxJsxAttribute {
        name: name.to_string(),
        value: Some(AttributeValue::Literal(value)),
    })
}
