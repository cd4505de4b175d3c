//! End-to-end pipeline tests over trees produced by a real markdown parser.

use docflow_core::{AdmonitionVocabulary, RewriteConfig, STAGE_ADMONITIONS, STAGE_LINKS, process};
use markdown::mdast::{AttributeContent, AttributeValue, MdxJsxFlowElement, Node};

fn parse(source: &str) -> Node {
    markdown::to_mdast(source, &markdown::ParseOptions::default()).expect("markdown should parse")
}

fn tutorial_config() -> RewriteConfig {
    RewriteConfig::new(
        "https://host/x/blob",
        "master",
        "sources/",
        "docs/tutorial",
    )
}

fn collect_links<'a>(node: &'a Node, out: &mut Vec<&'a str>) {
    if let Node::Link(link) = node {
        out.push(&link.url);
    }
    if let Some(children) = node.children() {
        for child in children {
            collect_links(child, out);
        }
    }
}

fn collect_directives<'a>(node: &'a Node, out: &mut Vec<&'a MdxJsxFlowElement>) {
    if let Node::MdxJsxFlowElement(element) = node {
        out.push(element);
    }
    if let Some(children) = node.children() {
        for child in children {
            collect_directives(child, out);
        }
    }
}

fn attribute<'a>(element: &'a MdxJsxFlowElement, name: &str) -> Option<&'a str> {
    element.attributes.iter().find_map(|attr| match attr {
        AttributeContent::Property(prop) if prop.name == name => match &prop.value {
            Some(AttributeValue::Literal(value)) => Some(value.as_str()),
            _ => None,
        },
        _ => None,
    })
}

#[test]
fn end_to_end_tutorial_document() {
    let mut tree = parse(
        "> [!WARNING] Careful\n\
         \n\
         Build [example.c](sources/example.c) before reading on.\n",
    );

    let report = process(&mut tree, &tutorial_config(), &AdmonitionVocabulary::default())
        .expect("pipeline should succeed");
    assert_eq!(report.nodes_changed(STAGE_ADMONITIONS), 1);
    assert_eq!(report.nodes_changed(STAGE_LINKS), 1);

    let mut directives = Vec::new();
    collect_directives(&tree, &mut directives);
    assert_eq!(directives.len(), 1);
    assert_eq!(directives[0].name.as_deref(), Some("Aside"));
    assert_eq!(attribute(directives[0], "type"), Some("WARNING"));
    assert_eq!(attribute(directives[0], "title"), Some("Careful"));

    let mut links = Vec::new();
    collect_links(&tree, &mut links);
    assert_eq!(
        links,
        vec!["https://host/x/blob/master/docs/tutorial/sources/example.c"]
    );
}

#[test]
fn callout_body_links_are_rewritten() {
    let mut tree = parse(
        "> [!NOTE]\n\
         > The full listing lives in [first_program.c](sources/first_program.c).\n",
    );

    process(&mut tree, &tutorial_config(), &AdmonitionVocabulary::default())
        .expect("pipeline should succeed");

    let mut links = Vec::new();
    collect_links(&tree, &mut links);
    assert_eq!(
        links,
        vec!["https://host/x/blob/master/docs/tutorial/sources/first_program.c"]
    );
}

#[test]
fn unrelated_links_and_quotes_pass_through() {
    let mut tree = parse(
        "> [!BOGUS] Not a callout\n\
         \n\
         > Just a quotation.\n\
         \n\
         An [external link](https://example.org/page) and a\n\
         [doc link](../general/introduction.md).\n",
    );

    let report = process(&mut tree, &tutorial_config(), &AdmonitionVocabulary::default())
        .expect("pipeline should succeed");
    assert_eq!(report.nodes_changed(STAGE_ADMONITIONS), 0);
    assert_eq!(report.nodes_changed(STAGE_LINKS), 0);

    let mut directives = Vec::new();
    collect_directives(&tree, &mut directives);
    assert!(directives.is_empty());

    let mut links = Vec::new();
    collect_links(&tree, &mut links);
    assert_eq!(
        links,
        vec!["https://example.org/page", "../general/introduction.md"]
    );
}

#[test]
fn second_pass_is_a_no_op() {
    let mut tree = parse(
        "> [!TIP] Shortcut\n\
         >\n\
         > Skim [example.c](sources/example.c) first.\n",
    );
    let cfg = tutorial_config();
    let vocabulary = AdmonitionVocabulary::default();

    process(&mut tree, &cfg, &vocabulary).expect("first pass should succeed");
    let after_first = tree.clone();

    let report = process(&mut tree, &cfg, &vocabulary).expect("second pass should succeed");
    assert_eq!(report.nodes_changed(STAGE_ADMONITIONS), 0);
    assert_eq!(report.nodes_changed(STAGE_LINKS), 0);
    assert_eq!(tree, after_first);
}

#[test]
fn pinned_revision_flows_into_rewritten_links() {
    let revision = docflow_core::resolve(Some("v1.2.3"));
    let cfg = RewriteConfig::new("https://host/x/blob", revision, "sources/", "docs/tutorial");
    cfg.validate().expect("config should be valid");

    let mut tree = parse("See [example.c](sources/example.c).\n");
    process(&mut tree, &cfg, &AdmonitionVocabulary::default()).expect("pipeline should succeed");

    let mut links = Vec::new();
    collect_links(&tree, &mut links);
    assert_eq!(
        links,
        vec!["https://host/x/blob/v1.2.3/docs/tutorial/sources/example.c"]
    );
}
