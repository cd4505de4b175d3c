#![deny(missing_docs)]
//! docflow core: build-time document tree transforms for docs sites.
//!
//! The surrounding site builder parses each markdown source into an mdast
//! tree, runs [`process`] over it, and hands the result to its renderer.
//! Two stages run in a fixed order: callout blockquotes are normalized into
//! directive containers, then relative source links are rewritten into
//! fully-qualified, revision-pinned URLs on the external source host.

/// Callout/admonition normalization.
pub mod admonitions;
/// Rewrite configuration supplied by the build tool.
pub mod config;
/// Core error and source-location types.
pub mod error;
/// Source link rewriting.
pub mod links;
/// Transform pipeline composition.
pub mod pipeline;
/// Revision identifier resolution.
pub mod revision;
/// Pre-order tree traversal utilities.
pub mod visit;

pub use admonitions::{
    AdmonitionVocabulary, CalloutOpening, DIRECTIVE_NAME, normalize_admonitions,
    parse_callout_marker,
};
pub use config::RewriteConfig;
pub use error::{DocflowError, SourceLocation};
pub use links::rewrite_links;
pub use pipeline::{
    PipelineReport, STAGE_ADMONITIONS, STAGE_LINKS, StageReport, TransformPipeline, TreeTransform,
    process,
};
pub use revision::{DEFAULT_BRANCH, resolve, resolve_from_env};
pub use visit::{TreeVisitor, VisitFlow, walk_mut};
