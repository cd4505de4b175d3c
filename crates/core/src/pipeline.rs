//! Transform pipeline composition.
//!
//! One pipeline value is built per site build and applied once per document.
//! The canonical order normalizes admonitions before rewriting links: callout
//! bodies may themselves contain source links, and those must still be
//! visible to the rewrite stage.

use markdown::mdast::Node;

use crate::admonitions::{AdmonitionVocabulary, normalize_admonitions};
use crate::config::RewriteConfig;
use crate::error::{DocflowError, SourceLocation};
use crate::links::rewrite_links;
use crate::visit::node_kind;

/// A single transform stage over a document tree.
///
/// Stages are `Send + Sync` values so a build tool may share one pipeline
/// across worker threads, one document per invocation.
pub trait TreeTransform: Send + Sync {
    /// Stage name used in reports and logs.
    fn name(&self) -> &'static str;

    /// Apply the stage in place, returning the number of nodes changed.
    fn apply(&self, root: &mut Node) -> usize;
}

/// Outcome of one stage over one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageReport {
    /// Name of the stage that ran.
    pub stage: &'static str,
    /// Number of nodes the stage changed.
    pub nodes_changed: usize,
}

/// Per-document summary handed back to the build tool, which owns the policy
/// of treating suspicious counts as warnings or build breakers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// One entry per stage, in execution order.
    pub stages: Vec<StageReport>,
}

impl PipelineReport {
    /// Nodes changed by the named stage.
    pub fn nodes_changed(&self, stage: &str) -> usize {
        self.stages
            .iter()
            .filter(|report| report.stage == stage)
            .map(|report| report.nodes_changed)
            .sum()
    }
}

/// Stage name of the admonition normalization stage.
pub const STAGE_ADMONITIONS: &str = "normalize-admonitions";
/// Stage name of the link rewrite stage.
pub const STAGE_LINKS: &str = "rewrite-links";

struct NormalizeAdmonitions {
    vocabulary: AdmonitionVocabulary,
}

impl TreeTransform for NormalizeAdmonitions {
    fn name(&self) -> &'static str {
        STAGE_ADMONITIONS
    }

    fn apply(&self, root: &mut Node) -> usize {
        normalize_admonitions(root, &self.vocabulary)
    }
}

struct RewriteLinks {
    cfg: RewriteConfig,
}

impl TreeTransform for RewriteLinks {
    fn name(&self) -> &'static str {
        STAGE_LINKS
    }

    fn apply(&self, root: &mut Node) -> usize {
        rewrite_links(root, &self.cfg)
    }
}

/// Ordered pipeline of tree transforms.
pub struct TransformPipeline {
    stages: Vec<Box<dyn TreeTransform>>,
}

impl TransformPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Build the canonical two-stage site pipeline: admonition
    /// normalization, then link rewriting.
    pub fn for_site(cfg: &RewriteConfig, vocabulary: &AdmonitionVocabulary) -> Self {
        let mut pipeline = Self::new();
        pipeline.add_stage(NormalizeAdmonitions {
            vocabulary: vocabulary.clone(),
        });
        pipeline.add_stage(RewriteLinks { cfg: cfg.clone() });
        pipeline
    }

    /// Append a stage; stages run in insertion order.
    pub fn add_stage<T: TreeTransform + 'static>(&mut self, stage: T) {
        self.stages.push(Box::new(stage));
    }

    /// Run every stage over one document tree.
    ///
    /// The tree must be rooted at a root node; anything else is a
    /// structural error. Stages themselves never fail, they skip what they
    /// cannot transform.
    pub fn run(&self, root: &mut Node) -> Result<PipelineReport, DocflowError> {
        ensure_root(root)?;
        let mut report = PipelineReport::default();
        for stage in &self.stages {
            let nodes_changed = stage.apply(root);
            log::debug!("Stage {} changed {} node(s)", stage.name(), nodes_changed);
            report.stages.push(StageReport {
                stage: stage.name(),
                nodes_changed,
            });
        }
        Ok(report)
    }
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Process one document tree with the canonical site pipeline.
pub fn process(
    root: &mut Node,
    cfg: &RewriteConfig,
    vocabulary: &AdmonitionVocabulary,
) -> Result<PipelineReport, DocflowError> {
    TransformPipeline::for_site(cfg, vocabulary).run(root)
}

fn ensure_root(root: &Node) -> Result<(), DocflowError> {
    match root {
        Node::Root(_) => Ok(()),
        other => Err(DocflowError::MalformedTree {
            kind: node_kind(other),
            location: SourceLocation::from_position(other.position()),
        }),
    }
}
