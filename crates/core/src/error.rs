use markdown::unist::Position;
use thiserror::Error;

/// Source location information for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Build a location from an mdast position, defaulting to the document start.
    pub fn from_position(position: Option<&Position>) -> Self {
        match position {
            Some(position) => Self::new(position.start.line, position.start.column),
            None => Self::new(1, 1),
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Errors that can occur while transforming a document tree.
#[derive(Debug, Error)]
pub enum DocflowError {
    /// The input tree violates the minimal structural contract.
    #[error("Malformed document tree at {location}: expected a root node, found {kind}")]
    MalformedTree {
        /// Kind of the offending node.
        kind: &'static str,
        /// Source location of the offending node.
        location: SourceLocation,
    },
    /// Rewrite configuration that can never match safely.
    #[error("Invalid rewrite configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        message: String,
    },
}

impl DocflowError {
    /// Create an invalid-configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
