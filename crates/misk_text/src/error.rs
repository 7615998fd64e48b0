//! Errors
//!
//! Every transform fails the same way: an argument was unusable. The reason is
//! kept as a typed [`InvalidArgument`] so callers can decide whether to abort
//! or ask for corrected input. Nothing is retried or silently corrected.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReflowError>;

/// Broad classification of a [`ReflowError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument (width, tab size, indent unit, or the text's own
    /// indentation) cannot be used.
    InvalidArgument,
}

/// Error returned by the text transforms.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReflowError {
    #[error("invalid argument: {0}")]
    InvalidArgument(InvalidArgument),
}

impl ReflowError {
    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReflowError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }

    /// Get the reason an argument was rejected.
    pub fn reason(&self) -> &InvalidArgument {
        match self {
            ReflowError::InvalidArgument(reason) => reason,
        }
    }
}

impl From<InvalidArgument> for ReflowError {
    fn from(reason: InvalidArgument) -> Self {
        ReflowError::InvalidArgument(reason)
    }
}

/// Why an argument was rejected.
///
/// Line numbers are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("width must be greater than zero")]
    ZeroWidth,

    #[error("tab size must be greater than zero")]
    ZeroTabSize,

    #[error("indent unit {unit:?} must be a non-empty run of only spaces or only tabs")]
    BadIndentUnit { unit: String },

    #[error("line {line}: indentation mixes tabs and spaces")]
    MixedIndentation { line: usize },

    #[error("line {line}: indentation {indent:?} is not a whole multiple of {unit:?}")]
    UnalignedIndentation {
        line: usize,
        indent: String,
        unit: String,
    },

    #[error("meta-variable name must not be empty")]
    EmptyMetavarName,

    #[error("meta-variable name {name:?} cannot be matched: {reason}")]
    UnmatchableMetavar { name: String, reason: String },
}

/// Reject an argument, recording the reason at debug level.
pub(crate) fn reject<T>(reason: InvalidArgument) -> Result<T> {
    tracing::debug!(%reason, "rejecting argument");
    Err(reason.into())
}
