//! Programmer-facing errors
//!
//! Two kinds of mistakes are reported here, and neither is a validation
//! failure:
//!
//! - [`ChainError`]: an attribute path that is not a plain chain of
//!   identifiers. Raised when the chain is built, never during validation.
//! - [`MessageError`]: a template that cannot be rendered, either because it
//!   is malformed or because the rule that failed did not populate a
//!   placeholder its own template references.
//!
//! Failing validations are ordinary data: [`Rule::validate`] returns `false`
//! and the orchestrator collects a [`ValidationFailure`].
//!
//! [`Rule::validate`]: crate::foundation::Rule::validate
//! [`ValidationFailure`]: crate::rule_set::ValidationFailure

// ============================================================================
// CHAIN ERROR
// ============================================================================

/// An attribute path that is not a straight chain of field names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ChainError {
    /// Two dots in a row, or a leading/trailing dot.
    #[error("attribute path `{path}` has an empty segment at position {position}")]
    EmptySegment {
        /// The full path that was rejected.
        path: String,
        /// Zero-based index of the empty segment.
        position: usize,
    },

    /// A segment that is not an identifier (indexing, calls, whitespace...).
    #[error("attribute path `{path}` has invalid segment `{segment}`, expected an identifier")]
    InvalidSegment {
        /// The full path that was rejected.
        path: String,
        /// The offending segment.
        segment: String,
    },
}

// ============================================================================
// MESSAGE ERROR
// ============================================================================

/// A template that could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum MessageError {
    /// The template references a placeholder nobody populated.
    #[error("template `{template}` references placeholder `${name}` which was never populated")]
    MissingPlaceholder {
        /// Placeholder name without the leading `$`.
        name: String,
        /// Template source text.
        template: String,
    },

    /// A `$` that is not followed by a name, `{name}` or another `$`.
    #[error("template `{template}` has an invalid placeholder at byte {position}")]
    InvalidPlaceholder {
        /// Byte offset of the offending `$`.
        position: usize,
        /// Template source text.
        template: String,
    },
}

impl MessageError {
    /// Returns the placeholder name for [`MessageError::MissingPlaceholder`].
    #[must_use]
    pub fn missing_name(&self) -> Option<&str> {
        match self {
            Self::MissingPlaceholder { name, .. } => Some(name.as_str()),
            Self::InvalidPlaceholder { .. } => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
