//! Validation outcomes collected by a [`RuleSet`](super::RuleSet)

use std::fmt;

use crate::foundation::AttributeChain;

// ============================================================================
// VALIDATION FAILURE
// ============================================================================

/// One failed rule: where, which rule, and the rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationFailure {
    /// Chain of the attribute that failed.
    pub attribute: AttributeChain,
    /// Code of the failing rule, e.g. `"not_equal"`.
    pub code: &'static str,
    /// The rendered message.
    pub message: String,
}

impl ValidationFailure {
    /// Creates a failure record.
    pub fn new(attribute: AttributeChain, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            attribute,
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.attribute, self.code, self.message)
    }
}

// ============================================================================
// VALIDATION REPORT
// ============================================================================

/// Every failure produced by one [`RuleSet::validate`](super::RuleSet::validate)
/// call, in rule registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationReport {
    failures: Vec<ValidationFailure>,
}

impl ValidationReport {
    /// Creates an empty (valid) report.
    #[must_use]
    pub fn new() -> Self {
        Self {
            failures: Vec::new(),
        }
    }

    /// Records a failure.
    pub fn push(&mut self, failure: ValidationFailure) {
        self.failures.push(failure);
    }

    /// Returns true when no rule failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns all failures.
    #[must_use]
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Returns the number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Returns true if there are no failures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Iterates over the rendered messages.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|failure| failure.message.as_str())
    }

    /// Returns the failures for one attribute.
    pub fn failures_for<'a>(
        &'a self,
        attribute: &'a AttributeChain,
    ) -> impl Iterator<Item = &'a ValidationFailure> {
        self.failures
            .iter()
            .filter(move |failure| &failure.attribute == attribute)
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationReport> {
        if self.is_valid() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationFailure> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = ValidationFailure>>(iter: I) -> Self {
        Self {
            failures: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a ValidationFailure;
    type IntoIter = std::slice::Iter<'a, ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.iter()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return f.write_str("Validation passed");
        }
        writeln!(f, "Validation failed with {} error(s):", self.failures.len())?;
        for (i, failure) in self.failures.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

// ============================================================================
// TESTS
// ============================================================================
