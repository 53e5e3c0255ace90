//! Per-property rule registration and whole-object validation
//!
//! A [`RuleSet`] pairs [`Property`] paths with rules and runs them against
//! an object, collecting rendered messages into a [`ValidationReport`].
//! Each evaluation gets its own [`ValidationState`], so rules never see
//! another rule's placeholders.
//!
//! ```
//! use assay_validator::prelude::*;
//! use assay_validator::property;
//!
//! struct Product {
//!     name: String,
//!     stock: u32,
//! }
//!
//! let rules = RuleSet::new()
//!     .rule_for(property!(|p: Product| p.name), not_equal(String::from("TBD")))
//!     .rule_for(property!(|p: Product| p.stock), not_equal(0_u32));
//!
//! let report = rules
//!     .validate(&Product { name: "TBD".into(), stock: 3 })
//!     .unwrap();
//! assert_eq!(
//!     report.messages().collect::<Vec<_>>(),
//!     ["'name' must not be equal to 'TBD'"]
//! );
//! ```
//!
//! [`ValidationState`]: crate::foundation::ValidationState

mod property;
mod report;

pub use property::Property;
pub use report::{ValidationFailure, ValidationReport};

use std::fmt;

use crate::foundation::{AttributeChain, MessageError, Rule, evaluate};

// ============================================================================
// CASCADE MODE
// ============================================================================

/// What a [`RuleSet`] does after a rule fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CascadeMode {
    /// Evaluate every rule and report all failures.
    #[default]
    Continue,
    /// Stop after the first failure.
    StopOnFirstFailure,
}

// ============================================================================
// RULE SET
// ============================================================================

struct Entry<T: ?Sized> {
    attribute: AttributeChain,
    code: &'static str,
    check: Box<dyn Fn(&T) -> Result<Option<ValidationFailure>, MessageError> + Send + Sync>,
}

/// An ordered list of property rules for objects of type `T`.
pub struct RuleSet<T: ?Sized> {
    entries: Vec<Entry<T>>,
    cascade: CascadeMode,
}

impl<T: ?Sized> RuleSet<T> {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cascade: CascadeMode::default(),
        }
    }

    /// Adds `rule` for the attribute `property` points at.
    ///
    /// Rules run in registration order.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule_for<V, F, R>(mut self, property: Property<T, V, F>, rule: R) -> Self
    where
        T: 'static,
        V: ?Sized + 'static,
        F: Fn(&T) -> &V + Send + Sync + 'static,
        R: Rule<T, V> + Send + Sync + 'static,
    {
        let attribute = property.chain().clone();
        let code = rule.code();
        self.entries.push(Entry {
            attribute,
            code,
            check: Box::new(move |object: &T| {
                let chain = property.chain();
                let message = evaluate(object, chain, &rule, property.resolve(object))?;
                Ok(message.map(|message| ValidationFailure::new(chain.clone(), code, message)))
            }),
        });
        self
    }

    /// Sets the cascade mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn cascade(mut self, mode: CascadeMode) -> Self {
        self.cascade = mode;
        self
    }

    /// Returns the cascade mode.
    pub fn cascade_mode(&self) -> CascadeMode {
        self.cascade
    }

    /// Returns the number of registered rules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validates `object` against every registered rule.
    ///
    /// A failed rule is data, recorded in the report. `Err` means a rule
    /// broke its contract by failing without the placeholders its template
    /// needs.
    ///
    /// # Errors
    ///
    /// Returns the first [`MessageError`] raised while rendering.
    pub fn validate(&self, object: &T) -> Result<ValidationReport, MessageError> {
        let mut report = ValidationReport::new();

        for (index, entry) in self.entries.iter().enumerate() {
            tracing::trace!(attribute = %entry.attribute, code = entry.code, "evaluating rule");

            let Some(failure) = (entry.check)(object)? else {
                continue;
            };
            tracing::debug!(
                attribute = %failure.attribute,
                code = failure.code,
                message = %failure.message,
                "rule failed"
            );
            report.push(failure);

            if self.cascade == CascadeMode::StopOnFirstFailure {
                tracing::debug!(
                    skipped = self.entries.len() - index - 1,
                    "stopping after first failure"
                );
                break;
            }
        }

        Ok(report)
    }
}

impl<T: ?Sized> Default for RuleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for RuleSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field(
                "rules",
                &self
                    .entries
                    .iter()
                    .map(|entry| (entry.attribute.to_string(), entry.code))
                    .collect::<Vec<_>>(),
            )
            .field("cascade", &self.cascade)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
