//! Core traits for the rule system
//!
//! This module defines the contract every rule implements.

use std::sync::Arc;

use crate::foundation::{Template, ValidationState};

// ============================================================================
// CORE RULE TRAIT
// ============================================================================

/// The contract every rule implements.
///
/// A rule is a reusable predicate over a candidate value of type `V`,
/// extracted from an object of type `T`, plus the default message template
/// shown when the predicate fails.
///
/// Rules are stateless beyond their configuration: the same instance may
/// be shared across threads and evaluated concurrently. Anything that varies
/// per call belongs in the [`ValidationState`].
///
/// # Type Parameters
///
/// * `T` - The root object being validated (can be `?Sized`)
/// * `V` - The candidate value type (can be `?Sized`, e.g. `str`)
///
/// # Examples
///
/// ```
/// use assay_validator::foundation::{Rule, Template, ValidationState};
///
/// struct NotBlank;
///
/// impl<T: ?Sized> Rule<T, str> for NotBlank {
///     fn validate(&self, _state: &mut ValidationState<'_, T>, candidate: &str) -> bool {
///         !candidate.trim().is_empty()
///     }
///
///     fn template_message(&self) -> Template {
///         Template::new("'$attribute_name' must not be blank")
///     }
/// }
///
/// let mut state = ValidationState::new(&());
/// assert!(!NotBlank.validate(&mut state, "   "));
/// ```
pub trait Rule<T: ?Sized, V: ?Sized> {
    /// Checks `candidate`, returning true when it conforms.
    ///
    /// On failure the rule writes every rule-specific placeholder its
    /// template references into `state`. On success it writes nothing.
    fn validate(&self, state: &mut ValidationState<'_, T>, candidate: &V) -> bool;

    /// Returns the default failure message template for this rule.
    fn template_message(&self) -> Template;

    /// Returns a stable error code for programmatic handling.
    fn code(&self) -> &'static str {
        "custom"
    }
}

impl<T, V, R> Rule<T, V> for &R
where
    T: ?Sized,
    V: ?Sized,
    R: Rule<T, V> + ?Sized,
{
    fn validate(&self, state: &mut ValidationState<'_, T>, candidate: &V) -> bool {
        (**self).validate(state, candidate)
    }

    fn template_message(&self) -> Template {
        (**self).template_message()
    }

    fn code(&self) -> &'static str {
        (**self).code()
    }
}

impl<T, V, R> Rule<T, V> for Box<R>
where
    T: ?Sized,
    V: ?Sized,
    R: Rule<T, V> + ?Sized,
{
    fn validate(&self, state: &mut ValidationState<'_, T>, candidate: &V) -> bool {
        (**self).validate(state, candidate)
    }

    fn template_message(&self) -> Template {
        (**self).template_message()
    }

    fn code(&self) -> &'static str {
        (**self).code()
    }
}

impl<T, V, R> Rule<T, V> for Arc<R>
where
    T: ?Sized,
    V: ?Sized,
    R: Rule<T, V> + ?Sized,
{
    fn validate(&self, state: &mut ValidationState<'_, T>, candidate: &V) -> bool {
        (**self).validate(state, candidate)
    }

    fn template_message(&self) -> Template {
        (**self).template_message()
    }

    fn code(&self) -> &'static str {
        (**self).code()
    }
}

// ============================================================================
// RULE EXTENSION TRAIT
// ============================================================================

/// Extension methods for customising rules.
///
/// Implemented for every sized type; the wrappers only become rules when
/// the wrapped value is one.
pub trait RuleExt: Sized {
    /// Replaces the rule's message template.
    ///
    /// ```
    /// use assay_validator::prelude::*;
    ///
    /// let rule = not_equal(0_u32).with_message("$attribute_name cannot be zero");
    /// assert_eq!(
    ///     Rule::<(), u32>::template_message(&rule).template(),
    ///     "$attribute_name cannot be zero"
    /// );
    /// ```
    fn with_message(self, template: impl Into<Template>) -> WithMessage<Self> {
        WithMessage::new(self, template)
    }

    /// Replaces the rule's error code, keeping its template.
    fn with_code(self, code: &'static str) -> WithMessage<Self> {
        WithMessage::code_only(self, code)
    }
}

impl<R> RuleExt for R {}

pub use crate::rules::message::WithMessage;

// ============================================================================
// TESTS
// ============================================================================
