//! Core rule-evaluation types and traits
//!
//! This module contains the building blocks every rule shares:
//!
//! - **Paths**: [`AttributeChain`], usually built with [`attribute_chain!`]
//! - **Traits**: [`Rule`], [`RuleExt`], [`MessageValue`]
//! - **Messages**: [`Template`], [`Placeholders`], [`MessageConstructor`]
//! - **State**: [`ValidationState`]
//! - **Errors**: [`ChainError`], [`MessageError`]
//!
//! # Evaluation flow
//!
//! ```text
//! AttributeChain ──resolve──▶ candidate
//!        │                        │
//!        ▼                        ▼
//! ValidationState ──────▶ Rule::validate ── true ──▶ done, nothing rendered
//!                                 │
//!                               false
//!                                 ▼
//!              Rule::template_message + placeholders ──▶ message
//! ```
//!
//! # Example
//!
//! ```
//! use assay_validator::attribute_chain;
//! use assay_validator::foundation::{Rule, ValidationState, COMPARISON_VALUE};
//! use assay_validator::rules::not_equal;
//!
//! struct Product {
//!     name: String,
//! }
//!
//! let product = Product { name: "Widget".into() };
//! let chain = attribute_chain!(|p: Product| p.name);
//! let rule = not_equal("Widget".to_string());
//!
//! let mut state = ValidationState::for_attribute(&product, &chain);
//! assert!(!rule.validate(&mut state, &product.name));
//! assert_eq!(
//!     state.placeholders().get::<String>(COMPARISON_VALUE).map(String::as_str),
//!     Some("Widget")
//! );
//!
//! let message = state.into_message(rule.template_message()).unwrap();
//! assert_eq!(message, "'name' must not be equal to 'Widget'");
//! ```
//!
//! [`attribute_chain!`]: crate::attribute_chain

// Module declarations
pub mod chain;
pub mod error;
pub mod message;
pub mod state;
pub mod traits;
pub mod value;

// Re-export everything at the foundation level for convenience
pub use chain::AttributeChain;
pub use error::{ChainError, MessageError};
pub use message::{ATTRIBUTE_NAME, COMPARISON_VALUE, MessageConstructor, Placeholders, Template};
pub use state::ValidationState;
pub use traits::{Rule, RuleExt};
pub use value::MessageValue;

// ============================================================================
// PRELUDE
// ============================================================================

/// Common imports for working with the foundation.
pub mod prelude {
    pub use super::{
        AttributeChain, ChainError, MessageConstructor, MessageError, MessageValue, Placeholders,
        Rule, RuleExt, Template, ValidationState,
    };
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Evaluates `rule` against `candidate` on a fresh state and returns the
/// rendered message if it failed.
///
/// This is the whole evaluation protocol in one call: build a single-use
/// state, validate, and render only on failure.
///
/// # Errors
///
/// Returns [`MessageError`] if the rule failed without populating a
/// placeholder its template references.
///
/// # Examples
///
/// ```
/// use assay_validator::foundation::{evaluate, AttributeChain};
/// use assay_validator::rules::not_equal;
///
/// let chain = AttributeChain::from_parts(["quantity"]);
/// let rule = not_equal(0_u32);
///
/// assert_eq!(evaluate(&(), &chain, &rule, &5_u32).unwrap(), None);
/// assert_eq!(
///     evaluate(&(), &chain, &rule, &0_u32).unwrap().as_deref(),
///     Some("'quantity' must not be equal to '0'")
/// );
/// ```
pub fn evaluate<T, V, R>(
    object: &T,
    chain: &AttributeChain,
    rule: &R,
    candidate: &V,
) -> Result<Option<String>, MessageError>
where
    T: ?Sized,
    V: ?Sized,
    R: Rule<T, V> + ?Sized,
{
    let mut state = ValidationState::for_attribute(object, chain);
    if rule.validate(&mut state, candidate) {
        return Ok(None);
    }
    state.into_message(rule.template_message()).map(Some)
}

// ============================================================================
// TESTS
// ============================================================================
