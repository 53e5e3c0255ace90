//! # assay-validator
//!
//! Declarative, rule-based validation with templated failure messages.
//!
//! ## Quick Start
//!
//! ```
//! use assay_validator::prelude::*;
//! use assay_validator::attribute_chain;
//!
//! struct Product {
//!     name: String,
//! }
//!
//! let product = Product { name: "Widget".into() };
//! let chain = attribute_chain!(|p: Product| p.name);
//! let rule = not_equal(String::from("Widget"));
//!
//! let mut state = ValidationState::for_attribute(&product, &chain);
//! if !rule.validate(&mut state, &product.name) {
//!     let message = state.into_message(rule.template_message()).unwrap();
//!     assert_eq!(message, "'name' must not be equal to 'Widget'");
//! }
//! ```
//!
//! ## Pieces
//!
//! - [`AttributeChain`](foundation::AttributeChain): the path from the root
//!   object to the checked value, derived with [`attribute_chain!`]
//! - [`Rule`](foundation::Rule): a predicate plus a default message template
//! - [`ValidationState`](foundation::ValidationState): per-evaluation scratch
//!   space holding the object and the message placeholders
//! - [`rules`]: the comparison family ([`NotEqual`](rules::NotEqual),
//!   [`Equal`](rules::Equal), ordering rules) and [`WithMessage`](rules::WithMessage)
//! - [`rule_set`]: register rules per property and validate whole objects
//!
//! ## Creating Rules
//!
//! Use the [`rule!`] macro for operand-comparison rules, or implement
//! [`Rule`](foundation::Rule) manually for anything else.

pub mod foundation;
mod macros;
pub mod prelude;
pub mod rule_set;
pub mod rules;
