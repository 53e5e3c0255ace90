//! Prelude module for convenient imports.
//!
//! Provides a single `use assay_validator::prelude::*;` import that brings
//! in the core traits, message types, rules and the rule set.
//!
//! # Examples
//!
//! ```
//! use assay_validator::prelude::*;
//!
//! let rule = not_equal(0_i32).with_code("zero");
//! assert_eq!(Rule::<(), i32>::code(&rule), "zero");
//! ```

// ============================================================================
// FOUNDATION: Core traits, messages, state
// ============================================================================

pub use crate::foundation::{
    AttributeChain, ChainError, MessageConstructor, MessageError, MessageValue, Placeholders,
    Rule, RuleExt, Template, ValidationState, evaluate,
};

// ============================================================================
// RULES: Comparison family and wrappers
// ============================================================================

pub use crate::rules::{
    Equal, GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual, NotEqual, WithMessage,
    equal, greater_than, greater_than_or_equal, less_than, less_than_or_equal, not_equal,
    with_code, with_message,
};

// ============================================================================
// RULE SET: Orchestration
// ============================================================================

pub use crate::rule_set::{CascadeMode, Property, RuleSet, ValidationFailure, ValidationReport};
