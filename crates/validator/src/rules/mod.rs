//! Built-in rules
//!
//! - [`comparison`]: operand comparisons ([`not_equal`], [`equal`],
//!   [`greater_than`], ...)
//! - [`message`]: [`WithMessage`], replacing a rule's template or code

pub mod comparison;
pub mod message;

pub use comparison::{
    Equal, GreaterThan, GreaterThanOrEqual, LessThan, LessThanOrEqual, NotEqual, equal,
    greater_than, greater_than_or_equal, less_than, less_than_or_equal, not_equal,
};
pub use message::{WithMessage, with_code, with_message};
