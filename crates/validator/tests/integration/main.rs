//! Integration tests for assay-validator.

mod attribute_chain;
mod comparison_rules;
mod not_equal_rule;
