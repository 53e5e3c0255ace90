//! Attribute chains: where a rule looks inside an object graph
//!
//! An [`AttributeChain`] is the ordered list of field names that leads from
//! the root object to the value a rule checks. Chains are usually derived
//! from an accessor expression with [`attribute_chain!`], which reads the
//! field names off the expression at compile time instead of running it:
//!
//! ```
//! use assay_validator::attribute_chain;
//!
//! let chain = attribute_chain!(|x| x.product.currency.code);
//! assert_eq!(chain.path_in_parts(), ["product", "currency", "code"]);
//! assert_eq!(chain.to_string(), "product.currency.code");
//! ```
//!
//! Paths that only exist as text (configuration, user input) go through
//! [`AttributeChain::parse`], which rejects anything that is not a plain
//! dotted identifier path.
//!
//! [`attribute_chain!`]: crate::attribute_chain

use std::fmt;
use std::str::FromStr;

use crate::foundation::ChainError;

// ============================================================================
// ATTRIBUTE CHAIN
// ============================================================================

/// An ordered path of attribute names, root first.
///
/// The empty chain designates the root object itself and renders as `""`.
/// Chains are immutable; [`child`](Self::child) returns a new chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct AttributeChain {
    path_in_parts: Vec<String>,
}

impl AttributeChain {
    /// Creates the empty (root) chain.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            path_in_parts: Vec::new(),
        }
    }

    /// Creates a chain from explicit parts, in traversal order.
    ///
    /// Parts are taken as given; use [`parse`](Self::parse) when the names
    /// come from untrusted text and need checking.
    pub fn from_parts<I>(parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            path_in_parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a chain from names checked at compile time.
    ///
    /// Used by [`attribute_chain!`](crate::attribute_chain); prefer the macro.
    #[doc(hidden)]
    #[must_use]
    pub fn from_static(parts: &[&'static str]) -> Self {
        Self::from_parts(parts.iter().copied())
    }

    /// Parses a dotted path such as `"product.currency.code"`.
    ///
    /// An empty string yields the root chain. Every segment must be an
    /// identifier (`[A-Za-z_][A-Za-z0-9_]*`).
    ///
    /// # Errors
    ///
    /// Returns [`ChainError`] for empty segments or segments that are not
    /// identifiers, e.g. `"items[0]"` or `"name()"`.
    pub fn parse(path: &str) -> Result<Self, ChainError> {
        if path.is_empty() {
            return Ok(Self::new());
        }

        let mut path_in_parts = Vec::new();
        for (position, segment) in path.split('.').enumerate() {
            if segment.is_empty() {
                return Err(ChainError::EmptySegment {
                    path: path.to_owned(),
                    position,
                });
            }
            if !is_identifier(segment) {
                return Err(ChainError::InvalidSegment {
                    path: path.to_owned(),
                    segment: segment.to_owned(),
                });
            }
            path_in_parts.push(segment.to_owned());
        }

        Ok(Self { path_in_parts })
    }

    /// Returns the attribute names in traversal order.
    #[must_use]
    pub fn path_in_parts(&self) -> &[String] {
        &self.path_in_parts
    }

    /// Returns the number of parts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.path_in_parts.len()
    }

    /// Returns true for the root chain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path_in_parts.is_empty()
    }

    /// Returns the last attribute name, if any.
    #[must_use]
    pub fn leaf(&self) -> Option<&str> {
        self.path_in_parts.last().map(String::as_str)
    }

    /// Returns a new chain extended by one attribute.
    #[must_use = "chains are immutable, child returns a new chain"]
    pub fn child(&self, name: impl Into<String>) -> Self {
        let mut path_in_parts = Vec::with_capacity(self.path_in_parts.len() + 1);
        path_in_parts.extend(self.path_in_parts.iter().cloned());
        path_in_parts.push(name.into());
        Self { path_in_parts }
    }

    /// Returns a new chain with `other` appended after `self`.
    #[must_use = "chains are immutable, join returns a new chain"]
    pub fn join(&self, other: &Self) -> Self {
        self.path_in_parts
            .iter()
            .chain(other.path_in_parts.iter())
            .cloned()
            .collect()
    }

    /// Iterates over the attribute names.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.path_in_parts.iter()
    }
}

pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl fmt::Display for AttributeChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.path_in_parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(part)?;
        }
        Ok(())
    }
}

impl FromStr for AttributeChain {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Vec<String>> for AttributeChain {
    fn from(path_in_parts: Vec<String>) -> Self {
        Self { path_in_parts }
    }
}

impl<S: Into<String>> FromIterator<S> for AttributeChain {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_parts(iter)
    }
}

impl<'a> IntoIterator for &'a AttributeChain {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// TESTS
// ============================================================================
