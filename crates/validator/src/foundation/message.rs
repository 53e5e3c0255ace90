//! Message templates and their placeholders
//!
//! A [`Template`] is text with `$name` (or `${name}`) slots; `$$` is a
//! literal dollar sign. A [`MessageConstructor`] pairs a template with the
//! [`Placeholders`] collected while a rule ran and renders the final
//! message. Rendering only ever happens for failed rules, so a passing
//! validation never formats anything.
//!
//! ```
//! use assay_validator::foundation::{MessageConstructor, Template};
//!
//! let mut message = MessageConstructor::new(Template::new(
//!     "'$attribute_name' must not be equal to '$comparison_value'",
//! ));
//! message.insert_placeholder("attribute_name", "quantity");
//! message.insert_placeholder("comparison_value", 0_u32);
//!
//! assert_eq!(message.render().unwrap(), "'quantity' must not be equal to '0'");
//! ```

use std::any::Any;
use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

use crate::foundation::chain::is_identifier;
use crate::foundation::{MessageError, MessageValue};

/// Placeholder holding the dotted attribute path, seeded by the orchestrator.
pub const ATTRIBUTE_NAME: &str = "attribute_name";

/// Placeholder holding a comparison rule's operand, written on failure only.
pub const COMPARISON_VALUE: &str = "comparison_value";

// ============================================================================
// TEMPLATE
// ============================================================================

/// A message pattern with named placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Template {
    source: Cow<'static, str>,
}

/// One piece of a parsed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

impl Template {
    /// Creates a template from its source text.
    ///
    /// The text is not checked here; malformed placeholders are reported by
    /// [`render`](Self::render).
    pub fn new(source: impl Into<Cow<'static, str>>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Returns the template source text.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.source
    }

    /// Returns the placeholder names referenced by the template, in order of
    /// first appearance.
    ///
    /// # Errors
    ///
    /// Returns [`MessageError::InvalidPlaceholder`] for a malformed `$`.
    pub fn placeholder_names(&self) -> Result<Vec<&str>, MessageError> {
        let mut names: Vec<&str> = Vec::new();
        for segment in self.segments()? {
            if let Segment::Placeholder(name) = segment
                && !names.contains(&name)
            {
                names.push(name);
            }
        }
        Ok(names)
    }

    /// Substitutes every placeholder with its value from `placeholders`.
    ///
    /// Entries the template does not reference are ignored.
    ///
    /// # Errors
    ///
    /// - [`MessageError::MissingPlaceholder`] when a referenced name has no
    ///   value. This means a rule failed without populating a placeholder its
    ///   own template promises, which is a bug in that rule.
    /// - [`MessageError::InvalidPlaceholder`] for a malformed `$`.
    pub fn render(&self, placeholders: &Placeholders) -> Result<String, MessageError> {
        let mut out = String::with_capacity(self.source.len());
        for segment in self.segments()? {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value =
                        placeholders
                            .find(name)
                            .ok_or_else(|| MessageError::MissingPlaceholder {
                                name: name.to_owned(),
                                template: self.source.to_string(),
                            })?;
                    out.push_str(&RenderedValue(value).to_string());
                }
            }
        }
        Ok(out)
    }

    fn segments(&self) -> Result<Vec<Segment<'_>>, MessageError> {
        let source: &str = &self.source;
        let mut segments = Vec::new();
        let mut literal_start = 0;
        let mut cursor = 0;

        while let Some(offset) = source[cursor..].find('$') {
            let dollar = cursor + offset;
            let rest = &source[dollar + 1..];

            if rest.starts_with('$') {
                // `$$` keeps the first `$` as literal text.
                segments.push(Segment::Literal(&source[literal_start..=dollar]));
                cursor = dollar + 2;
                literal_start = cursor;
                continue;
            }

            let (name, consumed) = if let Some(braced) = rest.strip_prefix('{') {
                let close = braced.find('}').ok_or_else(|| self.invalid_at(dollar))?;
                (&braced[..close], close + 2)
            } else {
                let len = rest
                    .char_indices()
                    .find(|&(i, c)| {
                        !(c.is_ascii_alphabetic() || c == '_' || (i > 0 && c.is_ascii_digit()))
                    })
                    .map_or(rest.len(), |(i, _)| i);
                (&rest[..len], len)
            };

            if !is_identifier(name) {
                return Err(self.invalid_at(dollar));
            }

            if literal_start < dollar {
                segments.push(Segment::Literal(&source[literal_start..dollar]));
            }
            segments.push(Segment::Placeholder(name));
            cursor = dollar + 1 + consumed;
            literal_start = cursor;
        }

        if literal_start < source.len() {
            segments.push(Segment::Literal(&source[literal_start..]));
        }
        Ok(segments)
    }

    fn invalid_at(&self, position: usize) -> MessageError {
        MessageError::InvalidPlaceholder {
            position,
            template: self.source.to_string(),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<&'static str> for Template {
    fn from(source: &'static str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

struct RenderedValue<'a>(&'a dyn MessageValue);

impl fmt::Display for RenderedValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_message(f)
    }
}

// ============================================================================
// PLACEHOLDERS
// ============================================================================

/// Named placeholder values, unique by name.
///
/// Values keep their concrete type: [`get`](Self::get) hands back exactly
/// what was inserted. Most messages carry one to three entries, so storage
/// is inline until it grows past four.
#[derive(Default)]
pub struct Placeholders {
    entries: SmallVec<[(Cow<'static, str>, Box<dyn MessageValue>); 4]>,
}

impl Placeholders {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<Cow<'static, str>>, value: impl MessageValue) {
        let name = name.into();
        let value: Box<dyn MessageValue> = Box::new(value);
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Removes a value. Returns true if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(key, _)| &**key != name);
        self.entries.len() != before
    }

    /// Returns true if a value is stored under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Returns the value under `name` if it has type `V`.
    #[must_use]
    pub fn get<V: MessageValue>(&self, name: &str) -> Option<&V> {
        let value: &dyn Any = self.find(name)?;
        value.downcast_ref::<V>()
    }

    /// Returns the rendered text of the value under `name`.
    #[must_use]
    pub fn rendered(&self, name: &str) -> Option<String> {
        self.find(name).map(|value| RenderedValue(value).to_string())
    }

    /// Iterates over the stored names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| &**key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find(&self, name: &str) -> Option<&dyn MessageValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| &**value)
    }
}

impl fmt::Debug for Placeholders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.entries
                    .iter()
                    .map(|(key, value)| (key, RenderedValue(&**value).to_string())),
            )
            .finish()
    }
}

// ============================================================================
// MESSAGE CONSTRUCTOR
// ============================================================================

/// A template plus the placeholder values gathered for one evaluation.
#[derive(Debug, Default)]
pub struct MessageConstructor {
    template: Template,
    placeholders: Placeholders,
}

impl MessageConstructor {
    /// Creates a constructor with no placeholders.
    #[must_use]
    pub fn new(template: Template) -> Self {
        Self {
            template,
            placeholders: Placeholders::new(),
        }
    }

    /// Returns the template.
    #[must_use]
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Replaces the template, keeping the placeholders.
    pub fn set_template(&mut self, template: Template) {
        self.template = template;
    }

    /// Returns the placeholder values.
    #[must_use]
    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    /// Returns the placeholder values mutably.
    pub fn placeholders_mut(&mut self) -> &mut Placeholders {
        &mut self.placeholders
    }

    /// Inserts or replaces one placeholder value.
    pub fn insert_placeholder(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl MessageValue,
    ) {
        self.placeholders.insert(name, value);
    }

    /// Renders the template against the current placeholders.
    ///
    /// # Errors
    ///
    /// See [`Template::render`].
    pub fn render(&self) -> Result<String, MessageError> {
        self.template.render(&self.placeholders)
    }
}

// ============================================================================
// TESTS
// ============================================================================
