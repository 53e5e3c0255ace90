//! Per-evaluation validation state

use std::fmt;

use crate::foundation::message::ATTRIBUTE_NAME;
use crate::foundation::{AttributeChain, MessageConstructor, MessageError, Placeholders, Template};

/// The context of one rule evaluation against one resolved value.
///
/// A state borrows the root object under validation and owns a fresh
/// [`MessageConstructor`] whose placeholders always contain
/// `attribute_name`. Rules add their own placeholders only when they fail.
///
/// A state is single-use: build one per `validate` call and drop it (or
/// consume it with [`into_message`](Self::into_message)) afterwards. Reusing
/// a state would carry one failure's placeholders into the next evaluation.
pub struct ValidationState<'a, T: ?Sized> {
    object_to_validate: &'a T,
    message_constructor: MessageConstructor,
}

impl<'a, T: ?Sized> ValidationState<'a, T> {
    /// Creates a state for the root object with an empty attribute name.
    pub fn new(object_to_validate: &'a T) -> Self {
        Self::with_attribute_name(object_to_validate, String::new())
    }

    /// Creates a state whose `attribute_name` is the rendered `chain`.
    pub fn for_attribute(object_to_validate: &'a T, chain: &AttributeChain) -> Self {
        Self::with_attribute_name(object_to_validate, chain.to_string())
    }

    /// Creates a state with an explicit display name for the attribute.
    pub fn with_attribute_name(
        object_to_validate: &'a T,
        attribute_name: impl Into<String>,
    ) -> Self {
        let mut message_constructor = MessageConstructor::default();
        message_constructor.insert_placeholder(ATTRIBUTE_NAME, attribute_name.into());
        Self {
            object_to_validate,
            message_constructor,
        }
    }

    /// Returns the root object under validation.
    pub fn object_to_validate(&self) -> &'a T {
        self.object_to_validate
    }

    /// Returns the message constructor.
    pub fn message_constructor(&self) -> &MessageConstructor {
        &self.message_constructor
    }

    /// Returns the message constructor mutably.
    pub fn message_constructor_mut(&mut self) -> &mut MessageConstructor {
        &mut self.message_constructor
    }

    /// Shortcut for `message_constructor().placeholders()`.
    pub fn placeholders(&self) -> &Placeholders {
        self.message_constructor.placeholders()
    }

    /// Returns the `attribute_name` placeholder.
    pub fn attribute_name(&self) -> &str {
        self.placeholders()
            .get::<String>(ATTRIBUTE_NAME)
            .map_or("", String::as_str)
    }

    /// Consumes the state and renders `template` against its placeholders.
    ///
    /// # Errors
    ///
    /// See [`Template::render`].
    pub fn into_message(mut self, template: Template) -> Result<String, MessageError> {
        self.message_constructor.set_template(template);
        self.message_constructor.render()
    }
}

impl<T: ?Sized> fmt::Debug for ValidationState<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationState")
            .field("object_to_validate", &std::any::type_name::<T>())
            .field("message_constructor", &self.message_constructor)
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
