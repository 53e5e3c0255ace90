//! MESSAGE wrapper - custom templates and codes

use crate::foundation::{Rule, Template, ValidationState};

// ============================================================================
// WITH MESSAGE WRAPPER
// ============================================================================

/// Replaces the message template and/or error code of a rule.
///
/// Validation is delegated untouched, so every placeholder the inner rule
/// writes is still available to the replacement template.
///
/// # Examples
///
/// ```
/// use assay_validator::foundation::{evaluate, AttributeChain};
/// use assay_validator::rules::{not_equal, WithMessage};
///
/// let rule = WithMessage::new(
///     not_equal("admin"),
///     "'$comparison_value' is reserved, pick another $attribute_name",
/// );
///
/// let chain = AttributeChain::from_parts(["username"]);
/// assert_eq!(
///     evaluate(&(), &chain, &rule, &"admin").unwrap().as_deref(),
///     Some("'admin' is reserved, pick another username")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<R> {
    inner: R,
    template: Option<Template>,
    code: Option<&'static str>,
}

impl<R> WithMessage<R> {
    /// Wraps `inner` with a custom message template.
    pub fn new(inner: R, template: impl Into<Template>) -> Self {
        Self {
            inner,
            template: Some(template.into()),
            code: None,
        }
    }

    /// Wraps `inner`, overriding only the error code and keeping its template.
    pub fn code_only(inner: R, code: &'static str) -> Self {
        Self {
            inner,
            template: None,
            code: Some(code),
        }
    }

    /// Also replaces the error code.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    /// Returns a reference to the inner rule.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Returns the custom template, if set.
    pub fn custom_template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    /// Returns the custom code, if set.
    pub fn custom_code(&self) -> Option<&'static str> {
        self.code
    }

    /// Extracts the inner rule.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<T, V, R> Rule<T, V> for WithMessage<R>
where
    T: ?Sized,
    V: ?Sized,
    R: Rule<T, V>,
{
    fn validate(&self, state: &mut ValidationState<'_, T>, candidate: &V) -> bool {
        self.inner.validate(state, candidate)
    }

    fn template_message(&self) -> Template {
        self.template
            .clone()
            .unwrap_or_else(|| self.inner.template_message())
    }

    fn code(&self) -> &'static str {
        self.code.unwrap_or_else(|| self.inner.code())
    }
}

/// Creates a [`WithMessage`] wrapper.
pub fn with_message<R>(rule: R, template: impl Into<Template>) -> WithMessage<R> {
    WithMessage::new(rule, template)
}

/// Creates a wrapper that overrides only the error code.
pub fn with_code<R>(rule: R, code: &'static str) -> WithMessage<R> {
    WithMessage::code_only(rule, code)
}

// ============================================================================
// TESTS
// ============================================================================
