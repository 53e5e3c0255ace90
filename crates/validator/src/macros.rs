//! Macros for declaring rules and deriving attribute chains.
//!
//! # Available Macros
//!
//! - [`rule!`]: Create a comparison rule (struct + `Rule` impl + factory fn)
//! - [`attribute_chain!`]: Derive an [`AttributeChain`] from a field-access expression
//! - [`property!`]: Derive a chain and a matching accessor from the same expression
//!
//! # Examples
//!
//! ```
//! use assay_validator::{attribute_chain, property};
//!
//! struct Currency { code: String }
//! struct Product { currency: Currency }
//!
//! // Untyped: names only.
//! let chain = attribute_chain!(|x| x.currency.code);
//! assert_eq!(chain.to_string(), "currency.code");
//!
//! // Typed: the path is checked against `Product` at compile time.
//! let chain = attribute_chain!(|x: Product| x.currency.code);
//! assert_eq!(chain.len(), 2);
//!
//! // Chain plus accessor.
//! let code = property!(|x: Product| x.currency.code);
//! let product = Product { currency: Currency { code: "EUR".into() } };
//! assert_eq!(code.resolve(&product), "EUR");
//! ```
//!
//! [`AttributeChain`]: crate::foundation::AttributeChain

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a comparison rule: struct definition, inherent constants,
/// a generic [`Rule`](crate::foundation::Rule) implementation and a
/// factory function.
///
/// `#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]` is always applied;
/// each derive only holds when the operand type supports it.
///
/// The generated rule implements `Rule<T, C>` for every object type `T`
/// and every candidate type `C` that compares against the operand through
/// `$bound` (`PartialEq` or `PartialOrd`). On failure it stores a clone of
/// the operand under `comparison_value`.
///
/// ```rust,ignore
/// rule! {
///     /// Fails when the candidate equals the operand.
///     pub NotEqual<V> { comparison_value } where C: PartialEq;
///     code: "not_equal";
///     template: "'$attribute_name' must not be equal to '$comparison_value'";
///     rule(self, candidate) { *candidate != self.comparison_value }
///     fn not_equal(value: V);
/// }
/// ```
#[macro_export]
macro_rules! rule {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident> { $field:ident } where $cand:ident: $bound:ident;
        code: $code:literal;
        template: $template:literal;
        rule($self_:ident, $inp:ident) $rule:block
        fn $factory:ident($farg:ident: $faty:ty);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis struct $name<$gen> {
            /// The operand every candidate is compared against.
            pub $field: $gen,
        }

        impl<$gen> $name<$gen> {
            /// Error code reported when this rule fails.
            pub const CODE: &'static str = $code;

            /// Default failure message template.
            pub const TEMPLATE: &'static str = $template;

            /// Creates the rule with its comparison operand.
            #[must_use]
            pub const fn new($field: $gen) -> Self {
                Self { $field }
            }

            /// Returns the comparison operand.
            pub const fn operand(&self) -> &$gen {
                &self.$field
            }

            /// Returns the default failure message template.
            #[must_use]
            pub fn template_message(&self) -> $crate::foundation::Template {
                $crate::foundation::Template::new(Self::TEMPLATE)
            }

            /// Returns the error code.
            #[must_use]
            pub const fn code(&self) -> &'static str {
                Self::CODE
            }
        }

        impl<T, $cand, $gen> $crate::foundation::Rule<T, $cand> for $name<$gen>
        where
            T: ?Sized,
            $cand: $bound<$gen> + ?Sized,
            $gen: $crate::foundation::MessageValue + Clone,
        {
            fn validate(
                &$self_,
                state: &mut $crate::foundation::ValidationState<'_, T>,
                $inp: &$cand,
            ) -> bool {
                if $rule {
                    true
                } else {
                    state.message_constructor_mut().insert_placeholder(
                        $crate::foundation::COMPARISON_VALUE,
                        $self_.$field.clone(),
                    );
                    false
                }
            }

            fn template_message(&self) -> $crate::foundation::Template {
                $name::template_message(self)
            }

            fn code(&self) -> &'static str {
                Self::CODE
            }
        }

        #[must_use]
        $vis const fn $factory<$gen>($farg: $faty) -> $name<$gen> {
            $name::new($farg)
        }
    };
}

// ============================================================================
// ATTRIBUTE CHAIN MACRO
// ============================================================================

/// Derives an [`AttributeChain`](crate::foundation::AttributeChain) from a
/// field-access expression without evaluating it.
///
/// The expression must be a closure whose body is its parameter followed by
/// zero or more `.field` steps. With a type ascription (`|x: Product| ...`)
/// the path is also type-checked against that type.
///
/// Anything else is rejected at compile time. Method calls:
///
/// ```compile_fail
/// use assay_validator::attribute_chain;
/// let chain = attribute_chain!(|x| x.name.to_lowercase());
/// ```
///
/// Indexing:
///
/// ```compile_fail
/// use assay_validator::attribute_chain;
/// let chain = attribute_chain!(|x| x.orders[0].total);
/// ```
///
/// Paths that do not exist on the ascribed type:
///
/// ```compile_fail
/// use assay_validator::attribute_chain;
/// struct Product { name: String }
/// let chain = attribute_chain!(|x: Product| x.title);
/// ```
///
/// Paths that do not start at the closure parameter, even when the root
/// names a local in scope:
///
/// ```compile_fail
/// use assay_validator::attribute_chain;
/// struct Inner { name: String }
/// struct Product { inner: Inner }
/// let y = Product { inner: Inner { name: "Widget".into() } };
/// let chain = attribute_chain!(|x| y.inner.name);
/// ```
///
/// ```compile_fail
/// use assay_validator::attribute_chain;
/// struct Inner { name: String }
/// struct Product { inner: Inner }
/// let y = Product { inner: Inner { name: "Widget".into() } };
/// let chain = attribute_chain!(|x: Product| y.inner.name);
/// ```
#[macro_export]
macro_rules! attribute_chain {
    // The check is a nested fn item so it cannot capture surrounding locals.
    (|$param:ident : $ty:ty| $root:ident $(. $part:ident)*) => {{
        #[allow(dead_code)]
        fn __attribute_chain_check($param: &$ty) {
            let _ = &$root $(. $part)*;
        }
        $crate::foundation::AttributeChain::from_static(&[$(stringify!($part)),*])
    }};
    (|$param:ident| $root:ident $(. $part:ident)*) => {{
        #[allow(dead_code)]
        fn __attribute_chain_check($param: &()) {
            let _ = &$root;
        }
        $crate::foundation::AttributeChain::from_static(&[$(stringify!($part)),*])
    }};
}

// ============================================================================
// PROPERTY MACRO
// ============================================================================

/// Derives a [`Property`](crate::rule_set::Property): the attribute chain
/// of a field-access expression plus an accessor that follows it.
///
/// A type ascription is required so the accessor can be generated. The path
/// goes through the same checks as [`attribute_chain!`], so an accessor
/// rooted at a captured local is rejected:
///
/// ```compile_fail
/// use assay_validator::property;
/// struct Order { total: u64 }
/// let other = Order { total: 3 };
/// let total = property!(|o: Order| other.total);
/// ```
///
/// ```
/// use assay_validator::property;
///
/// struct Order { total: u64 }
///
/// let total = property!(|o: Order| o.total);
/// assert_eq!(total.chain().to_string(), "total");
/// assert_eq!(*total.resolve(&Order { total: 12 }), 12);
/// ```
#[macro_export]
macro_rules! property {
    (|$param:ident : $ty:ty| $root:ident $(. $part:ident)+) => {
        $crate::rule_set::Property::new(
            $crate::attribute_chain!(|$param: $ty| $root $(. $part)+),
            |$param: &$ty| &$root $(. $part)+,
        )
    };
}

// ============================================================================
// TESTS
// ============================================================================
