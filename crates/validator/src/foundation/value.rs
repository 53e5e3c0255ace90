//! Values that can be substituted into a message template
//!
//! Placeholder values are stored type-erased so that one
//! [`MessageConstructor`](crate::foundation::MessageConstructor) can hold a
//! `String` attribute name next to, say, a `Vec<Order>` comparison operand.
//! [`MessageValue`] is the bound every stored value satisfies: it can be
//! rendered into message text, and it is `Any` so tests and callers can get
//! the exact typed value back out.
//!
//! Scalars render through `Display`. Containers render their elements
//! through `MessageValue` again:
//!
//! | Kind | Rendering |
//! |------|-----------|
//! | sequences (`Vec`, arrays, `VecDeque`) | `[a, b]` |
//! | tuples | `(a, b)` |
//! | maps | `{k: v, k2: v2}` |
//! | sets | `{a, b}` |
//! | `Option` | inner value, or `none` |

use std::any::Any;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;

use indexmap::IndexMap;

// ============================================================================
// MESSAGE VALUE TRAIT
// ============================================================================

/// A value that can fill a template placeholder.
///
/// Implement this for your own types to use them as rule operands:
///
/// ```
/// use std::fmt;
/// use assay_validator::foundation::MessageValue;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Sku(u32);
///
/// impl MessageValue for Sku {
///     fn fmt_message(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "SKU-{:05}", self.0)
///     }
/// }
///
/// assert_eq!(Sku(42).to_message(), "SKU-00042");
/// ```
pub trait MessageValue: Any + Send + Sync {
    /// Writes the message form of this value.
    fn fmt_message(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Returns the message form of this value as a `String`.
    fn to_message(&self) -> String {
        Rendered(self).to_string()
    }
}

/// Adapts a [`MessageValue`] to `Display`.
struct Rendered<'a, T: ?Sized>(&'a T);

impl<T: MessageValue + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_message(f)
    }
}

fn fmt_joined<'a>(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    close: &str,
    items: impl Iterator<Item = &'a dyn MessageValue>,
) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item.fmt_message(f)?;
    }
    f.write_str(close)
}

fn fmt_entries<'a>(
    f: &mut fmt::Formatter<'_>,
    entries: impl Iterator<Item = (&'a dyn MessageValue, &'a dyn MessageValue)>,
) -> fmt::Result {
    f.write_str("{")?;
    for (i, (key, value)) in entries.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        key.fmt_message(f)?;
        f.write_str(": ")?;
        value.fmt_message(f)?;
    }
    f.write_str("}")
}

// ============================================================================
// SCALARS
// ============================================================================

macro_rules! display_message_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl MessageValue for $ty {
                #[inline]
                fn fmt_message(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}

display_message_value!(
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    bool,
    char,
    String,
    &'static str,
    Cow<'static, str>,
);

impl<T: MessageValue> MessageValue for Option<T> {
    fn fmt_message(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.fmt_message(f),
            None => f.write_str("none"),
        }
    }
}

#[cfg(feature = "complex")]
impl<T> MessageValue for num_complex::Complex<T>
where
    T: Send + Sync + 'static,
    num_complex::Complex<T>: fmt::Display,
{
    fn fmt_message(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// ============================================================================
// SEQUENCES AND TUPLES
// ============================================================================

impl<T: MessageValue> MessageValue for Vec<T> {
    fn fmt_message(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_joined(f, "[", "]", self.iter().map(|v| v as &dyn MessageValue))
    }
}

impl<T: MessageValue, const N: usize> MessageValue for [T; N] {
    fn fmt_message(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_joined(f, "[", "]", self.iter().map(|v| v as &dyn MessageValue))
    }
}

impl<T: MessageValue> MessageValue for VecDeque<T> {
    fn fmt_message(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_joined(f, "[", "]", self.iter().map(|v| v as &dyn MessageValue))
    }
}

macro_rules! tuple_message_value {
    ($($name:ident),+) => {
        impl<$($name: MessageValue),+> MessageValue for ($($name,)+) {
            #[allow(non_snake_case)]
            fn fmt_message(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let ($($name,)+) = self;
                let items: &[&dyn MessageValue] = &[$($name as &dyn MessageValue),+];
                fmt_joined(f, "(", ")", items.iter().copied())
            }
        }
    };
}

tuple_message_value!(A);
tuple_message_value!(A, B);
tuple_message_value!(A, B, C);
tuple_message_value!(A, B, C, D);
tuple_message_value!(A, B, C, D, E);
tuple_message_value!(A, B, C, D, E, F);

// ============================================================================
// MAPS AND SETS
// ============================================================================

impl<K, V, S> MessageValue for HashMap<K, V, S>
where
    K: MessageValue,
    V: MessageValue,
    S: Send + Sync + 'static,
{
    fn fmt_message(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_entries(
            f,
            self.iter()
                .map(|(k, v)| (k as &dyn MessageValue, v as &dyn MessageValue)),
        )
    }
}

impl<K: MessageValue, V: MessageValue> MessageValue for BTreeMap<K, V> {
    fn fmt_message(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_entries(
            f,
            self.iter()
                .map(|(k, v)| (k as &dyn MessageValue, v as &dyn MessageValue)),
        )
    }
}

impl<K, V, S> MessageValue for IndexMap<K, V, S>
where
    K: MessageValue,
    V: MessageValue,
    S: Send + Sync + 'static,
{
    fn fmt_message(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_entries(
            f,
            self.iter()
                .map(|(k, v)| (k as &dyn MessageValue, v as &dyn MessageValue)),
        )
    }
}

impl<T, S> MessageValue for HashSet<T, S>
where
    T: MessageValue,
    S: Send + Sync + 'static,
{
    fn fmt_message(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_joined(f, "{", "}", self.iter().map(|v| v as &dyn MessageValue))
    }
}

impl<T: MessageValue> MessageValue for BTreeSet<T> {
    fn fmt_message(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_joined(f, "{", "}", self.iter().map(|v| v as &dyn MessageValue))
    }
}

// ============================================================================
// TESTS
// ============================================================================
