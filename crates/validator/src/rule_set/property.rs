//! PROPERTY - an attribute chain paired with the accessor that follows it

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::AttributeChain;

/// A named path into `T` that resolves to a `&V`.
///
/// Usually built with [`property!`](crate::property), which derives the
/// chain and the accessor from one expression so they cannot disagree.
///
/// # Type Parameters
///
/// * `T` - The root object type
/// * `V` - The attribute type (can be `?Sized`)
/// * `F` - The accessor function type
pub struct Property<T, V, F>
where
    T: ?Sized,
    V: ?Sized,
{
    chain: AttributeChain,
    accessor: F,
    _phantom: PhantomData<fn(&T) -> &V>,
}

impl<T, V, F> Property<T, V, F>
where
    T: ?Sized,
    V: ?Sized,
    F: Fn(&T) -> &V,
{
    /// Pairs a chain with an accessor.
    ///
    /// The caller is responsible for the two agreeing; prefer
    /// [`property!`](crate::property).
    pub fn new(chain: AttributeChain, accessor: F) -> Self {
        Self {
            chain,
            accessor,
            _phantom: PhantomData,
        }
    }

    /// Follows the accessor into `object`.
    pub fn resolve<'a>(&self, object: &'a T) -> &'a V {
        (self.accessor)(object)
    }
}

impl<T, V, F> Property<T, V, F>
where
    T: ?Sized,
    V: ?Sized,
{
    /// Returns the attribute chain.
    pub fn chain(&self) -> &AttributeChain {
        &self.chain
    }

    /// Extracts the chain and accessor.
    pub fn into_parts(self) -> (AttributeChain, F) {
        (self.chain, self.accessor)
    }
}

// Manual because F might not derive Clone
impl<T, V, F> Clone for Property<T, V, F>
where
    T: ?Sized,
    V: ?Sized,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            chain: self.chain.clone(),
            accessor: self.accessor.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, V, F> fmt::Debug for Property<T, V, F>
where
    T: ?Sized,
    V: ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("chain", &self.chain)
            .field("accessor", &"<function>")
            .finish()
    }
}
