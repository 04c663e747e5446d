//! Record storage: one [`Slot`] per identifier, nested down to [`End`].

use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use crate::{
    key::Identifier,
    list::{Cons, Nil},
};

/// The empty record.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct End;

/// The storage for identifier `K`, holding a `V`, followed by the slots for
/// the remaining identifiers.
pub struct Slot<K, V, Tail> {
    pub(crate) value: V,
    /// Copy of the value the slot was constructed with. Never read back by
    /// get or set.
    pub(crate) default: V,
    pub(crate) tail: Tail,
    key: PhantomData<K>,
}

impl<K, V, Tail> Slot<K, V, Tail>
where
    V: Clone,
{
    #[inline]
    pub(crate) fn new(value: V, tail: Tail) -> Self {
        Self {
            default: value.clone(),
            value,
            tail,
            key: PhantomData,
        }
    }
}

impl<K, V, Tail> Default for Slot<K, V, Tail>
where
    V: Default + Clone,
    Tail: Default,
{
    fn default() -> Self {
        Self::new(V::default(), Tail::default())
    }
}

impl<K, V, Tail> Clone for Slot<K, V, Tail>
where
    V: Clone,
    Tail: Clone,
{
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            default: self.default.clone(),
            tail: self.tail.clone(),
            key: PhantomData,
        }
    }
}

// Equality and hashing only look at live values.

impl<K, V, Tail> PartialEq for Slot<K, V, Tail>
where
    V: PartialEq,
    Tail: PartialEq,
{
    fn eq(&self, rhs: &Self) -> bool {
        self.value == rhs.value && self.tail == rhs.tail
    }
}

impl<K, V, Tail> Eq for Slot<K, V, Tail>
where
    V: Eq,
    Tail: Eq,
{
}

impl<K, V, Tail> Hash for Slot<K, V, Tail>
where
    V: Hash,
    Tail: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.tail.hash(state);
    }
}

/// Writes every slot as a `name: value` entry.
pub trait Fields {
    fn debug_entries(&self, map: &mut fmt::DebugMap<'_, '_>);
}

impl Fields for End {
    fn debug_entries(&self, _map: &mut fmt::DebugMap<'_, '_>) {}
}

impl<K, V, Tail> Fields for Slot<K, V, Tail>
where
    K: Identifier,
    V: fmt::Debug,
    Tail: Fields,
{
    fn debug_entries(&self, map: &mut fmt::DebugMap<'_, '_>) {
        map.entry(&K::name(), &self.value);
        self.tail.debug_entries(map);
    }
}

impl<K, V, Tail> fmt::Debug for Slot<K, V, Tail>
where
    Self: Fields,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        self.debug_entries(&mut map);
        map.finish()
    }
}

/// Pairs an identifier list with a value list of the same length.
///
/// Only implemented when both lists run out together, so a record whose
/// identifiers and types differ in number is never built.
#[diagnostic::on_unimplemented(
    message = "the identifier list and the type list have different lengths",
    label = "every identifier needs exactly one type"
)]
pub trait Zip<Values> {
    type Chain;

    fn zip(values: Values) -> Self::Chain;

    fn unzip(chain: Self::Chain) -> Values;
}

impl Zip<Nil> for Nil {
    type Chain = End;

    #[inline]
    fn zip(_values: Nil) -> End {
        End
    }

    #[inline]
    fn unzip(_chain: End) -> Nil {
        Nil
    }
}

impl<K, Keys, V, Values> Zip<Cons<V, Values>> for Cons<K, Keys>
where
    V: Clone,
    Keys: Zip<Values>,
{
    type Chain = Slot<K, V, Keys::Chain>;

    #[inline]
    fn zip(values: Cons<V, Values>) -> Self::Chain {
        Slot::new(values.head, Keys::zip(values.tail))
    }

    #[inline]
    fn unzip(chain: Self::Chain) -> Cons<V, Values> {
        Cons {
            head: chain.value,
            tail: Keys::unzip(chain.tail),
        }
    }
}
