use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use crate::{
    chain::{Fields, Zip},
    list::Tuple,
    resolve::Resolve,
};

/// How an identifier list lays out a tuple of value types.
///
/// Implemented for every identifier list `Keys` and tuple `Types` of the same
/// length; for anything else the record type does not exist.
#[diagnostic::on_unimplemented(
    message = "the identifier list and the type list have different lengths",
    label = "every identifier needs exactly one type"
)]
pub trait Layout<Types> {
    type Chain;

    fn build(values: Types) -> Self::Chain;

    fn split(chain: Self::Chain) -> Types;
}

impl<Keys, Types> Layout<Types> for Keys
where
    Types: Tuple,
    Keys: Zip<Types::List>,
{
    type Chain = <Keys as Zip<Types::List>>::Chain;

    #[inline]
    fn build(values: Types) -> Self::Chain {
        Keys::zip(values.into_list())
    }

    #[inline]
    fn split(chain: Self::Chain) -> Types {
        Types::from_list(Keys::unzip(chain))
    }
}

/// A record of `Types` whose fields are named by the identifiers in `Keys`.
///
/// ```
/// use keys_tuple::{key, keys, KeysTuple};
///
/// type KeyHello = key!("keyHello");
/// type KeyInt = key!("keyInt");
///
/// let mut foo: KeysTuple<keys!["keyHello", "keyInt"], (String, i32)> =
///     KeysTuple::new(("Hello world".to_string(), 42));
///
/// assert_eq!(foo.get::<KeyHello>(), "Hello world");
/// assert_eq!(*foo.get::<KeyInt>(), 42);
///
/// foo.set::<KeyInt>(43);
/// assert_eq!(*foo.get::<KeyInt>(), 43);
/// assert_eq!(foo.get::<KeyHello>(), "Hello world");
/// ```
pub struct KeysTuple<Keys, Types>
where
    Keys: Layout<Types>,
{
    chain: Keys::Chain,
    marker: PhantomData<fn() -> (Keys, Types)>,
}

impl<Keys, Types> KeysTuple<Keys, Types>
where
    Keys: Layout<Types>,
{
    /// Builds a record from one value per identifier, in identifier order.
    #[inline]
    pub fn new(values: Types) -> Self {
        Self::from_chain(Keys::build(values))
    }

    #[inline]
    fn from_chain(chain: Keys::Chain) -> Self {
        Self {
            chain,
            marker: PhantomData,
        }
    }

    /// Returns the value stored under `Id`.
    #[inline(always)]
    pub fn get<Id>(&self) -> &<Keys::Chain as Resolve<Id>>::Value
    where
        Keys::Chain: Resolve<Id>,
    {
        Resolve::<Id>::get(&self.chain)
    }

    /// Replaces the value stored under `Id`.
    #[inline(always)]
    pub fn set<Id>(&mut self, value: <Keys::Chain as Resolve<Id>>::Value)
    where
        Keys::Chain: Resolve<Id>,
    {
        Resolve::<Id>::set(&mut self.chain, value);
    }

    /// Consumes the record and returns its current values in identifier
    /// order.
    pub fn into_values(self) -> Types {
        Keys::split(self.chain)
    }
}

impl<Keys, Types> From<Types> for KeysTuple<Keys, Types>
where
    Keys: Layout<Types>,
{
    fn from(values: Types) -> Self {
        Self::new(values)
    }
}

impl<Keys, Types> Default for KeysTuple<Keys, Types>
where
    Keys: Layout<Types>,
    Keys::Chain: Default,
{
    fn default() -> Self {
        Self::from_chain(Default::default())
    }
}

impl<Keys, Types> Clone for KeysTuple<Keys, Types>
where
    Keys: Layout<Types>,
    Keys::Chain: Clone,
{
    fn clone(&self) -> Self {
        Self::from_chain(self.chain.clone())
    }
}

impl<Keys, Types> PartialEq for KeysTuple<Keys, Types>
where
    Keys: Layout<Types>,
    Keys::Chain: PartialEq,
{
    fn eq(&self, rhs: &Self) -> bool {
        self.chain == rhs.chain
    }
}

impl<Keys, Types> Eq for KeysTuple<Keys, Types>
where
    Keys: Layout<Types>,
    Keys::Chain: Eq,
{
}

impl<Keys, Types> Hash for KeysTuple<Keys, Types>
where
    Keys: Layout<Types>,
    Keys::Chain: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain.hash(state);
    }
}

impl<Keys, Types> fmt::Debug for KeysTuple<Keys, Types>
where
    Keys: Layout<Types>,
    Keys::Chain: Fields,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        self.chain.debug_entries(&mut map);
        map.finish()
    }
}
