//! Identifier to slot resolution.
//!
//! [`Resolve`] walks the chain one slot at a time during type checking: the
//! requested identifier is compared with the slot's identifier under
//! [`Same`], and [`Branch`] either stops at this slot or defers to the tail.
//! Nothing of the walk survives to runtime; a resolved `get` is a field
//! access at a fixed offset.
//!
//! [`End`](crate::chain::End) has no impl, so an identifier missing from the
//! record is a compile error. When an identifier appears twice, the walk
//! stops at the first occurrence and the later slot is shadowed.

use crate::{
    bit::{False, IsSame, Same, True},
    chain::Slot,
};

#[diagnostic::on_unimplemented(
    message = "`{Id}` is not an identifier of this record",
    label = "unknown identifier"
)]
pub trait Resolve<Id> {
    type Value;

    fn get(&self) -> &Self::Value;

    fn set(&mut self, value: Self::Value);
}

/// One step of the walk. `Hit` is the outcome of comparing `Id` with the
/// slot's own identifier.
pub trait Branch<Id, Hit> {
    type Value;

    fn get(&self) -> &Self::Value;

    fn set(&mut self, value: Self::Value);
}

impl<Id, K, V, Tail> Branch<Id, True> for Slot<K, V, Tail> {
    type Value = V;

    #[inline(always)]
    fn get(&self) -> &V {
        &self.value
    }

    #[inline(always)]
    fn set(&mut self, value: V) {
        self.value = value;
    }
}

impl<Id, K, V, Tail> Branch<Id, False> for Slot<K, V, Tail>
where
    Tail: Resolve<Id>,
{
    type Value = Tail::Value;

    #[inline(always)]
    fn get(&self) -> &Tail::Value {
        self.tail.get()
    }

    #[inline(always)]
    fn set(&mut self, value: Tail::Value) {
        self.tail.set(value);
    }
}

impl<Id, K, V, Tail> Resolve<Id> for Slot<K, V, Tail>
where
    Id: Same<K>,
    Self: Branch<Id, IsSame<Id, K>>,
{
    type Value = <Self as Branch<Id, IsSame<Id, K>>>::Value;

    #[inline(always)]
    fn get(&self) -> &Self::Value {
        <Self as Branch<Id, IsSame<Id, K>>>::get(self)
    }

    #[inline(always)]
    fn set(&mut self, value: Self::Value) {
        <Self as Branch<Id, IsSame<Id, K>>>::set(self, value);
    }
}
