//! Identifiers: string literals lifted into types.
//!
//! `key!("keyInt")` expands to `Key<S>` where `S` lists the UTF-8 bytes of
//! `"keyInt"`, each byte itself a list of eight bits. Two identifiers are the
//! same type, and compare [`True`](crate::True) under [`Same`], exactly when
//! their strings are byte-equal.
//!
//! Comparison recurses once per byte, so very long identifiers may run into
//! the compiler's recursion limit.

use std::marker::PhantomData;

use crate::{
    bit::{Bit, Same},
    list::{Cons, Nil},
};

/// An identifier. Never instantiated.
pub struct Key<S>(PhantomData<S>);

impl<A, B> Same<Key<B>> for Key<A>
where
    A: Same<B>,
{
    type Output = A::Output;
}

pub trait Identifier {
    /// Decodes the string this identifier was made from.
    fn name() -> String;
}

impl<S> Identifier for Key<S>
where
    S: Text,
{
    fn name() -> String {
        let mut bytes = Vec::new();
        S::push_bytes(&mut bytes);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

/// A list of bits read as an unsigned number, most significant bit first.
pub trait Bits {
    const WIDTH: u32;
    const VALUE: u32;
}

impl Bits for Nil {
    const WIDTH: u32 = 0;
    const VALUE: u32 = 0;
}

impl<H, T> Bits for Cons<H, T>
where
    H: Bit,
    T: Bits,
{
    const WIDTH: u32 = T::WIDTH + 1;
    const VALUE: u32 = ((H::VALUE as u32) << T::WIDTH) | T::VALUE;
}

/// A list of bytes.
pub trait Text {
    fn push_bytes(out: &mut Vec<u8>);
}

impl Text for Nil {
    fn push_bytes(_out: &mut Vec<u8>) {}
}

impl<H, T> Text for Cons<H, T>
where
    H: Bits,
    T: Text,
{
    fn push_bytes(out: &mut Vec<u8>) {
        out.push(H::VALUE as u8);
        T::push_bytes(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bit::IsSame, key};

    fn same<A, B>() -> bool
    where
        A: Same<B>,
    {
        <IsSame<A, B> as Bit>::VALUE
    }

    #[test]
    fn names_decode() {
        assert_eq!(<key!("keyHello")>::name(), "keyHello");
        assert_eq!(<key!("")>::name(), "");
        assert_eq!(<key!("clé→値")>::name(), "clé→値");
    }

    #[test]
    fn equal_strings_are_same() {
        assert!(same::<key!("keyInt"), key!("keyInt")>());
        assert!(same::<key!(""), key!("")>());
    }

    #[test]
    fn different_strings_are_not_same() {
        assert!(!same::<key!("keyInt"), key!("keyTime")>());
        assert!(!same::<key!("keyInt"), key!("keyint")>());
        // Prefixes differ only in length.
        assert!(!same::<key!("key"), key!("keyInt")>());
        assert!(!same::<key!("keyInt"), key!("key")>());
        assert!(!same::<key!(""), key!("a")>());
    }

    #[test]
    fn byte_values() {
        use crate::{False as O, True as I};

        type A = Cons<O, Cons<I, Cons<O, Cons<O, Cons<O, Cons<O, Cons<O, Cons<I, Nil>>>>>>>>;
        assert_eq!(<A as Bits>::WIDTH, 8);
        assert_eq!(<A as Bits>::VALUE, u32::from(b'A'));
    }
}
