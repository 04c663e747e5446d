//! Type-level cons lists.
//!
//! The same two types carry identifier lists (never instantiated), the bits
//! and bytes of an identifier, and the values handed to a record on
//! construction.

use crate::bit::{And, False, Same, True};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cons<H, T> {
    pub head: H,
    pub tail: T,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Nil;

impl Same<Nil> for Nil {
    type Output = True;
}

impl<H, T> Same<Cons<H, T>> for Nil {
    type Output = False;
}

impl<H, T> Same<Nil> for Cons<H, T> {
    type Output = False;
}

impl<H1, T1, H2, T2> Same<Cons<H2, T2>> for Cons<H1, T1>
where
    H1: Same<H2>,
    T1: Same<T2>,
    <H1 as Same<H2>>::Output: And<<T1 as Same<T2>>::Output>,
{
    type Output = <<H1 as Same<H2>>::Output as And<<T1 as Same<T2>>::Output>>::Output;
}

/// A tuple of values and the cons list holding the same values in order.
pub trait Tuple: Sized {
    type List;

    fn into_list(self) -> Self::List;

    fn from_list(list: Self::List) -> Self;
}

macro_rules! list_type {
    () => { Nil };
    ($head:ident $(, $tail:ident)*) => { Cons<$head, list_type!($($tail),*)> };
}

macro_rules! list_value {
    () => { Nil };
    ($head:ident $(, $tail:ident)*) => {
        Cons {
            head: $head,
            tail: list_value!($($tail),*),
        }
    };
}

macro_rules! impl_tuple {
    ($($name:ident),*) => {
        impl<$($name),*> Tuple for ($($name,)*) {
            type List = list_type!($($name),*);

            #[allow(non_snake_case)]
            #[inline]
            fn into_list(self) -> Self::List {
                let ($($name,)*) = self;
                list_value!($($name),*)
            }

            #[allow(non_snake_case)]
            #[inline]
            fn from_list(list: Self::List) -> Self {
                let list_value!($($name),*) = list;
                ($($name,)*)
            }
        }
    };
}

impl_tuple!();
impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
impl_tuple!(A, B, C, D, E);
impl_tuple!(A, B, C, D, E, F);
impl_tuple!(A, B, C, D, E, F, G);
impl_tuple!(A, B, C, D, E, F, G, H);
impl_tuple!(A, B, C, D, E, F, G, H, I);
impl_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
