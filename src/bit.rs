//! Type-level booleans and equality.

/// Type-level `true`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct True;

/// Type-level `false`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct False;

pub trait Bit {
    const VALUE: bool;
}

impl Bit for True {
    const VALUE: bool = true;
}

impl Bit for False {
    const VALUE: bool = false;
}

pub trait And<Rhs: Bit>: Bit {
    type Output: Bit;
}

impl<Rhs: Bit> And<Rhs> for True {
    type Output = Rhs;
}

impl<Rhs: Bit> And<Rhs> for False {
    type Output = False;
}

/// Equality decided by the type checker. `Output` is [`True`] when `Self` and
/// `Rhs` denote the same value and [`False`] otherwise.
///
/// Implemented for bits, for cons lists of comparable elements, and for
/// identifiers.
pub trait Same<Rhs> {
    type Output: Bit;
}

/// Shorthand for the result of comparing `A` with `B`.
pub type IsSame<A, B> = <A as Same<B>>::Output;

impl Same<True> for True {
    type Output = True;
}

impl Same<False> for True {
    type Output = False;
}

impl Same<True> for False {
    type Output = False;
}

impl Same<False> for False {
    type Output = True;
}
