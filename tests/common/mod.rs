//! Identifiers and helpers shared by the record tests

#![allow(dead_code)]

use keys_tuple::{key, keys, KeysTuple};

pub type KeyHello = key!("keyHello");
pub type KeyTime = key!("keyTime");
pub type KeyInt = key!("keyInt");

pub type Greeting = KeysTuple<keys!["keyHello", "keyInt"], (String, i32)>;

pub type Timed = KeysTuple<keys!["keyHello", "keyTime", "keyInt"], (String, u128, i32)>;

/// Asserts the value behind every listed identifier.
macro_rules! assert_slots {
    ($record:expr, { $($key:ty => $expected:expr),* $(,)? }) => {
        $(
            assert_eq!(
                *$record.get::<$key>(),
                $expected,
                "slot {}",
                <$key as ::keys_tuple::Identifier>::name(),
            );
        )*
    };
}

pub(crate) use assert_slots;
