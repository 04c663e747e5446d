//! Heterogeneous records whose fields are named by compile-time strings.
//!
//! A [`KeysTuple`] is defined by an identifier list and a tuple of value
//! types. Every `get`/`set` names its field with an identifier type made by
//! [`key!`]; the identifier is matched against the list while type checking,
//! so the compiled access is the same as reading a struct field.
//!
//! ```
//! use keys_tuple::{key, keys, KeysTuple};
//!
//! type KeyHello = key!("keyHello");
//! type KeyTime = key!("keyTime");
//! type KeyInt = key!("keyInt");
//!
//! type Foo = KeysTuple<keys!["keyHello", "keyTime", "keyInt"], (String, u64, i32)>;
//!
//! let mut foo = Foo::new(("string".to_string(), 1_700_000_000, 42));
//! foo.set::<KeyHello>("Hello world!!!".to_string());
//! foo.set::<KeyInt>(43);
//!
//! assert_eq!(foo.get::<KeyHello>(), "Hello world!!!");
//! assert_eq!(*foo.get::<KeyTime>(), 1_700_000_000);
//! assert_eq!(*foo.get::<KeyInt>(), 43);
//!
//! let empty = Foo::default();
//! assert_eq!(*empty.get::<KeyInt>(), 0);
//! ```
//!
//! Identifiers and types must pair up:
//!
//! ```compile_fail
//! use keys_tuple::{keys, KeysTuple};
//!
//! let foo: KeysTuple<keys!["a", "b", "c"], (i32, i32)> = KeysTuple::default();
//! ```
//!
//! Asking for an identifier the record does not have is a compile error:
//!
//! ```compile_fail
//! use keys_tuple::{key, keys, KeysTuple};
//!
//! let foo: KeysTuple<keys!["keyHello", "keyInt"], (String, i32)> = KeysTuple::default();
//! foo.get::<key!("key_failure")>();
//! ```
//!
//! ```compile_fail
//! use keys_tuple::{key, keys, KeysTuple};
//!
//! let mut foo: KeysTuple<keys!["keyHello", "keyInt"], (String, i32)> = KeysTuple::default();
//! foo.set::<key!("key_failure")>(1);
//! ```
//!
//! So is storing a value of the wrong type:
//!
//! ```compile_fail
//! use keys_tuple::{key, keys, KeysTuple};
//!
//! let mut foo: KeysTuple<keys!["keyHello", "keyInt"], (String, i32)> = KeysTuple::default();
//! foo.set::<key!("keyInt")>("forty-three".to_string());
//! ```
//!
//! Or constructing with the wrong number of values:
//!
//! ```compile_fail
//! use keys_tuple::{keys, KeysTuple};
//!
//! let foo = KeysTuple::<keys!["keyHello", "keyInt"], (String, i32)>::new(("Hello".to_string(),));
//! ```
//!
//! Identifiers must be string literals:
//!
//! ```compile_fail
//! type KeyInt = keys_tuple::key!(keyInt);
//! ```

extern crate self as keys_tuple;

pub mod bit;
pub mod chain;
pub mod key;
pub mod list;
pub mod record;
pub mod resolve;

pub use bit::{Bit, False, IsSame, Same, True};
pub use chain::{End, Slot, Zip};
pub use key::{Identifier, Key};
pub use keys_tuple_macros::{key, keys};
pub use list::{Cons, Nil, Tuple};
pub use record::{KeysTuple, Layout};
pub use resolve::Resolve;
