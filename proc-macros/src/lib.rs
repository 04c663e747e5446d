use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, punctuated::Punctuated, LitStr, Token};

/// Expands a string literal into the identifier type naming it.
///
/// Each UTF-8 byte of the literal becomes a list of eight type-level bits,
/// most significant first, so two `key!` invocations produce the same type
/// exactly when their strings are equal.
#[proc_macro]
pub fn key(input: TokenStream) -> TokenStream {
    let name = parse_macro_input!(input as LitStr);
    key_type(&name.value()).into()
}

/// Expands a comma separated list of string literals into an identifier list.
#[proc_macro]
pub fn keys(input: TokenStream) -> TokenStream {
    let names = parse_macro_input!(input with Punctuated::<LitStr, Token![,]>::parse_terminated);
    names
        .iter()
        .map(|name| key_type(&name.value()))
        .rev()
        .fold(nil(), cons)
        .into()
}

fn key_type(name: &str) -> TokenStream2 {
    let bytes = name.bytes().rev().map(byte_type).fold(nil(), cons);
    quote! { ::keys_tuple::Key<#bytes> }
}

fn byte_type(byte: u8) -> TokenStream2 {
    // Folding from the low bit outwards leaves bit 7 at the head.
    (0..8)
        .map(|bit| {
            if (byte >> bit) & 1 == 1 {
                quote! { ::keys_tuple::True }
            } else {
                quote! { ::keys_tuple::False }
            }
        })
        .fold(nil(), cons)
}

fn cons(tail: TokenStream2, head: TokenStream2) -> TokenStream2 {
    quote! { ::keys_tuple::Cons<#head, #tail> }
}

fn nil() -> TokenStream2 {
    quote! { ::keys_tuple::Nil }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_bits_are_most_significant_first() {
        // 'A' = 0b0100_0001
        let expected = quote! {
            ::keys_tuple::Cons<::keys_tuple::False,
            ::keys_tuple::Cons<::keys_tuple::True,
            ::keys_tuple::Cons<::keys_tuple::False,
            ::keys_tuple::Cons<::keys_tuple::False,
            ::keys_tuple::Cons<::keys_tuple::False,
            ::keys_tuple::Cons<::keys_tuple::False,
            ::keys_tuple::Cons<::keys_tuple::False,
            ::keys_tuple::Cons<::keys_tuple::True,
            ::keys_tuple::Nil>>>>>>>>
        };
        assert_eq!(byte_type(b'A').to_string(), expected.to_string());
    }

    #[test]
    fn empty_key_is_an_empty_byte_list() {
        let expected = quote! { ::keys_tuple::Key<::keys_tuple::Nil> };
        assert_eq!(key_type("").to_string(), expected.to_string());
    }

    #[test]
    fn key_bytes_keep_their_order() {
        let a = byte_type(b'a');
        let b = byte_type(b'b');
        let expected = quote! {
            ::keys_tuple::Key<::keys_tuple::Cons<#a, ::keys_tuple::Cons<#b, ::keys_tuple::Nil>>>
        };
        assert_eq!(key_type("ab").to_string(), expected.to_string());
    }

    #[test]
    fn distinct_strings_expand_differently() {
        assert_ne!(key_type("keyInt").to_string(), key_type("keyInT").to_string());
        assert_ne!(key_type("key").to_string(), key_type("keyInt").to_string());
        assert_eq!(key_type("keyInt").to_string(), key_type("keyInt").to_string());
    }
}
