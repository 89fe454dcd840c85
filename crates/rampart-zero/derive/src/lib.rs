// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Procedural macros for the `rampart_zero` crate.
//!
//! Provides `#[derive(RampartZero)]`, which wires a state struct into the
//! zeroization traits field by field.

#![warn(missing_docs)]

use proc_macro::TokenStream;
use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, Index, LitStr, Member, Type, parse_macro_input};

/// Derives `ZeroizeMetadata`, `FastZeroizable`, `ZeroizationProbe` and, when a
/// sentinel is present, `AssertZeroizeOnDrop`.
///
/// # Field rules
///
/// - Every field must implement `FastZeroizable` and `ZeroizationProbe`,
///   unless marked `#[fast_zeroize(skip)]`.
/// - A field named `__sentinel` (or, in tuple structs, a field of type
///   `ZeroizeOnDropSentinel`) is the drop sentinel. It is wiped last and
///   excluded from `is_zeroized()`.
/// - Reference fields are rejected.
///
/// # Struct attributes
///
/// - `#[fast_zeroize(drop)]` also generates a `Drop` impl calling
///   `fast_zeroize()`.
///
/// # Example
///
/// ```rust,ignore
/// use rampart_zero::{RampartZero, ZeroizeOnDropSentinel};
///
/// #[derive(RampartZero)]
/// #[fast_zeroize(drop)]
/// struct RoundKeys {
///     words: [u32; 60],
///     __sentinel: ZeroizeOnDropSentinel,
/// }
/// ```
#[proc_macro_derive(RampartZero, attributes(fast_zeroize))]
pub fn derive_rampart_zero(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input).unwrap_or_else(syn::Error::into_compile_error).into()
}

/// Resolves the path the generated code should use for the zeroization traits.
fn resolve_root() -> TokenStream2 {
    for candidate in ["rampart-zero-core", "rampart-zero", "rampart"] {
        match crate_name(candidate) {
            Ok(FoundCrate::Itself) => return quote!(crate),
            Ok(FoundCrate::Name(name)) => {
                let id = Ident::new(&name, Span::call_site());
                // The umbrella crate nests the traits under `zero`
                if candidate == "rampart" {
                    return quote!(::#id::zero);
                }
                return quote!(::#id);
            }
            Err(_) => continue,
        }
    }

    let lit = LitStr::new(
        "RampartZero: add rampart-zero (or rampart-zero-core) to Cargo.toml",
        Span::call_site(),
    );
    quote! { compile_error!(#lit); }
}

/// Returns `true` if any `#[fast_zeroize(...)]` attribute carries `flag`.
fn has_flag(attrs: &[Attribute], flag: &str) -> bool {
    attrs.iter().any(|attr| {
        if !attr.path().is_ident("fast_zeroize") {
            return false;
        }

        let mut found = false;
        // Unknown flags are ignored here; they only matter where they apply.
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(flag) {
                found = true;
            }
            Ok(())
        });
        found
    })
}

fn is_sentinel_type(ty: &Type) -> bool {
    match ty {
        Type::Path(path) => path
            .path
            .segments
            .last()
            .is_some_and(|seg| seg.ident == "ZeroizeOnDropSentinel"),
        _ => false,
    }
}

/// Per-field classification.
enum Role {
    Secret,
    Sentinel,
    Skipped,
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let root = resolve_root();

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "RampartZero can only be derived for structs",
            ));
        }
    };

    let mut secrets: Vec<Member> = Vec::new();
    let mut sentinel: Option<Member> = None;

    let iter: Box<dyn Iterator<Item = (usize, &syn::Field)>> = match fields {
        Fields::Named(named) => Box::new(named.named.iter().enumerate()),
        Fields::Unnamed(unnamed) => Box::new(unnamed.unnamed.iter().enumerate()),
        Fields::Unit => Box::new(core::iter::empty()),
    };

    for (index, field) in iter {
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(index)),
        };

        let role = if has_flag(&field.attrs, "skip") {
            Role::Skipped
        } else if sentinel.is_none()
            && match &field.ident {
                Some(ident) => ident == "__sentinel",
                None => is_sentinel_type(&field.ty),
            }
        {
            Role::Sentinel
        } else {
            Role::Secret
        };

        match role {
            Role::Skipped => {}
            Role::Sentinel => sentinel = Some(member),
            Role::Secret => {
                if matches!(field.ty, Type::Reference(_)) {
                    return Err(syn::Error::new_spanned(
                        &field.ty,
                        "reference fields cannot be zeroized; mark them #[fast_zeroize(skip)]",
                    ));
                }
                secrets.push(member);
            }
        }
    }

    let wipe_sentinel = sentinel.as_ref().map(|member| {
        quote! { #root::FastZeroizable::fast_zeroize(&mut self.#member); }
    });

    let drop_impl = has_flag(&input.attrs, "drop").then(|| {
        quote! {
            impl #impl_generics Drop for #name #ty_generics #where_clause {
                fn drop(&mut self) {
                    #root::FastZeroizable::fast_zeroize(self);
                }
            }
        }
    });

    let assert_impl = sentinel.as_ref().map(|member| {
        quote! {
            impl #impl_generics #root::AssertZeroizeOnDrop for #name #ty_generics #where_clause {
                fn clone_sentinel(&self) -> #root::ZeroizeOnDropSentinel {
                    self.#member.clone()
                }

                fn assert_zeroize_on_drop(self) {
                    #root::assert_zeroize_on_drop(self);
                }
            }
        }
    });

    Ok(quote! {
        impl #impl_generics #root::ZeroizeMetadata for #name #ty_generics #where_clause {
            const CAN_BE_BULK_ZEROIZED: bool = false;
        }

        impl #impl_generics #root::FastZeroizable for #name #ty_generics #where_clause {
            fn fast_zeroize(&mut self) {
                #( #root::FastZeroizable::fast_zeroize(&mut self.#secrets); )*
                ::core::sync::atomic::compiler_fence(::core::sync::atomic::Ordering::SeqCst);
                #wipe_sentinel
            }
        }

        impl #impl_generics #root::ZeroizationProbe for #name #ty_generics #where_clause {
            fn is_zeroized(&self) -> bool {
                true #( && #root::ZeroizationProbe::is_zeroized(&self.#secrets) )*
            }
        }

        #drop_impl
        #assert_impl
    })
}
