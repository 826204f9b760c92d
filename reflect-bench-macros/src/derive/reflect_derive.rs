//! #[derive(Reflect)] implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{DeriveInput, parse_macro_input};

use super::{
    extract_named_fields, parse_field_attrs, reflected_name, unsupported_shape,
    unsupported_shape_error,
};

// ============================================================================
// DERIVE REFLECT
// ============================================================================

pub fn derive_reflect_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => {
            crate::debug_expand(&input.ident.to_string(), &tokens);
            tokens.into()
        },
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let name_str = name.to_string();
    let fields = extract_named_fields(input)?;

    let mut descriptors = Vec::new();
    let mut by_index = Vec::new();
    let mut by_name = Vec::new();
    let mut by_name_mut = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            crate::trace!("{name_str}.{ident}: skipped");
            continue;
        }

        let ty = &field.ty;
        if let Some(shape) = unsupported_shape(ty) {
            return Err(unsupported_shape_error(ty, &shape));
        }

        let reflected = reflected_name(ident, &attrs);
        if seen.contains(&reflected) {
            return Err(syn::Error::new_spanned(
                ident,
                format!(
                    "duplicate reflected field name '{reflected}' in {name_str}. \
                     Hint: check #[reflect(rename = \"...\")] attributes."
                ),
            ));
        }

        let index = seen.len();
        let writable = !attrs.readonly;
        let constraint = match &attrs.constraint {
            Some(c) => quote! { ::core::option::Option::Some(#c) },
            None => quote! { ::core::option::Option::None },
        };
        crate::trace!(
            "{name_str}.{ident}: index {index}, name {reflected:?}, writable {writable}, constraint {:?}",
            attrs.constraint
        );

        // Spanned on the type so a missing `Field` impl points at the field
        descriptors.push(quote_spanned! {ty.span()=>
            ::reflect_bench::FieldDescriptor::new(
                #reflected,
                <#ty as ::reflect_bench::Field>::KIND,
                #constraint,
                #writable,
            )
        });
        by_index.push(quote! {
            #index => ::core::option::Option::Some(::reflect_bench::Field::as_value(&self.#ident))
        });
        by_name.push(quote! {
            #reflected => ::core::option::Option::Some(::reflect_bench::Field::as_value(&self.#ident))
        });
        if writable {
            by_name_mut.push(quote! {
                #reflected => ::core::option::Option::Some(::reflect_bench::Field::as_value_mut(&mut self.#ident))
            });
        }

        seen.push(reflected);
    }

    Ok(quote! {
        #[automatically_derived]
        impl ::reflect_bench::Reflect for #name {
            const TYPE_NAME: &'static str = #name_str;

            fn descriptors() -> &'static [::reflect_bench::FieldDescriptor] {
                const FIELDS: &[::reflect_bench::FieldDescriptor] = &[#(#descriptors),*];
                FIELDS
            }

            #[inline]
            fn field_at(&self, __index: usize) -> ::core::option::Option<::reflect_bench::Value<'_>> {
                match __index {
                    #(#by_index,)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field(&self, __name: &str) -> ::core::option::Option<::reflect_bench::Value<'_>> {
                match __name {
                    #(#by_name,)*
                    _ => ::core::option::Option::None,
                }
            }

            #[inline]
            fn field_mut(&mut self, __name: &str) -> ::core::option::Option<::reflect_bench::ValueMut<'_>> {
                match __name {
                    #(#by_name_mut,)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}
