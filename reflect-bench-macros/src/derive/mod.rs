//! Derive macro for reflected record shapes: Reflect.
//!
//! Generates a `const` descriptor table and index/name accessors so generic
//! code can walk a struct's fields at runtime.

mod reflect_derive;

use quote::ToTokens;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Expr, ExprLit, Fields, Lit, LitStr, Meta, Type};

use crate::errors::{parse_error, unknown_error};

// Re-export the public entry point
pub use reflect_derive::derive_reflect_impl;

// ============================================================================
// FIELD ATTRIBUTE PARSING
// ============================================================================

const REFLECT_OPTIONS: &[&str] = &["rename", "readonly", "skip"];

const VALIDATE_EXAMPLES: &[&str] = &[
    r#"#[validate("max-len=5")]"#,
    r#"#[validate("max-len=5,allow-symbol=false")]"#,
    r#"#[validate = "allow-symbol=true"]"#,
];

#[derive(Default, Clone)]
pub struct FieldAttrs {
    pub(crate) rename: Option<String>,
    pub(crate) readonly: bool,
    pub(crate) skip: bool,
    pub(crate) constraint: Option<String>,
}

pub fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttrs, syn::Error> {
    let mut result = FieldAttrs::default();

    for attr in attrs {
        if attr.path().is_ident("reflect") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let value: LitStr = meta.value()?.parse()?;
                    if value.value().is_empty() {
                        return Err(syn::Error::new_spanned(
                            &value,
                            "rename target cannot be empty",
                        ));
                    }
                    result.rename = Some(value.value());
                } else if meta.path.is_ident("readonly") {
                    result.readonly = true;
                } else if meta.path.is_ident("skip") {
                    result.skip = true;
                } else {
                    let got = meta
                        .path
                        .get_ident()
                        .map(ToString::to_string)
                        .unwrap_or_default();
                    return Err(unknown_error(
                        meta.path.span(),
                        "reflect option",
                        &got,
                        REFLECT_OPTIONS,
                    ));
                }
                Ok(())
            })?;
        } else if attr.path().is_ident("validate") {
            if result.constraint.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate #[validate] attribute. Hint: combine rules with commas, \
                     e.g. #[validate(\"max-len=5,allow-symbol=false\")]",
                ));
            }
            result.constraint = Some(parse_constraint(attr)?);
        }
    }

    if result.skip && result.constraint.is_some() {
        return Err(syn::Error::new(
            attrs.first().map_or_else(proc_macro2::Span::call_site, Spanned::span),
            "#[reflect(skip)] fields are not validated; remove the #[validate] attribute",
        ));
    }

    Ok(result)
}

/// Accept `#[validate("...")]` and `#[validate = "..."]`.
fn parse_constraint(attr: &Attribute) -> Result<String, syn::Error> {
    let lit = match &attr.meta {
        Meta::List(_) => attr.parse_args::<LitStr>().ok(),
        Meta::NameValue(nv) => match &nv.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(lit), ..
            }) => Some(lit.clone()),
            _ => None,
        },
        Meta::Path(_) => None,
    };
    lit.map(|lit| lit.value()).ok_or_else(|| {
        parse_error(
            attr.span(),
            "#[validate] takes a single string literal of comma-separated key=value rules",
            VALIDATE_EXAMPLES,
        )
    })
}

// ============================================================================
// TYPE HELPERS
// ============================================================================

const SUPPORTED_TYPES: &[&str] = &[
    "String", "bool", "i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64", "f32", "f64",
];

/// Name of the offending shape if `ty` is not one of [`SUPPORTED_TYPES`].
///
/// Types are matched by their last path segment, so `std::string::String`
/// is accepted while a type alias is not. The `Field` bound in the generated
/// code still backs this up.
pub fn unsupported_shape(ty: &Type) -> Option<String> {
    match ty {
        Type::Group(group) => unsupported_shape(&group.elem),
        Type::Paren(paren) => unsupported_shape(&paren.elem),
        Type::Path(type_path) if type_path.qself.is_none() => {
            let segment = type_path.path.segments.last()?;
            let name = segment.ident.to_string();
            let leaf = segment.arguments.is_none() && SUPPORTED_TYPES.contains(&name.as_str());
            (!leaf).then_some(name)
        },
        Type::Reference(_) => Some("reference".to_string()),
        Type::Array(_) | Type::Slice(_) => Some("array".to_string()),
        Type::Tuple(_) => Some("tuple".to_string()),
        _ => Some(ty.to_token_stream().to_string()),
    }
}

pub fn unsupported_shape_error(ty: &Type, shape: &str) -> syn::Error {
    syn::Error::new_spanned(
        ty,
        format!(
            "Reflect derive does not support {shape} fields. \
             Supported field types: {}. \
             Hint: mark the field #[reflect(skip)] to leave it out of reflection.",
            SUPPORTED_TYPES.join(", ")
        ),
    )
}

/// Reflected name of a field: explicit rename, else the identifier without
/// any `r#` prefix.
pub fn reflected_name(ident: &syn::Ident, attrs: &FieldAttrs) -> String {
    attrs
        .rename
        .clone()
        .unwrap_or_else(|| ident.unraw().to_string())
}

// ============================================================================
// STRUCT FIELD EXTRACTION HELPER
// ============================================================================

/// Extract named fields from a `DeriveInput`.
pub fn extract_named_fields(
    input: &DeriveInput,
) -> Result<&syn::punctuated::Punctuated<syn::Field, syn::token::Comma>, syn::Error> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Reflect derive does not support generic structs. \
             Hint: derive on a concrete struct such as `struct Account { owner: String }`.",
        ));
    }
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            _ => Err(syn::Error::new_spanned(
                input,
                "Reflect derive only supports structs with named fields. \
                 Example: `struct Account { owner: String, age: u32 }`",
            )),
        },
        _ => Err(syn::Error::new_spanned(
            input,
            "Reflect derive only supports structs. \
             Hint: Use `#[derive(Reflect)]` on a struct with named fields.",
        )),
    }
}
