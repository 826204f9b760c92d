//! Proc-macros for reflect-bench.
//!
//! Provides `#[derive(Reflect)]`. Use it through the `reflect_bench` crate,
//! which re-exports it next to the `Reflect` trait; the generated code refers
//! to `::reflect_bench` paths.

mod derive;
mod errors;

use proc_macro::TokenStream;

/// Print codegen steps to stderr when the `macro-trace` feature is on.
macro_rules! trace {
    ($($arg:tt)*) => {
        if cfg!(feature = "macro-trace") {
            eprintln!("[reflect-bench-macros] {}", format_args!($($arg)*));
        }
    };
}
pub(crate) use trace;

/// Print the pretty-printed expansion to stderr (`debug-expand` feature).
#[cfg(feature = "debug-expand")]
pub(crate) fn debug_expand(name: &str, tokens: &proc_macro2::TokenStream) {
    match syn::parse2::<syn::File>(tokens.clone()) {
        Ok(file) => eprintln!(
            "// #[derive(Reflect)] for {name}\n{}",
            prettyplease::unparse(&file)
        ),
        Err(err) => eprintln!("// #[derive(Reflect)] for {name}: unprintable expansion: {err}"),
    }
}

#[cfg(not(feature = "debug-expand"))]
pub(crate) const fn debug_expand(_name: &str, _tokens: &proc_macro2::TokenStream) {}

/// Derive `reflect_bench::Reflect` for a struct with named fields.
///
/// ```ignore
/// #[derive(Reflect)]
/// struct UserDto {
///     #[validate("max-len=5,allow-symbol=false")]
///     name: String,
///     #[reflect(readonly)]
///     id: u64,
///     #[reflect(rename = "Email")]
///     email: String,
///     #[reflect(skip)]
///     cache: Vec<u8>,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect, validate))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    derive::derive_reflect_impl(input)
}
