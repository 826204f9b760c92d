//! # reflect-bench
//!
//! Field reflection for plain Rust structs, and benchmarks measuring what it
//! costs next to hand-written code.
//!
//! `#[derive(Reflect)]` generates a `const` descriptor table for a struct
//! (field name, kind, optional constraint string, writability) and accessors
//! keyed by index and by name. Two generic operations run on top of it:
//!
//! - [`copy_fields`] copies same-named fields between two different shapes,
//!   widening integers and narrowing `f64` to `f32` where needed
//! - [`validate_tagged`] applies each field's `#[validate("...")]` constraint
//!   (`max-len`, `allow-symbol`)
//!
//! Each has a direct counterpart in [`samples`] that the benches compare
//! against.
//!
//! ```
//! use reflect_bench::prelude::*;
//!
//! #[derive(Reflect, Default)]
//! struct Draft {
//!     #[validate("max-len=5,allow-symbol=false")]
//!     title: String,
//!     words: u16,
//! }
//!
//! #[derive(Reflect, Default)]
//! struct Published {
//!     title: String,
//!     words: u32,
//! }
//!
//! let draft = Draft { title: "Intro".into(), words: 900 };
//! validate_tagged(&draft).unwrap();
//!
//! let mut published = Published::default();
//! copy_fields(&draft, &mut published);
//! assert_eq!(published.words, 900);
//! ```

extern crate self as reflect_bench;

pub mod config;
pub mod constants;
pub mod copy;
pub mod env;
pub mod field;
pub mod reflect;
pub mod samples;
pub mod set;
pub mod validate;

pub use copy::{CopyReport, SkipReason, Skipped, copy_fields, copy_fields_reported};
pub use field::{Field, FieldDescriptor, FieldKind, ReflectError, Value, ValueMut};
pub use reflect::{DynReflect, Reflect};
pub use validate::{
    Rule, RuleSet, StrRules, TagValidator, ValidationError, Violation, check_str,
    validate_tagged,
};

/// Derive field descriptors and accessors for a struct with named fields.
///
/// Field attributes:
///
/// - `#[validate("max-len=5,allow-symbol=false")]` attaches a constraint
/// - `#[reflect(rename = "Name")]` changes the reflected name
/// - `#[reflect(readonly)]` exposes the field to reads only
/// - `#[reflect(skip)]` hides the field
pub use reflect_bench_macros::Reflect;

/// Everything needed to derive and use reflection.
pub mod prelude {
    pub use crate::{
        CopyReport, DynReflect, Reflect, TagValidator, ValidationError, Value, ValueMut,
        Violation, copy_fields, copy_fields_reported, validate_tagged,
    };
}
