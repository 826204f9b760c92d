//! Shared test fixtures.
//!
//! Record shapes used across the integration tests, beyond the fixed pair in
//! `reflect_bench::samples`.

use reflect_bench::Reflect;

/// Every supported kind, all at their narrowest.
#[allow(dead_code)]
#[derive(Reflect, Debug, Clone, Default, PartialEq)]
pub struct Narrow {
    pub text: String,
    pub flag: bool,
    pub i8v: i8,
    pub i16v: i16,
    pub i32v: i32,
    pub u8v: u8,
    pub u16v: u16,
    pub u32v: u32,
    pub ratio: f64,
}

/// Same names as [`Narrow`], each integer widened and the float narrowed.
#[allow(dead_code)]
#[derive(Reflect, Debug, Clone, Default, PartialEq)]
pub struct Wide {
    pub text: String,
    pub flag: bool,
    pub i8v: i64,
    pub i16v: i32,
    pub i32v: i64,
    pub u8v: i16,
    pub u16v: u64,
    pub u32v: i64,
    pub ratio: f32,
}

/// Same names as [`Narrow`], with types that cannot receive its values.
#[allow(dead_code)]
#[derive(Reflect, Debug, Clone, Default, PartialEq)]
pub struct Incompatible {
    pub text: u32,
    pub flag: String,
    pub i8v: u64,
    pub i16v: i8,
    pub ratio: f64,
    pub only_here: i32,
}

/// Three string fields with different constraints, plus a numeric one.
#[allow(dead_code)]
#[derive(Reflect, Debug, Clone, Default)]
pub struct Registration {
    #[validate("max-len=8")]
    pub username: String,
    #[validate("max-len=20,allow-symbol=true")]
    pub email: String,
    #[validate("allow-symbol=false,unknown-key=whatever")]
    pub display: String,
    #[validate("max-len=1")]
    pub age: u32,
    pub notes: String,
}

#[allow(dead_code)]
pub fn registration(username: &str, email: &str, display: &str) -> Registration {
    Registration {
        username: username.to_string(),
        email: email.to_string(),
        display: display.to_string(),
        age: 4_000,
        notes: "anything goes !@#".to_string(),
    }
}
