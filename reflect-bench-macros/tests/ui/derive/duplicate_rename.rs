// Error: two fields share one reflected name
#![allow(dead_code)]
use reflect_bench::Reflect;

#[derive(Reflect)]
struct Contact {
    #[reflect(rename = "email")]
    primary: String,
    email: String,
}

fn main() {}
