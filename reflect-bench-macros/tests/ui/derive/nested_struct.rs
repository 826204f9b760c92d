// Error: nested structs are not reflected
#![allow(dead_code)]
use reflect_bench::Reflect;

struct Address {
    city: String,
}

#[derive(Reflect)]
struct Customer {
    name: String,
    address: Address,
}

fn main() {}
