// Error: container fields are not reflected
#![allow(dead_code)]
use reflect_bench::Reflect;

#[derive(Reflect)]
struct Order {
    id: u64,
    items: Vec<String>,
}

fn main() {}
