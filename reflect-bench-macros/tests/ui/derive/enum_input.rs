// Error: enums cannot be reflected
#![allow(dead_code)]
use reflect_bench::Reflect;

#[derive(Reflect)]
enum Choice { Yes, No }

fn main() {}
