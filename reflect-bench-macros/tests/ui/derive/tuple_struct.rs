// Error: only named fields can be reflected
#![allow(dead_code)]
use reflect_bench::Reflect;

#[derive(Reflect)]
struct Pair(u8, u8);

fn main() {}
