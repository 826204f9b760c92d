// Error: generic structs cannot be reflected
#![allow(dead_code)]
use reflect_bench::Reflect;

#[derive(Reflect)]
struct Wrapper<T> {
    inner: T,
}

fn main() {}
