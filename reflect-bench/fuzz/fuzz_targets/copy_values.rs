#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use reflect_bench::copy_fields;
use reflect_bench::samples::{Source, Target, copy_direct};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    name: String,
    age: i32,
    balance: f64,
}

fuzz_target!(|input: FuzzInput| {
    let src = Source {
        name: input.name,
        age: input.age,
        balance: input.balance,
    };
    let mut reflective = Target::default();
    let mut direct = Target::default();

    copy_fields(&src, &mut reflective);
    copy_direct(&src, &mut direct);

    assert_eq!(reflective.name, direct.name);
    assert_eq!(reflective.age, direct.age);
    assert_eq!(reflective.balance.to_bits(), direct.balance.to_bits());
});
