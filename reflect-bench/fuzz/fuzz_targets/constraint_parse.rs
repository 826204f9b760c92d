#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use reflect_bench::validate::{check_constraint, contains_forbidden, parse_rules};
use reflect_bench::{Rule, RuleSet, Value};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    constraint: String,
    value: String,
    number: i64,
}

fuzz_target!(|input: FuzzInput| {
    // None of these may panic, whatever the constraint looks like
    let parsed = RuleSet::parse(&input.constraint);
    let lazy = check_constraint(&input.constraint, Value::Str(&input.value));
    let _ = check_constraint(&input.constraint, Value::I64(input.number));
    for token in input.constraint.split(',') {
        let _ = Rule::parse_token(token);
    }

    // A constraint that parses up front must check like the lazy path
    if let Ok(rules) = parsed {
        assert_eq!(rules.check(Value::Str(&input.value)), lazy);
        assert_eq!(rules.rules().len(), parse_rules(&input.constraint).count());
    }

    let _ = contains_forbidden(&input.value);
});
