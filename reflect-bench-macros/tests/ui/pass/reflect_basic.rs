// Pass: derive Reflect on scalar fields
use reflect_bench::Reflect;

#[derive(Reflect)]
pub struct Account {
    pub owner: String,
    pub age: i32,
    pub balance: f64,
    pub active: bool,
}

fn main() {
    assert_eq!(Account::descriptors().len(), 4);
}
