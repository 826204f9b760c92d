// Pass: structs with no reflected fields
use reflect_bench::Reflect;

#[derive(Reflect)]
pub struct Empty {}

#[derive(Reflect)]
pub struct AllSkipped {
    #[reflect(skip)]
    pub cache: Vec<u8>,
}

fn main() {
    assert!(Empty::descriptors().is_empty());
    assert!(AllSkipped::descriptors().is_empty());
}
