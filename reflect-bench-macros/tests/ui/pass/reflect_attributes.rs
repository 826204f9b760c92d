// Pass: rename, readonly and skip together
use std::collections::HashMap;

use reflect_bench::Reflect;

#[derive(Reflect)]
pub struct Profile {
    #[reflect(rename = "Name")]
    pub name: String,
    #[reflect(readonly)]
    pub id: u64,
    #[reflect(skip)]
    pub tags: HashMap<String, String>,
    pub r#type: u8,
}

fn main() {}
