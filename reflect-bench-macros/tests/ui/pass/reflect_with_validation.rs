// Pass: derive Reflect with constraint strings in both attribute forms
use reflect_bench::Reflect;

#[derive(Reflect)]
pub struct Signup {
    #[validate("max-len=5,allow-symbol=false")]
    pub name: String,
    #[validate = "max-len=64"]
    pub email: String,
}

fn main() {}
