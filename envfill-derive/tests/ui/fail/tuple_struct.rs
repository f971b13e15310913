use envfill::EnvFill;

#[derive(EnvFill)]
pub struct Pair(pub i32, pub i32);

fn main() {
    let pair = Pair(1, 2);
    assert_eq!(pair.0 + pair.1, 3);
}
