// Unsupported types compile; they only fail once a value resolves.

use envfill::{EnvError, EnvFill};
use std::collections::HashMap;

#[derive(Debug, Default, EnvFill)]
pub struct Quiet {
    pub numbers: Vec<i32>,
    pub lookup: HashMap<String, String>,
    pub wide: i64,
}

#[derive(Debug, Default, EnvFill)]
pub struct Loud {
    #[env(default = "1,2,3")]
    pub numbers: Vec<i32>,
}

fn main() {
    let mut quiet = Quiet::default();
    envfill::parse(&mut quiet).unwrap();

    let mut loud = Loud::default();
    match envfill::parse(&mut loud) {
        Err(EnvError::UnsupportedFieldKind { name, kind }) => {
            assert_eq!(name, "numbers");
            assert_eq!(kind, "Vec<i32>");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
