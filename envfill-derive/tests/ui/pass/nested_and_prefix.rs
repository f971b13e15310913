// Nested structs keep their own prefix; raw identifiers are unrawed.

use envfill::{EnvFill, EnvStruct};

#[derive(Debug, Default, EnvFill)]
#[env(prefix = "UI_INNER_")]
pub struct Inner {
    #[env(name = "LEVEL", default = "3")]
    pub level: i32,
}

#[derive(Debug, Default, EnvFill)]
#[env(prefix = "UI_OUTER_")]
pub struct Outer {
    #[env(name = "TYPE", default = "kind")]
    pub r#type: String,
    pub inner: Inner,
}

fn main() {
    let mut outer = Outer::default();
    envfill::parse(&mut outer).unwrap();
    assert_eq!(outer.r#type, "kind");
    assert_eq!(outer.inner.level, 3);

    let fields = outer.fields();
    assert_eq!(fields[0].name, "type");
    assert_eq!(fields[0].env, Some("UI_OUTER_TYPE"));
    assert_eq!(outer.inner.fields()[0].env, Some("UI_INNER_LEVEL"));
}
