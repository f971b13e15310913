// Generic parameters are carried through to the generated impls.
// A field of a parameter type is nested only when the parameter is bounded
// by `EnvStruct`.

use envfill::{EnvFill, EnvStruct};

#[derive(Debug, Default, EnvFill)]
pub struct Leaf {
    #[env(default = "leaf")]
    pub label: String,
}

#[derive(Debug, Default, EnvFill)]
pub struct Wrapper<T: EnvStruct + 'static> {
    pub inner: T,
    #[env(default = "-1")]
    pub offset: i32,
}

// No `EnvStruct` bound: the field is treated as an unsupported type.
#[derive(Debug, Default, EnvFill)]
pub struct Holder<T> {
    #[env(default = "ignored")]
    pub value: T,
}

fn main() {
    let wrapper = Wrapper::<Leaf>::from_env().unwrap();
    assert_eq!(wrapper.inner.label, "leaf");
    assert_eq!(wrapper.offset, -1);

    let err = Holder::<Leaf>::from_env().unwrap_err();
    assert!(matches!(
        err,
        envfill::EnvError::UnsupportedFieldKind { ref kind, .. } if kind == "T"
    ));
}
