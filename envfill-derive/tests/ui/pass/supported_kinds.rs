// All convertible field kinds plus an unannotated field expand and fill.

use envfill::{EnvFill, EnvStruct, FieldKind};

#[derive(Debug, Default, EnvFill)]
pub struct Config {
    #[env(default = "DefaultStringVal")]
    pub string_type: String,
    #[env(default = "1234")]
    pub int_type: i32,
    #[env(default = "4321.12")]
    pub float_type: f32,
    #[env(default = "true")]
    pub bool_type: bool,
    pub untouched: i32,
}

fn main() {
    let mut config = Config::from_env().unwrap();
    assert_eq!(config.string_type, "DefaultStringVal");
    assert_eq!(config.int_type, 1234);
    assert_eq!(config.float_type, 4321.12);
    assert!(config.bool_type);
    assert_eq!(config.untouched, 0);

    let kinds: Vec<FieldKind> = (0..config.fields().len())
        .filter_map(|index| config.field_mut(index).map(|slot| slot.kind()))
        .collect();
    assert_eq!(
        kinds,
        [
            FieldKind::Text,
            FieldKind::Integer,
            FieldKind::Float,
            FieldKind::Boolean,
            FieldKind::Integer,
        ]
    );

    let type_names: Vec<&str> = config.fields().iter().map(|f| f.type_name).collect();
    assert_eq!(type_names, ["String", "i32", "f32", "bool", "i32"]);
}
