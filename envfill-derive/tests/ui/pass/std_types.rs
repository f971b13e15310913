// Standard library types compile as fields and stay untouched without a value.

use envfill::{EnvError, EnvFill, EnvStruct, FieldKind};
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Default, EnvFill)]
pub struct Paths {
    pub data_dir: std::path::PathBuf,
    pub cache_dir: PathBuf,
    pub timeout: Duration,
    pub bind: Option<IpAddr>,
    #[env(default = "8080")]
    pub port: i32,
}

#[derive(Debug, Default, EnvFill)]
pub struct AnnotatedPath {
    #[env(default = "/tmp")]
    pub data_dir: std::path::PathBuf,
}

fn main() {
    let mut paths = Paths::default();
    envfill::parse(&mut paths).unwrap();
    assert_eq!(paths.data_dir, PathBuf::new());
    assert_eq!(paths.timeout, Duration::ZERO);
    assert_eq!(paths.bind, None);
    assert_eq!(paths.port, 8080);

    assert!(matches!(paths.field_mut(0).map(|slot| slot.kind()), Some(FieldKind::Unsupported)));
    assert_eq!(paths.fields()[0].type_name, "std::path::PathBuf");
    assert_eq!(paths.fields()[3].type_name, "Option<IpAddr>");

    let mut annotated = AnnotatedPath::default();
    match envfill::parse(&mut annotated) {
        Err(EnvError::UnsupportedFieldKind { name, kind }) => {
            assert_eq!(name, "data_dir");
            assert_eq!(kind, "std::path::PathBuf");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(annotated.data_dir, PathBuf::new());
}
