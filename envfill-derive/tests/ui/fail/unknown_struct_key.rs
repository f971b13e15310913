use envfill::EnvFill;

#[derive(EnvFill)]
#[env(rename_all = "UPPERCASE")]
pub struct Config {
    pub port: i32,
}

fn main() {
    let config = Config { port: 1 };
    assert_eq!(config.port, 1);
}
