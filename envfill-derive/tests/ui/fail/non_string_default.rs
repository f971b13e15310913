use envfill::EnvFill;

#[derive(EnvFill)]
pub struct Config {
    #[env(default = 1234)]
    pub port: i32,
}

fn main() {
    let config = Config { port: 1 };
    assert_eq!(config.port, 1);
}
