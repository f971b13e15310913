use envfill::EnvFill;

#[derive(EnvFill)]
pub struct Secrets {
    #[env(from_file)]
    pub token: String,
}

fn main() {
    let secrets = Secrets { token: String::new() };
    assert!(secrets.token.is_empty());
}
