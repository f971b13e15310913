//! Fields without a resolved value keep what they already hold

use envfill::{EnvError, EnvFill};

#[derive(Debug, EnvFill)]
pub struct Config {
    // Only overridden when LOG_LEVEL is set and non-empty
    #[env(name = "LOG_LEVEL")]
    pub log_level: String,

    #[env(name = "WORKERS")]
    pub workers: i32,

    // No annotations: never touched
    pub build_id: String,
}

fn main() -> anyhow::Result<()> {
    let mut config = Config {
        log_level: "info".to_string(),
        workers: 4,
        build_id: "2024.1".to_string(),
    };

    std::env::set_var("LOG_LEVEL", "");
    std::env::set_var("WORKERS", "16");
    envfill::parse(&mut config)?;
    println!("After parse: {config:?}");

    // A bad value stops the walk and is reported as the parser's own error
    std::env::set_var("WORKERS", "many");
    match envfill::parse(&mut config) {
        Err(EnvError::ParseInt(e)) => println!("WORKERS rejected: {e}"),
        other => println!("Unexpected: {other:?}"),
    }

    Ok(())
}
