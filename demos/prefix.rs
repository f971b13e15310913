//! Example demonstrating prefix attribute

use envfill::{EnvFill, EnvStruct};

#[derive(Debug, Default, EnvFill)]
#[env(prefix = "MYAPP_")]
pub struct Config {
    // Environment variables will be prefixed: MYAPP_DATABASE_URL, MYAPP_API_KEY, etc.
    #[env(name = "DATABASE_URL")]
    pub database_url: String,

    #[env(name = "API_KEY")]
    pub api_key: String,

    #[env(name = "PORT", default = "8080")]
    pub port: i32,

    #[env(name = "DEBUG", default = "false")]
    pub debug: bool,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables with prefix
    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/db");
    std::env::set_var("MYAPP_API_KEY", "secret-key-123");
    std::env::set_var("MYAPP_PORT", "3000");

    let config = Config::from_env()?;

    println!("Configuration with prefix 'MYAPP_':");
    println!("  Database URL: {}", config.database_url);
    println!("  API Key: {}", config.api_key);
    println!("  Port: {}", config.port);
    println!("  Debug: {}", config.debug);

    Ok(())
}
