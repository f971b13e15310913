//! Basic usage example

use envfill::EnvFill;

#[derive(Debug, Default, EnvFill)]
pub struct Config {
    // Loaded from DATABASE_URL, left empty when unset
    #[env(name = "DATABASE_URL")]
    pub database_url: String,

    // Environment value wins, default otherwise
    #[env(name = "SERVER_ADDR", default = "127.0.0.1:8080")]
    pub server_addr: String,

    // Numeric type
    #[env(name = "MAX_CONNECTIONS", default = "10")]
    pub max_connections: i32,

    // Boolean type
    #[env(name = "DEBUG_MODE", default = "false")]
    pub debug_mode: bool,

    // Floating point type
    #[env(name = "SAMPLE_RATE", default = "0.25")]
    pub sample_rate: f32,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");

    // Load configuration
    let mut config = Config::default();
    envfill::parse(&mut config)?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Sample Rate: {}", config.sample_rate);

    Ok(())
}
