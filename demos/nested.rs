//! Nested structs are filled recursively with their own annotations

use envfill::{EnvFill, EnvStruct};

#[derive(Debug, Default, EnvFill)]
#[env(prefix = "DB_")]
pub struct DatabaseConfig {
    #[env(name = "HOST", default = "localhost")]
    pub host: String,

    #[env(name = "POOL_SIZE", default = "8")]
    pub pool_size: i32,
}

#[derive(Debug, Default, EnvFill)]
#[env(prefix = "CACHE_")]
pub struct CacheConfig {
    #[env(name = "ENABLED", default = "true")]
    pub enabled: bool,

    #[env(name = "HIT_RATIO_TARGET", default = "0.9")]
    pub hit_ratio_target: f32,
}

#[derive(Debug, Default, EnvFill)]
pub struct Config {
    #[env(name = "SERVICE_NAME", default = "orders")]
    pub service_name: String,

    // No annotations here: the nested structs carry their own
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("DB_HOST", "db.internal");
    std::env::set_var("CACHE_ENABLED", "0");

    let config = Config::from_env()?;

    println!("{config:#?}");

    for field in config.fields() {
        println!("  {}: {}", field.name, field.type_name);
    }

    Ok(())
}
