//! Example printing where every field came from

use std::collections::HashMap;

use envtag::{Diagnostic, Populator, Record};

#[derive(Default, Record)]
struct Config {
    #[envtag(env = "DATABASE_URL", fallback = "postgres://localhost/dev")]
    pub database_url: String,

    #[envtag(env = "POOL_SIZE", fallback = 4)]
    pub pool_size: i64,

    #[envtag(env = "TIMEOUT_SECS", fallback = "30")]
    pub timeout_secs: f64,
}

fn warn(diagnostic: &Diagnostic<'_>) {
    eprintln!("warning: {diagnostic}");
}

fn main() -> anyhow::Result<()> {
    // A fixed environment instead of the process one
    let env = HashMap::from([("POOL_SIZE".to_string(), "16".to_string())]);

    let mut populator = Populator::new().with_env(env).with_sink(warn);

    let mut config = Config::default();
    let report = populator.populate_with_report(&mut config)?;

    println!("Database URL: {}", config.database_url);
    println!("Pool Size: {}", config.pool_size);
    println!("Timeout: {}s", config.timeout_secs); // untouched, f64 is not supported
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
