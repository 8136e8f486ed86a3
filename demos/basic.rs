//! Basic usage example

use envtag::Record;

#[derive(Debug, Default, Record)]
struct Config {
    // Loaded from SERVER_ADDR, falls back to the literal
    #[envtag(env = "SERVER_ADDR", fallback = "127.0.0.1:8080")]
    pub server_addr: String,

    // Numeric type
    #[envtag(env = "MAX_CONNECTIONS", fallback = 10)]
    pub max_connections: i64,

    // Boolean type
    #[envtag(env = "DEBUG_MODE", fallback = false)]
    pub debug_mode: bool,

    // No metadata: never touched
    pub build_id: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Set environment variables for demonstration
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");
    std::env::set_var("MAX_CONNECTIONS", "not-a-number");

    let mut config = Config {
        build_id: "local".to_string(),
        ..Config::default()
    };
    envtag::parse(&mut config)?;

    println!("Configuration loaded:");
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections); // 10, value did not parse
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Build ID: {}", config.build_id);

    Ok(())
}
