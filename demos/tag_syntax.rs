//! Example using free-text tags and a struct-level prefix

use envtag::Record;

#[derive(Debug, Default, Record)]
#[envtag(prefix = "APP_")]
struct Config {
    // Reads APP_NAME
    #[envtag(tag = r#"env:"NAME" fallback:"anon""#)]
    pub name: String,

    // Quotes are optional
    #[envtag(tag = "env:VERBOSE fallback:true")]
    pub verbose: bool,

    // Unparsable fallback: logged, becomes -1
    #[envtag(tag = r#"env:"RETRIES" fallback:"several""#)]
    pub retries: i64,

    // No env keyword: skipped
    #[envtag(tag = r#"json:"label""#)]
    pub label: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    std::env::set_var("APP_NAME", "alice");
    std::env::remove_var("APP_VERBOSE");
    std::env::remove_var("APP_RETRIES");

    let mut config = Config::default();
    envtag::parse(&mut config)?;

    println!("{config:#?}");

    Ok(())
}
