use artifex::{
    logger::{self, LogLevel, LoggerConfig},
    Config,
};
use std::env;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env.local wins over .env, like the front-end tooling expects
    let env_local = dotenv::from_filename(".env.local").is_ok();
    let env_file = dotenv::dotenv().is_ok();

    let config = Config::from_env();

    let mut logger_config = if config.json_logs {
        LoggerConfig::production()
    } else {
        LoggerConfig::development()
    };
    if let Some(level) = env::var("LOG_LEVEL").ok().as_deref().and_then(LogLevel::parse) {
        logger_config = logger_config.with_level(level);
    }
    if let Some(path) = config.log_file.as_deref() {
        logger_config = logger_config.with_file_output(path);
    }
    logger::init_with_config(logger_config)?;

    match (env_local, env_file) {
        (false, false) => {
            log::warn!("⚠️  No .env.local or .env file found, using system environment")
        }
        _ => log::info!("✅ Environment file loaded"),
    }

    logger::log_startup_info("Artifex", env!("CARGO_PKG_VERSION"), &config);

    artifex::server::run(config).await?;
    Ok(())
}
