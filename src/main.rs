use anyhow::Result;
use confirmist::config::Config;
use confirmist::logger::{self, Logger};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Some(pos) = args.iter().position(|arg| arg == "--generate-config") {
        let path = match args.get(pos + 1) {
            Some(path) => PathBuf::from(path),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = Config::load()?;
    let logger = Logger::new();
    logger::init(&config.logging, &logger)?;

    // Run the TUI application
    confirmist::ui::run_app(config, logger).await
}
