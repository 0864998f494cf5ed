use anyhow::Result;
use answer_sheet_check::{logger, App, CliArgs, Config};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    logger::init();

    // Parse arguments and load configuration
    let args = CliArgs::parse();
    let config = Config::load();

    // Initialize and run the application
    App::initialize(config)?.run(args).await?;

    Ok(())
}
