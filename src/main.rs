use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use darui::app::AppContext;
use darui::cli::{commands, Cli};
use darui::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = Config::discover(cli.file.as_deref())?;
    let ctx = AppContext::new(config);

    commands::run(&ctx, cli.print, cli.no_email).await?;

    Ok(())
}
