use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ledge_core::module::ModuleRegistry;
use ledge_infrastructure::launcher::StaticAppProvider;
use ledge_infrastructure::settings::FileSettings;
use ledge_infrastructure::telemetry;
use ledge_session::Session;

mod headless;

#[derive(Parser)]
#[command(name = "ledge")]
#[command(about = "Ledge - a desktop shell session core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an embedded session against the headless backend
    Run {
        /// Settings file to use instead of the platform default
        #[arg(long)]
        settings: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { settings } => run_embedded(settings).await?,
    }

    Ok(())
}

async fn run_embedded(settings_path: Option<PathBuf>) -> Result<()> {
    let settings = match settings_path {
        Some(path) => FileSettings::open(path)?,
        None => FileSettings::open_default()?,
    };

    let toolkit = headless::HeadlessToolkit::new();
    let session = Session::new_embedded(
        Arc::new(StaticAppProvider::empty()),
        Arc::new(settings),
        Arc::new(ModuleRegistry::new()),
        toolkit.clone(),
        toolkit,
    )
    .await;

    session.run();
    tracing::info!("Embedded session running, press Ctrl-C to exit");

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down");

    Ok(())
}
