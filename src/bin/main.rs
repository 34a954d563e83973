use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use well_production::{
    config::Config, db::ProductionStore, ingest::load_data, logger, route::router, shutdown,
};

#[derive(Parser)]
#[command(version, about = "Annual well production service")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Serve `GET /data?well=<API WELL NUMBER>`.
    Serve,
    /// Replace all stored production data with the per-well totals of FILE.
    LoadData {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env().context("Invalid configuration")?;
    logger::init(config.debug);

    let store = ProductionStore::open(&config.database_url, config.pool_size)
        .await
        .with_context(|| format!("Unable to open database {}", config.database_url))?;

    match cli.cmd {
        Cmd::Serve => {
            let app = router(store, config.request_timeout);
            let listener = TcpListener::bind(config.bind_addr)
                .await
                .with_context(|| format!("Unable to bind {}", config.bind_addr))?;
            info!(addr = %config.bind_addr, "Listening");

            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown::signal())
                .await?;
        }
        Cmd::LoadData { file } => {
            let report = load_data(&store, &file)
                .await
                .with_context(|| format!("Failed to load {}", file.display()))?;
            info!(?report, "Load complete");
            println!(
                "New data inserted successfully: {} wells from {} rows",
                report.wells_written, report.rows_read
            );
        }
    }

    Ok(())
}
