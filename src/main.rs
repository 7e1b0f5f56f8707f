use anyhow::{Context as _, Result};
use clap::Parser as _;
use mhs_core::{repositories::ActivityRepo as _, usecases};
use mhs_db_memory::Connections;

mod cli;
mod config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Args::parse();
    let cfg = config::Config::try_load_from_file_or_default(args.config.as_ref())?;

    let activities = cfg.seed.load_activities()?;
    let connections = Connections::new();
    usecases::load_seed(&connections.exclusive(), activities)
        .context("Unable to seed the activities")?;
    log::info!(
        "Loaded {} activities",
        connections.shared().count_activities()?
    );

    let config::WebServer {
        address,
        port,
        enable_cors,
    } = cfg.webserver;
    let web_cfg = mhs_webserver::Cfg {
        address,
        port,
        enable_cors: enable_cors || args.enable_cors,
    };
    log::info!("Listening on http://{address}:{port}");
    mhs_webserver::run(connections, web_cfg).await;
    Ok(())
}
