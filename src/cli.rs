use std::{net::SocketAddr, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use sdb_db_sqlite::Connections;
use sdb_entities::geo::DistanceMetric;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "schooldb", version, about = "Find the schools closest to a location")]
pub struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    pub db_url: Option<String>,

    /// Set the port to listen
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Allow requests from any origin
    #[arg(long)]
    pub enable_cors: bool,

    /// Default distance metric: haversine or planar
    #[arg(long, value_name = "METRIC")]
    pub distance_metric: Option<DistanceMetric>,
}

pub async fn run(args: Args) -> Result<()> {
    let Args {
        config_file,
        db_url,
        port,
        enable_cors,
        distance_metric,
    } = args;

    let mut cfg = Config::try_load_from_file_or_default(config_file)?;
    if let Some(db_url) = db_url {
        cfg.db.set_url(db_url);
    }
    if let Some(port) = port {
        cfg.webserver.port = port;
    }
    if enable_cors {
        cfg.webserver.enable_cors = true;
    }
    if let Some(distance_metric) = distance_metric {
        cfg.ranking.distance_metric = distance_metric;
    }

    let connections = Connections::init(&cfg.db.url, cfg.db.pool_size)?;
    sdb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let address = SocketAddr::new(cfg.webserver.address, cfg.webserver.port);
    log::info!("Server is running on http://{address}");

    let web_cfg = sdb_webserver::Cfg {
        distance_metric: cfg.ranking.distance_metric,
    };
    sdb_webserver::run(
        connections,
        address,
        cfg.webserver.enable_cors,
        web_cfg,
        env!("CARGO_PKG_VERSION"),
    )
    .await;
    Ok(())
}
