use std::net::SocketAddr;

use anyhow::anyhow;
use rocket::{config::Config as RocketCfg, Rocket, Route};

use crate::core::prelude::*;

pub mod api;
#[cfg(feature = "frontend")]
mod frontend;
mod guards;
mod sqlite;

#[cfg(test)]
pub mod tests;

#[derive(Debug, Clone, Default)]
pub struct Cfg {
    /// Applies to all ranking requests that don't ask for a metric.
    pub distance_metric: DistanceMetric,
}

impl Cfg {
    /// Select the ranking strategy of a single request.
    pub(crate) fn ranker(&self, metric: Option<&str>) -> anyhow::Result<ProximityRanker> {
        let metric = match metric.map(str::trim).filter(|m| !m.is_empty()) {
            Some(m) => m
                .parse()
                .map_err(|_| anyhow!("Unknown distance metric '{m}'"))?,
            None => self.distance_metric,
        };
        Ok(ProximityRanker::new(metric))
    }
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    cfg: Cfg,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        cfg,
        version,
    } = options;

    info!("Default distance metric: {}", cfg.distance_metric);

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let version = guards::Version(version);

    let mut instance = r.manage(db).manage(cfg).manage(version);

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    instance
}

#[cfg(not(feature = "frontend"))]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

#[cfg(feature = "frontend")]
fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes()), ("/", frontend::routes())]
}

pub async fn run(
    db: sqlite::Connections,
    address: SocketAddr,
    enable_cors: bool,
    cfg: Cfg,
    version: &'static str,
) {
    let mut rocket_cfg = RocketCfg::default();
    rocket_cfg.address = address.ip();
    rocket_cfg.port = address.port();

    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: Some(rocket_cfg),
        cfg,
        version,
    };

    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        let cors = match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => cors,
            Err(err) => {
                error!("Invalid CORS options: {err}");
                return;
            }
        };
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        error!("Unable to run web server: {err}");
    }
}
