use rocket::{config::Config as RocketCfg, local::blocking::Client, Route};

use crate::web::{sqlite, Cfg};

pub mod prelude {

    pub const DUMMY_VERSION: &str = "3.2.1";

    pub use rocket::{
        http::{ContentType, Status},
        local::blocking::{Client, LocalResponse},
    };

    pub use super::{rocket_test_setup, rocket_test_setup_without_schema};
}

fn rocket_test_instance_with_cfg(
    mounts: Vec<(&'static str, Vec<Route>)>,
    cfg: Cfg,
    rocket_cfg: RocketCfg,
    migrate: bool,
) -> (rocket::Rocket<rocket::Build>, sqlite::Connections) {
    let connections = sdb_db_sqlite::Connections::init(":memory:", 1).unwrap();
    if migrate {
        sdb_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap())
            .unwrap();
    }
    let db = sqlite::Connections::from(connections);
    let options = super::InstanceOptions {
        mounts,
        rocket_cfg: Some(rocket_cfg),
        cfg,
        version: prelude::DUMMY_VERSION,
    };
    let rocket = super::rocket_instance(options, db.clone());
    (rocket, db)
}

pub fn rocket_test_setup(mounts: Vec<(&'static str, Vec<Route>)>) -> (Client, sqlite::Connections) {
    rocket_test_setup_with_cfg(mounts, Cfg::default())
}

pub fn rocket_test_setup_with_cfg(
    mounts: Vec<(&'static str, Vec<Route>)>,
    cfg: Cfg,
) -> (Client, sqlite::Connections) {
    let rocket_cfg = RocketCfg::debug_default();
    let (rocket, db) = rocket_test_instance_with_cfg(mounts, cfg, rocket_cfg, true);
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}

/// Without migrations every query fails because the `schools` table is missing.
pub fn rocket_test_setup_without_schema(
    mounts: Vec<(&'static str, Vec<Route>)>,
) -> (Client, sqlite::Connections) {
    let rocket_cfg = RocketCfg::debug_default();
    let (rocket, db) = rocket_test_instance_with_cfg(mounts, Cfg::default(), rocket_cfg, false);
    let client = Client::tracked(rocket).unwrap();
    (client, db)
}
