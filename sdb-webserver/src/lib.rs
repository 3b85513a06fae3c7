#![allow(proc_macro_derive_resolution_fallback)]
#![recursion_limit = "128"]

#[macro_use]
extern crate log;

use std::net::SocketAddr;

use sdb_db_sqlite::Connections;

mod adapters;
mod core;
mod web;

pub use web::Cfg;

pub async fn run(
    connections: Connections,
    address: SocketAddr,
    enable_cors: bool,
    cfg: Cfg,
    version: &'static str,
) {
    web::run(connections.into(), address, enable_cors, cfg, version).await;
}
