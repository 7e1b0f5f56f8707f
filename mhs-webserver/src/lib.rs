#![recursion_limit = "128"]

#[macro_use]
extern crate log;

mod web;

pub use web::Cfg;

pub async fn run(connections: mhs_db_memory::Connections, cfg: Cfg) {
    web::run(connections.into(), cfg).await;
}
