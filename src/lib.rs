pub mod client;
pub mod config;
pub mod db;
pub mod errors;
pub mod geocoding;
pub mod handlers;
pub mod intake;
pub mod listing;
pub mod models;
pub mod render;

pub use db::create_pool;
