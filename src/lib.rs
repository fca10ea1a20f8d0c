pub mod config;
pub mod net;
pub mod server;

pub use config::Config;
