//! Database row models and server configuration.

pub mod citizen;
#[cfg(feature = "server")]
pub mod config;
