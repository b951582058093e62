//! Searchable citizen registry over a runtime-reconfigurable PostgreSQL target.

#[cfg(feature = "server")]
mod app;
pub mod config_store;
pub mod db;
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
pub mod models;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
pub use app::{build_repository, configure, run};
