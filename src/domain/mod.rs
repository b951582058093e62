//! Domain types shared by the repository and service layers.

pub mod citizen;
pub mod profile;
pub mod types;
