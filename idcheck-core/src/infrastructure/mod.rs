// idcheck-core/src/infrastructure/mod.rs

pub mod adapters;
pub mod config;
pub mod dataset;
pub mod error;
pub mod fs;
