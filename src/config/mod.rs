//! Configuration loading and management for the Severance Engine.
//!
//! The engine has two policy parameters: the earliest eligible start date
//! and the minimum wage used when a caller supplies no salary. Both have
//! documented defaults and can be overridden from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use severance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/severance.yaml").unwrap().into_config();
//! println!("Earliest eligible date: {}", config.earliest_eligible_date);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_MINIMUM_WAGE, EngineConfig, earliest_eligible_date_2020, earliest_eligible_date_2023,
};
