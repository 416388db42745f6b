pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::toml_config::TomlConfig;
pub use crate::core::runner::{RunSummary, Runner};
pub use crate::core::{Context, Host};
pub use domain::model::{Object, Section, Value};
pub use utils::error::{Result, TourError};
