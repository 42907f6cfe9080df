pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

pub use crate::config::{CliConfig, CsvFileSource};
pub use crate::core::{engine::VizEngine, pipeline::ChartPipeline};
pub use crate::utils::error::{Result, VizError};
