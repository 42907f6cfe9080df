pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{ChartData, Observation};
pub use crate::domain::ports::{ConfigProvider, DataSource, Pipeline};
pub use crate::utils::error::Result;
