use crate::domain::model::{ChartData, Observation};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub trait DataSource {
    fn read_observations(&self) -> Result<Vec<Observation>>;
}

pub trait ConfigProvider {
    fn data_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Observation>>;
    fn transform(&self, rows: Vec<Observation>) -> Result<ChartData>;
    fn load(&self, data: ChartData) -> Result<PathBuf>;
}
