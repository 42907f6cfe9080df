pub mod source;

pub use source::CsvFileSource;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ert-viz")]
#[command(about = "Renders comparative democracy-index charts for Mexico and Argentina")]
pub struct CliConfig {
    #[arg(long, default_value = "Data/ert.csv")]
    pub data_path: PathBuf,

    #[arg(long, default_value = "ert_graph.png")]
    pub output_path: PathBuf,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn data_path(&self) -> &Path {
        &self.data_path
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_path", &self.data_path)?;
        validate_file_extension("data_path", &self.data_path, "csv")?;
        validate_path("output_path", &self.output_path)?;
        validate_file_extension("output_path", &self.output_path, "png")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(data: &str, output: &str) -> CliConfig {
        CliConfig {
            data_path: PathBuf::from(data),
            output_path: PathBuf::from(output),
            verbose: false,
        }
    }

    #[test]
    fn test_default_paths_validate() {
        assert!(config("Data/ert.csv", "ert_graph.png").validate().is_ok());
    }

    #[test]
    fn test_wrong_extensions_rejected() {
        assert!(config("Data/ert.json", "ert_graph.png").validate().is_err());
        assert!(config("Data/ert.csv", "ert_graph.svg").validate().is_err());
        assert!(config("", "ert_graph.png").validate().is_err());
    }
}
