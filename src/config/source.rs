use crate::domain::model::Observation;
use crate::domain::ports::DataSource;
use crate::utils::error::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl DataSource for CsvFileSource {
    fn read_observations(&self) -> Result<Vec<Observation>> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut rows = Vec::new();

        for record in reader.deserialize() {
            let row: Observation = record?;
            rows.push(row);
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_reads_only_the_needed_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ert.csv");

        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "country_name,country_id,year,v2x_polyarchy,v2x_regime").unwrap();
        writeln!(file, "Mexico,3,1980,0.301,1").unwrap();
        writeln!(file, "Argentina,37,1980,0.292,1").unwrap();
        drop(file);

        let source = CsvFileSource::new(path);
        let rows = source.read_observations().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].country_name, "Mexico");
        assert_eq!(rows[0].year, 1980);
        assert!((rows[0].v2x_polyarchy - 0.301).abs() < 1e-12);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let source = CsvFileSource::new(PathBuf::from("does/not/exist.csv"));
        assert!(source.read_observations().is_err());
    }
}
