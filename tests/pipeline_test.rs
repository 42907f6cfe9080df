use ert_viz::domain::ports::Pipeline;
use ert_viz::utils::error::VizError;
use ert_viz::{ChartPipeline, CliConfig, CsvFileSource, VizEngine};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

fn mexico_value(year: i32) -> f64 {
    0.30 + 0.010 * (year - 1980) as f64
}

fn argentina_value(year: i32) -> f64 {
    0.80 - 0.005 * (year - 1980) as f64
}

// Fixture in the shape of the real ERT file: extra columns, a third country,
// and rows before 1980 that the transform must drop.
fn write_fixture(path: &Path) {
    let mut csv = String::from("country_name,country_id,year,v2x_polyarchy,v2x_regime\n");
    for year in 1975..=2024 {
        let mexico = if year < 1980 { 0.250 } else { mexico_value(year) };
        let argentina = if year < 1980 { 0.900 } else { argentina_value(year) };
        csv.push_str(&format!("Mexico,3,{},{:.3},1\n", year, mexico));
        csv.push_str(&format!("Argentina,37,{},{:.3},1\n", year, argentina));
        csv.push_str(&format!("Chile,7,{},0.500,2\n", year));
    }
    fs::write(path, csv).unwrap();
}

fn pipeline_for(
    data_path: PathBuf,
    output_path: PathBuf,
) -> ChartPipeline<CsvFileSource, CliConfig> {
    let config = CliConfig {
        data_path: data_path.clone(),
        output_path,
        verbose: false,
    };
    ChartPipeline::new(CsvFileSource::new(data_path), config)
}

#[test]
fn test_end_to_end_render_from_fixture_csv() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("ert.csv");
    let output_path = temp_dir.path().join("charts").join("ert_graph.png");
    write_fixture(&data_path);

    let engine = VizEngine::new(pipeline_for(data_path, output_path.clone()));
    let result = engine.run();

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), output_path);

    let bytes = fs::read(&output_path).unwrap();
    assert!(bytes.len() > PNG_MAGIC.len());
    assert_eq!(&bytes[..PNG_MAGIC.len()], &PNG_MAGIC);
}

#[test]
fn test_transform_keeps_only_expected_countries_and_years() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("ert.csv");
    write_fixture(&data_path);

    let pipeline = pipeline_for(data_path, temp_dir.path().join("out.png"));
    let rows = pipeline.extract().unwrap();
    let data = pipeline.transform(rows).unwrap();

    assert_eq!(data.mexico.series.country(), "Mexico");
    assert_eq!(data.argentina.series.country(), "Argentina");
    assert_eq!(data.mexico.series.len(), 45);
    assert_eq!(data.argentina.series.len(), 45);

    for series in [&data.mexico.series, &data.argentina.series] {
        let years: Vec<i32> = series.points().iter().map(|&(year, _)| year).collect();
        assert!(years.iter().all(|&year| year >= 1980));
        assert!(years.windows(2).all(|pair| pair[0] < pair[1]));
    }

    // 2015-2024 window and its fitted trend
    assert_eq!(data.mexico.recent.len(), 10);
    let trend = data.mexico.trend.unwrap();
    assert!((trend.slope - 0.010).abs() < 1e-6);
    let trend = data.argentina.trend.unwrap();
    assert!((trend.slope + 0.005).abs() < 1e-6);
}

#[test]
fn test_period_means_match_hand_computed_averages() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("ert.csv");
    write_fixture(&data_path);

    let pipeline = pipeline_for(data_path, temp_dir.path().join("out.png"));
    let rows = pipeline.extract().unwrap();
    let data = pipeline.transform(rows).unwrap();

    let expected: Vec<(&str, f64, f64)> = vec![
        ("Lost Decade", mean_over(1980, 1989, mexico_value), mean_over(1980, 1989, argentina_value)),
        ("Neoliberal Reforms", mean_over(1990, 1999, mexico_value), mean_over(1990, 1999, argentina_value)),
        ("Post-Reform", mean_over(2000, 2009, mexico_value), mean_over(2000, 2009, argentina_value)),
        ("Contemporary", mean_over(2010, 2024, mexico_value), mean_over(2010, 2024, argentina_value)),
    ];

    for (i, &(label, mexico_mean, argentina_mean)) in expected.iter().enumerate() {
        assert_eq!(data.mexico.period_means[i].label, label);
        assert!((data.mexico.period_means[i].mean.unwrap() - mexico_mean).abs() < 1e-6);
        assert!((data.argentina.period_means[i].mean.unwrap() - argentina_mean).abs() < 1e-6);
    }
}

#[test]
fn test_transform_fails_when_a_country_is_missing() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("ert.csv");

    let mut csv = String::from("country_name,country_id,year,v2x_polyarchy,v2x_regime\n");
    for year in 1980..=2024 {
        csv.push_str(&format!("Mexico,3,{},{:.3},1\n", year, mexico_value(year)));
    }
    fs::write(&data_path, csv).unwrap();

    let pipeline = pipeline_for(data_path, temp_dir.path().join("out.png"));
    let rows = pipeline.extract().unwrap();
    let result = pipeline.transform(rows);

    assert!(matches!(
        result,
        Err(VizError::EmptySelectionError { ref country }) if country == "Argentina"
    ));
}

fn mean_over(start: i32, end: i32, value: fn(i32) -> f64) -> f64 {
    let sum: f64 = (start..=end).map(value).sum();
    sum / (end - start + 1) as f64
}
