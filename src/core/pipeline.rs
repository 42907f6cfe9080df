use crate::core::{ChartData, ConfigProvider, DataSource, Observation, Pipeline};
use crate::domain::model::{CountrySeries, CountrySummary, Period, PeriodMean, TrendLine};
use crate::render;
use crate::utils::error::{Result, VizError};
use std::fs;
use std::path::PathBuf;

pub const MEXICO: &str = "Mexico";
pub const ARGENTINA: &str = "Argentina";

/// Rows before this year are dropped from both countries.
pub const BASE_YEAR: i32 = 1980;

/// Inclusive window for the contemporary-era panel and its trend fit.
pub const RECENT_WINDOW: (i32, i32) = (2015, 2024);

/// Fixed periods for the per-period average panel, bounds inclusive.
pub static PERIODS: [Period; 4] = [
    Period {
        start: 1980,
        end: 1989,
        label: "Lost Decade",
    },
    Period {
        start: 1990,
        end: 1999,
        label: "Neoliberal Reforms",
    },
    Period {
        start: 2000,
        end: 2009,
        label: "Post-Reform",
    },
    Period {
        start: 2010,
        end: 2024,
        label: "Contemporary",
    },
];

pub struct ChartPipeline<S: DataSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: DataSource, C: ConfigProvider> ChartPipeline<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }
}

fn summarize(country: &str, rows: &[Observation]) -> Result<CountrySummary> {
    let series = CountrySeries::from_observations(country, rows, BASE_YEAR);
    if series.is_empty() {
        return Err(VizError::EmptySelectionError {
            country: country.to_string(),
        });
    }

    let changes = series.year_over_year();
    let recent = series.window(RECENT_WINDOW.0, RECENT_WINDOW.1);
    let trend = TrendLine::fit(recent.points());
    if trend.is_none() {
        tracing::warn!(
            "Not enough {}-{} data for {}, skipping its trend line",
            RECENT_WINDOW.0,
            RECENT_WINDOW.1,
            country
        );
    }

    let period_means = PERIODS
        .iter()
        .map(|period| PeriodMean {
            label: period.label,
            start: period.start,
            end: period.end,
            mean: series.window(period.start, period.end).mean(),
        })
        .collect();

    Ok(CountrySummary {
        series,
        changes,
        recent,
        trend,
        period_means,
    })
}

impl<S: DataSource, C: ConfigProvider> Pipeline for ChartPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Observation>> {
        tracing::debug!(
            "Reading observations from {}",
            self.config.data_path().display()
        );
        self.source.read_observations()
    }

    fn transform(&self, rows: Vec<Observation>) -> Result<ChartData> {
        let mexico = summarize(MEXICO, &rows)?;
        let argentina = summarize(ARGENTINA, &rows)?;

        tracing::debug!(
            "Filtered {} Mexico rows and {} Argentina rows from {} total",
            mexico.series.len(),
            argentina.series.len(),
            rows.len()
        );

        Ok(ChartData { mexico, argentina })
    }

    fn load(&self, data: ChartData) -> Result<PathBuf> {
        let output_path = self.config.output_path().to_path_buf();

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }

        render::render_dashboard(&data, &output_path)?;
        Ok(output_path)
    }
}
