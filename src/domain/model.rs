use serde::Deserialize;

/// One row of the ERT panel dataset. The file carries many more columns;
/// only the ones used by the charts are deserialized, the rest are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Observation {
    pub country_name: String,
    pub year: i32,
    pub v2x_polyarchy: f64,
}

/// A per-country, year-ordered slice of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct CountrySeries {
    country: String,
    points: Vec<(i32, f64)>,
}

impl CountrySeries {
    pub fn from_observations(country: &str, rows: &[Observation], min_year: i32) -> Self {
        let mut points: Vec<(i32, f64)> = rows
            .iter()
            .filter(|row| row.country_name == country && row.year >= min_year)
            .map(|row| (row.year, row.v2x_polyarchy))
            .collect();
        points.sort_by_key(|&(year, _)| year);
        Self {
            country: country.to_string(),
            points,
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn points(&self) -> &[(i32, f64)] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First differences of the index. The first year has no predecessor, so
    /// the change series starts at the second year.
    pub fn year_over_year(&self) -> Vec<(i32, f64)> {
        self.points
            .windows(2)
            .map(|pair| (pair[1].0, pair[1].1 - pair[0].1))
            .collect()
    }

    /// Sub-series restricted to `start..=end`.
    pub fn window(&self, start: i32, end: i32) -> CountrySeries {
        let points = self
            .points
            .iter()
            .copied()
            .filter(|&(year, _)| year >= start && year <= end)
            .collect();
        Self {
            country: self.country.clone(),
            points,
        }
    }

    pub fn mean(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        let sum: f64 = self.points.iter().map(|&(_, value)| value).sum();
        Some(sum / self.points.len() as f64)
    }
}

/// A fixed historical period used for the per-period averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: i32,
    pub end: i32,
    pub label: &'static str,
}

/// Mean index value over one period. `mean` is `None` when the period
/// contains no rows, in which case no bar is drawn for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodMean {
    pub label: &'static str,
    pub start: i32,
    pub end: i32,
    pub mean: Option<f64>,
}

/// Degree-1 least-squares fit over a set of (year, value) points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    /// Returns `None` when fewer than two distinct x positions exist.
    pub fn fit(points: &[(i32, f64)]) -> Option<TrendLine> {
        if points.len() < 2 {
            return None;
        }
        let n = points.len() as f64;
        let sum_x: f64 = points.iter().map(|&(x, _)| x as f64).sum();
        let sum_y: f64 = points.iter().map(|&(_, y)| y).sum();
        let sum_xx: f64 = points.iter().map(|&(x, _)| (x as f64) * (x as f64)).sum();
        let sum_xy: f64 = points.iter().map(|&(x, y)| (x as f64) * y).sum();

        let denom = n * sum_xx - sum_x * sum_x;
        if denom.abs() < f64::EPSILON {
            return None;
        }
        let slope = (n * sum_xy - sum_x * sum_y) / denom;
        let intercept = (sum_y - slope * sum_x) / n;
        Some(TrendLine { slope, intercept })
    }

    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Everything the renderer needs for one country.
#[derive(Debug, Clone)]
pub struct CountrySummary {
    pub series: CountrySeries,
    pub changes: Vec<(i32, f64)>,
    pub recent: CountrySeries,
    pub trend: Option<TrendLine>,
    pub period_means: Vec<PeriodMean>,
}

/// Transform output handed to the render stage.
#[derive(Debug, Clone)]
pub struct ChartData {
    pub mexico: CountrySummary,
    pub argentina: CountrySummary,
}
