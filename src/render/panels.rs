use super::theme::{panel_title_font, ARGENTINA_COLOR, ERA_BANDS, MEXICO_COLOR};
use crate::domain::model::{ChartData, TrendLine};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::error::Error;
use std::ops::Range;

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;
type PanelResult = std::result::Result<(), Box<dyn Error>>;

const BAR_HALF_WIDTH: f64 = 0.4;
const GROUPED_BAR_WIDTH: f64 = 0.35;

/// Top-left: index level by year with shaded historical eras behind the lines.
pub(super) fn development(area: &Area<'_>, data: &ChartData) -> PanelResult {
    let mexico = data.mexico.series.points();
    let argentina = data.argentina.series.points();

    let years = year_span(&[mexico, argentina]);
    let values = value_span(&[mexico, argentina], 0.08);

    let mut chart = ChartBuilder::on(area)
        .caption("Democratic Development", panel_title_font())
        .margin(14)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(years, values.clone())?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Electoral Democracy Index")
        .light_line_style(BLACK.mix(0.08))
        .label_style(("sans-serif", 14))
        .draw()?;

    // eras first so the series lines stay on top
    for band in ERA_BANDS.iter() {
        let color = band.color;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(band.start, values.start), (band.end, values.end)],
                color.mix(0.2).filled(),
            )))?
            .label(band.label)
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.mix(0.2).filled())
            });
    }

    chart
        .draw_series(LineSeries::new(
            mexico.iter().copied(),
            MEXICO_COLOR.stroke_width(3),
        ))?
        .label("Mexico")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 18, y)], MEXICO_COLOR.stroke_width(3))
        });

    chart
        .draw_series(LineSeries::new(
            argentina.iter().copied(),
            ARGENTINA_COLOR.stroke_width(3),
        ))?
        .label("Argentina")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 18, y)], ARGENTINA_COLOR.stroke_width(3))
        });

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.4))
        .position(SeriesLabelPosition::LowerRight)
        .label_font(("sans-serif", 13))
        .draw()?;

    Ok(())
}

/// Top-right: year-over-year index changes as overlaid semi-transparent bars.
pub(super) fn stability(area: &Area<'_>, data: &ChartData) -> PanelResult {
    let mexico = data.mexico.changes.as_slice();
    let argentina = data.argentina.changes.as_slice();

    let years = year_span(&[mexico, argentina]);
    let x_range = (years.start - 1) as f64..(years.end + 1) as f64;
    let values = value_span(&[mexico, argentina], 0.15);
    let y_range = values.start.min(0.0)..values.end.max(0.0);

    let mut chart = ChartBuilder::on(area)
        .caption("Democratic Stability: Year-to-Year Changes", panel_title_font())
        .margin(14)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Annual Change in Democracy Index")
        .light_line_style(BLACK.mix(0.08))
        .label_style(("sans-serif", 14))
        .draw()?;

    chart
        .draw_series(mexico.iter().map(|&(year, delta)| {
            Rectangle::new(
                [
                    (year as f64 - BAR_HALF_WIDTH, 0.0),
                    (year as f64 + BAR_HALF_WIDTH, delta),
                ],
                MEXICO_COLOR.mix(0.7).filled(),
            )
        }))?
        .label("Mexico")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 6), (x + 12, y + 6)], MEXICO_COLOR.mix(0.7).filled())
        });

    chart
        .draw_series(argentina.iter().map(|&(year, delta)| {
            Rectangle::new(
                [
                    (year as f64 - BAR_HALF_WIDTH, 0.0),
                    (year as f64 + BAR_HALF_WIDTH, delta),
                ],
                ARGENTINA_COLOR.mix(0.7).filled(),
            )
        }))?
        .label("Argentina")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 6), (x + 12, y + 6)], ARGENTINA_COLOR.mix(0.7).filled())
        });

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.4))
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", 13))
        .draw()?;

    Ok(())
}

/// Bottom-left: 2015-2024 trajectories with markers and dashed trend lines.
pub(super) fn populist_era(area: &Area<'_>, data: &ChartData) -> PanelResult {
    let mexico = data.mexico.recent.points();
    let argentina = data.argentina.recent.points();

    let years = year_span(&[mexico, argentina]);
    let values = value_span(&[mexico, argentina], 0.1);

    let mut chart = ChartBuilder::on(area)
        .caption("Contemporary Populist Era (2015-2024)", panel_title_font())
        .margin(14)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(years.clone(), values)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("Democracy Index")
        .light_line_style(BLACK.mix(0.08))
        .label_style(("sans-serif", 14))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            mexico.iter().copied(),
            MEXICO_COLOR.stroke_width(3),
        ))?
        .label("Mexico (AMLO era)")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 18, y)], MEXICO_COLOR.stroke_width(3))
        });
    chart.draw_series(
        mexico
            .iter()
            .map(|&(year, value)| Circle::new((year, value), 4, MEXICO_COLOR.filled())),
    )?;
    if let Some(trend) = data.mexico.trend {
        chart.draw_series(DashedLineSeries::new(
            trend_points(trend, &years),
            8,
            6,
            MEXICO_COLOR.mix(0.7).stroke_width(2),
        ))?;
    }

    chart
        .draw_series(LineSeries::new(
            argentina.iter().copied(),
            ARGENTINA_COLOR.stroke_width(3),
        ))?
        .label("Argentina (Milei era)")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 18, y)], ARGENTINA_COLOR.stroke_width(3))
        });
    chart.draw_series(argentina.iter().map(|&(year, value)| {
        EmptyElement::at((year, value))
            + Rectangle::new([(-4, -4), (4, 4)], ARGENTINA_COLOR.filled())
    }))?;
    if let Some(trend) = data.argentina.trend {
        chart.draw_series(DashedLineSeries::new(
            trend_points(trend, &years),
            8,
            6,
            ARGENTINA_COLOR.mix(0.7).stroke_width(2),
        ))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.4))
        .position(SeriesLabelPosition::LowerLeft)
        .label_font(("sans-serif", 13))
        .draw()?;

    Ok(())
}

/// Bottom-right: grouped bars of the mean index per historical period.
pub(super) fn period_means(area: &Area<'_>, data: &ChartData) -> PanelResult {
    let labels: Vec<&'static str> = data.mexico.period_means.iter().map(|p| p.label).collect();

    let max = data
        .mexico
        .period_means
        .iter()
        .chain(data.argentina.period_means.iter())
        .filter_map(|p| p.mean)
        .fold(0.0f64, f64::max);
    let y_top = if max > 0.0 { max * 1.15 } else { 1.0 };

    let mut chart = ChartBuilder::on(area)
        .caption("Average Democratic Quality by Period", panel_title_font())
        .margin(14)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d(-0.6f64..(labels.len() as f64 - 0.4), 0.0..y_top)?;

    chart
        .configure_mesh()
        .x_desc("Historical Periods")
        .y_desc("Average Democracy Index")
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&|x| {
            let idx = x.round();
            if (x - idx).abs() < 0.05 && idx >= 0.0 && (idx as usize) < labels.len() {
                labels[idx as usize].to_string()
            } else {
                String::new()
            }
        })
        .light_line_style(BLACK.mix(0.08))
        .label_style(("sans-serif", 13))
        .draw()?;

    let mexico_bars: Vec<Rectangle<(f64, f64)>> = data
        .mexico
        .period_means
        .iter()
        .enumerate()
        .filter_map(|(i, pm)| {
            pm.mean.map(|mean| {
                Rectangle::new(
                    [(i as f64 - GROUPED_BAR_WIDTH, 0.0), (i as f64, mean)],
                    MEXICO_COLOR.mix(0.8).filled(),
                )
            })
        })
        .collect();
    chart
        .draw_series(mexico_bars)?
        .label("Mexico")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 6), (x + 12, y + 6)], MEXICO_COLOR.mix(0.8).filled())
        });

    let argentina_bars: Vec<Rectangle<(f64, f64)>> = data
        .argentina
        .period_means
        .iter()
        .enumerate()
        .filter_map(|(i, pm)| {
            pm.mean.map(|mean| {
                Rectangle::new(
                    [(i as f64, 0.0), (i as f64 + GROUPED_BAR_WIDTH, mean)],
                    ARGENTINA_COLOR.mix(0.8).filled(),
                )
            })
        })
        .collect();
    chart
        .draw_series(argentina_bars)?
        .label("Argentina")
        .legend(|(x, y)| {
            Rectangle::new([(x, y - 6), (x + 12, y + 6)], ARGENTINA_COLOR.mix(0.8).filled())
        });

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.4))
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(("sans-serif", 13))
        .draw()?;

    Ok(())
}

fn trend_points(trend: TrendLine, years: &Range<i32>) -> Vec<(i32, f64)> {
    (years.start..=years.end)
        .map(|year| (year, trend.at(year as f64)))
        .collect()
}

fn year_span(sets: &[&[(i32, f64)]]) -> Range<i32> {
    let mut lo = i32::MAX;
    let mut hi = i32::MIN;
    for set in sets {
        for &(year, _) in *set {
            lo = lo.min(year);
            hi = hi.max(year);
        }
    }
    if lo > hi {
        return 1980..2024;
    }
    if lo == hi {
        return (lo - 1)..(hi + 1);
    }
    lo..hi
}

fn value_span(sets: &[&[(i32, f64)]], pad_frac: f64) -> Range<f64> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for set in sets {
        for &(_, value) in *set {
            lo = lo.min(value);
            hi = hi.max(value);
        }
    }
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    let pad = ((hi - lo) * pad_frac).max(0.01);
    (lo - pad)..(hi + pad)
}
