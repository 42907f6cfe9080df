mod panels;
mod theme;

use crate::domain::model::ChartData;
use crate::utils::error::{Result, VizError};
use plotters::prelude::*;
use std::path::Path;

/// Canvas size of the rendered dashboard, in pixels.
pub const IMAGE_SIZE: (u32, u32) = (1600, 1200);

const SUPTITLE: &str = "Political Legacies of Neoliberal Reform: Mexico vs Argentina";

/// Draws the four-panel dashboard and writes it to `path` as a PNG.
pub fn render_dashboard(data: &ChartData, path: &Path) -> Result<()> {
    draw(data, path).map_err(|e| VizError::RenderError {
        message: e.to_string(),
    })
}

fn draw(data: &ChartData, path: &Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, IMAGE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let root = root.titled(SUPTITLE, theme::suptitle_font())?;
    let areas = root.split_evenly((2, 2));

    panels::development(&areas[0], data)?;
    panels::stability(&areas[1], data)?;
    panels::populist_era(&areas[2], data)?;
    panels::period_means(&areas[3], data)?;

    root.present()?;
    Ok(())
}
