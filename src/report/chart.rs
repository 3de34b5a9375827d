//! Bar charts of sign quantities.
//!
//! One PNG per sign category, drawn with the [`plotters`] bitmap backend. Each
//! bar carries its count as a label and the y axis uses a fixed, category
//! specific tick step.

use std::ops::Range;
use std::path::Path;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use thiserror::Error;

use crate::color::generate_palette;
use crate::data::model::{SignCategory, Tally};

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Nothing to draw: {0}")]
    Empty(String),
}

type Result<T> = core::result::Result<T, ChartError>;

/// Layout and labelling of one category chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSpec {
    pub title: &'static str,
    pub x_label: &'static str,
    pub file_name: &'static str,
    /// Distance between y axis ticks.
    pub tick_step: u64,
    /// Canvas size in pixels.
    pub size: (u32, u32),
    /// Font size of the per-bar value labels.
    pub value_font: f64,
}

impl ChartSpec {
    pub fn for_category(category: SignCategory) -> Self {
        match category {
            SignCategory::Letter => ChartSpec {
                title: "Letter quantity",
                x_label: "Letters",
                file_name: "letters_quantity.png",
                tick_step: 500,
                size: (2800, 1000),
                value_font: 14.0,
            },
            SignCategory::Digit => ChartSpec {
                title: "Number quantity",
                x_label: "Numbers",
                file_name: "numbers_quantity.png",
                tick_step: 50,
                size: (1280, 960),
                value_font: 18.0,
            },
            SignCategory::Other => ChartSpec {
                title: "Special sign quantity",
                x_label: "Special sign",
                file_name: "special_sign_quantity.png",
                tick_step: 100,
                size: (1280, 960),
                value_font: 18.0,
            },
        }
    }
}

/// Y axis tick positions `0, step, 2*step, ...` up to and including `max`.
pub fn y_ticks(max: u64, step: u64) -> Vec<u64> {
    let step = step.max(1);
    (0..=max / step).map(|i| i * step).collect()
}

/// Upper bound of the y axis: one tick step above the tallest bar, leaving
/// room for its value label.
pub fn y_axis_top(max: u64, step: u64) -> u64 {
    let step = step.max(1);
    (max / step + 1) * step
}

/// X axis range for `bars` bars.
///
/// Integer ranges are inclusive once segmented, so `0..bars - 1` yields
/// exactly one segment per bar. `bars` must be non-zero.
pub fn bar_axis(bars: usize) -> Range<usize> {
    0..bars.saturating_sub(1)
}

/// Render `tally` as a bar chart and save it as PNG at `output_path`.
///
/// Bars follow the tally order (most frequent first).
pub fn render_bar_chart(tally: &Tally, spec: &ChartSpec, output_path: &Path) -> Result<()> {
    if tally.is_empty() {
        return Err(ChartError::Empty(spec.title.to_string()));
    }

    let entries = tally.entries();
    let labels: Vec<String> = entries.iter().map(|(c, _)| c.to_string()).collect();
    let colors = generate_palette(entries.len());

    let y_top = y_axis_top(tally.max_count(), spec.tick_step);
    let ticks = y_ticks(y_top, spec.tick_step);

    let root = BitMapBackend::new(output_path, spec.size).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(spec.title, ("sans-serif", 36))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(
            bar_axis(entries.len()).into_segmented(),
            (0u64..y_top).with_key_points(ticks.clone()),
        )
        .map_err(|e| ChartError::ChartConfig(e.to_string()))?;

    let x_formatter = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(entries.len())
        .y_labels(ticks.len())
        .x_label_formatter(&x_formatter)
        .x_desc(spec.x_label)
        .y_desc("Quantity")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 24))
        .draw()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    chart
        .draw_series(entries.iter().enumerate().map(|(i, &(_, count))| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0),
                    (SegmentValue::Exact(i + 1), count),
                ],
                colors[i].filled(),
            );
            bar.set_margin(0, 0, 3, 3);
            bar
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    let value_style = TextStyle::from(("sans-serif", spec.value_font).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom));

    chart
        .draw_series(entries.iter().enumerate().map(|(i, &(_, count))| {
            Text::new(
                count.to_string(),
                (SegmentValue::CenterOf(i), count),
                value_style.clone(),
            )
        }))
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| ChartError::Drawing(e.to_string()))?;

    Ok(())
}
