//! SVG size-vs-time chart of a result record
//!
//! Medians are drawn as a solid blue line with point markers, means as a
//! dotted red line. The title carries the analyzed function and the inferred
//! notation.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt::{self, Write};
use std::fs;
use std::path::{Path, PathBuf};

use asymptote_core::export::file_stem;
use asymptote_core::ResultRecord;
use log::info;
use thiserror::Error;

use crate::scale::LinearScale;

const MEDIAN_COLOR: &str = "#1f3fbf";
const MEAN_COLOR: &str = "#d62728";

/// Renders result records as SVG documents
#[derive(Debug, Clone, Copy)]
pub struct ChartRenderer {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            margin: 70,
        }
    }
}

impl ChartRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Render the record as an SVG document
    pub fn render(&self, record: &ResultRecord) -> Result<String, ChartError> {
        let measurements = record.measurements();
        if measurements.is_empty() {
            return Err(ChartError::EmptyRecord(record.analyzed_function().to_owned()));
        }

        let (width, height, margin) = (self.width as f64, self.height as f64, self.margin as f64);
        let x_range = (margin, width - margin / 2.0);
        let y_range = (height - margin, margin);

        let sizes: Vec<f64> = measurements.sizes().iter().map(|&s| s as f64).collect();
        let x_scale = LinearScale::fit(sizes.iter().copied(), x_range)
            .ok_or_else(|| ChartError::EmptyRecord(record.analyzed_function().to_owned()))?;
        let y_scale = LinearScale::fit(
            measurements.medians().iter().chain(measurements.means()).copied(),
            y_range,
        )
        .ok_or_else(|| ChartError::NoFiniteTimes(record.analyzed_function().to_owned()))?;

        let mut svg = String::new();
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
            w = self.width,
            h = self.height
        )?;
        writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#)?;

        self.write_axes(&mut svg, x_range, y_range)?;
        self.write_labels(&mut svg, record, &x_scale, &y_scale, y_range)?;

        let medians: Vec<(f64, f64)> = sizes
            .iter()
            .zip(measurements.medians())
            .map(|(&x, &y)| (x_scale.map(x), y_scale.map(y)))
            .collect();
        let means: Vec<(f64, f64)> = sizes
            .iter()
            .zip(measurements.means())
            .map(|(&x, &y)| (x_scale.map(x), y_scale.map(y)))
            .collect();

        write_polyline(&mut svg, &medians, MEDIAN_COLOR, None)?;
        write_markers(&mut svg, &medians, MEDIAN_COLOR)?;
        write_polyline(&mut svg, &means, MEAN_COLOR, Some("2,4"))?;
        write_markers(&mut svg, &means, MEAN_COLOR)?;

        writeln!(svg, "</svg>")?;
        Ok(svg)
    }

    /// Write `"<analyzed function> - NNN.svg"` into `directory`
    pub fn save(
        &self,
        record: &ResultRecord,
        directory: impl AsRef<Path>,
        id: u32,
    ) -> Result<PathBuf, ChartError> {
        let svg = self.render(record)?;
        let directory = directory.as_ref();
        fs::create_dir_all(directory)?;

        let path = directory.join(format!("{}.svg", file_stem(record.analyzed_function(), id)));
        fs::write(&path, svg)?;

        info!("Chart for {} written to {}", record.analyzed_function(), path.display());
        Ok(path)
    }

    fn write_axes(&self, svg: &mut String, x_range: (f64, f64), y_range: (f64, f64)) -> fmt::Result {
        writeln!(
            svg,
            r#"<line x1="{x0}" y1="{y0}" x2="{x1}" y2="{y0}" stroke="black"/>"#,
            x0 = x_range.0,
            x1 = x_range.1,
            y0 = y_range.0
        )?;
        writeln!(
            svg,
            r#"<line x1="{x0}" y1="{y0}" x2="{x0}" y2="{y1}" stroke="black"/>"#,
            x0 = x_range.0,
            y0 = y_range.0,
            y1 = y_range.1
        )
    }

    fn write_labels(
        &self,
        svg: &mut String,
        record: &ResultRecord,
        x_scale: &LinearScale,
        y_scale: &LinearScale,
        y_range: (f64, f64),
    ) -> fmt::Result {
        let parameters = record.parameters();
        let center = self.width as f64 / 2.0;
        let last_order = parameters.initial_order + parameters.order_count.saturating_sub(1);

        writeln!(
            svg,
            r#"<text x="{center}" y="24" text-anchor="middle" font-size="16">{}</text>"#,
            escape(record.analyzed_function())
        )?;
        writeln!(
            svg,
            r#"<text x="{center}" y="44" text-anchor="middle" font-size="14">{}</text>"#,
            escape(record.notation())
        )?;
        writeln!(
            svg,
            r#"<text x="{center}" y="{}" text-anchor="middle" font-size="12">Input size: {base}^{first} to {base}^{last_order}</text>"#,
            self.height as f64 - 12.0,
            base = parameters.magnitude_base,
            first = parameters.initial_order,
        )?;
        writeln!(
            svg,
            r#"<text x="16" y="{mid}" text-anchor="middle" font-size="12" transform="rotate(-90 16 {mid})">Measured time: {} runs of {} executions</text>"#,
            parameters.repeat_count,
            parameters.execution_quantity,
            mid = self.height as f64 / 2.0,
        )?;

        for &size in record.measurements().sizes() {
            writeln!(
                svg,
                r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="10">{}</text>"#,
                x_scale.map(size as f64),
                y_range.0 + 16.0,
                size
            )?;
        }

        let (low, high) = y_scale.domain();
        for value in [low, high] {
            writeln!(
                svg,
                r#"<text x="{:.2}" y="{:.2}" text-anchor="end" font-size="10">{:.2e}s</text>"#,
                self.margin as f64 - 6.0,
                y_scale.map(value),
                value
            )?;
        }
        Ok(())
    }
}

fn write_polyline(
    svg: &mut String,
    points: &[(f64, f64)],
    color: &str,
    dash: Option<&str>,
) -> fmt::Result {
    let coordinates: Vec<String> = points
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(x, y)| format!("{:.2},{:.2}", x, y))
        .collect();
    let dash = dash
        .map(|pattern| format!(r#" stroke-dasharray="{}""#, pattern))
        .unwrap_or_default();

    writeln!(
        svg,
        r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2"{}/>"#,
        coordinates.join(" "),
        color,
        dash
    )
}

fn write_markers(svg: &mut String, points: &[(f64, f64)], color: &str) -> fmt::Result {
    for (x, y) in points.iter().filter(|(x, y)| x.is_finite() && y.is_finite()) {
        writeln!(svg, r#"<circle cx="{:.2}" cy="{:.2}" r="3.5" fill="{}"/>"#, x, y, color)?;
    }
    Ok(())
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Chart rendering errors
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Record for {0} has no measurements")]
    EmptyRecord(String),

    #[error("Record for {0} has no finite times to plot")]
    NoFiniteTimes(String),

    #[error("Failed to format chart: {0}")]
    Format(#[from] fmt::Error),

    #[error("Failed to write chart: {0}")]
    Io(#[from] std::io::Error),
}
