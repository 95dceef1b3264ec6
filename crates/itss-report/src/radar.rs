//! Radar (spider) chart of the five component scores, rendered as SVG.
//!
//! Geometry follows polar-plot conventions: the first axis points east and
//! axes advance counter-clockwise in equal steps. The radial domain is fixed
//! at [0, 1] and carries no tick labels.

use std::f64::consts::TAU;
use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};
use itss_models::{ChartConfig, Component, ComponentScores};
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

use crate::error::RenderError;

/// Radii of the dashed grid rings, as fractions of the outer radius.
const GRID_RINGS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];
/// Axis labels sit just outside the outer ring.
const LABEL_OFFSET: f64 = 1.12;
const LABEL_FONT_SIZE: u32 = 12;
const TITLE_FONT_SIZE: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One spoke of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarAxis {
    pub component: Component,
    /// Counter-clockwise from east, in radians.
    pub angle: f64,
    pub value: f64,
    /// Where the value lands on this spoke.
    pub vertex: Point,
    /// Outer end of the spoke.
    pub tip: Point,
    pub label_anchor: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarChart {
    pub size: f64,
    pub center: Point,
    pub radius: f64,
    pub axes: Vec<RadarAxis>,
    config: ChartConfig,
}

impl RadarChart {
    pub fn from_scores(scores: &ComponentScores, config: &ChartConfig) -> Self {
        let size = f64::from(config.size_px);
        let center = Point {
            x: size / 2.0,
            y: size * 0.53,
        };
        let radius = size * 0.30;
        let step = TAU / Component::ALL.len() as f64;

        let axes = scores
            .iter()
            .enumerate()
            .map(|(i, (component, score))| {
                let angle = step * i as f64;
                let value = score.to_f64().unwrap_or(0.0).clamp(0.0, 1.0);
                RadarAxis {
                    component,
                    angle,
                    value,
                    vertex: polar(center, radius * value, angle),
                    tip: polar(center, radius, angle),
                    label_anchor: polar(center, radius * LABEL_OFFSET, angle),
                }
            })
            .collect();

        Self {
            size,
            center,
            radius,
            axes,
            config: config.clone(),
        }
    }

    /// Polygon vertices with the first vertex repeated at the end.
    pub fn closed_vertices(&self) -> Vec<Point> {
        let mut vertices: Vec<Point> = self.axes.iter().map(|a| a.vertex).collect();
        if let Some(first) = vertices.first().copied() {
            vertices.push(first);
        }
        vertices
    }

    pub fn to_svg(&self) -> Result<String, RenderError> {
        let cfg = &self.config;
        let size = self.size;
        let mut svg = String::new();

        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}" font-family="sans-serif">"#
        )?;
        writeln!(
            svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            attr(&cfg.figure_background)
        )?;
        // Plot area, drawn without an outline
        writeln!(
            svg,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" stroke="none"/>"#,
            self.center.x,
            self.center.y,
            self.radius,
            attr(&cfg.plot_background)
        )?;

        writeln!(
            svg,
            r#"  <g class="grid" fill="none" stroke="{}" stroke-opacity="{}" stroke-dasharray="4 4">"#,
            attr(&cfg.grid_color),
            cfg.grid_opacity
        )?;
        for ring in GRID_RINGS {
            writeln!(
                svg,
                r#"    <circle cx="{:.2}" cy="{:.2}" r="{:.2}"/>"#,
                self.center.x,
                self.center.y,
                self.radius * ring
            )?;
        }
        for axis in &self.axes {
            writeln!(
                svg,
                r#"    <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
                self.center.x, self.center.y, axis.tip.x, axis.tip.y
            )?;
        }
        writeln!(svg, "  </g>")?;

        let points = points_attr(&self.closed_vertices());
        writeln!(
            svg,
            r#"  <polygon class="area" points="{points}" fill="{}" fill-opacity="{}" stroke="none"/>"#,
            attr(&cfg.line_color),
            cfg.fill_opacity
        )?;
        writeln!(
            svg,
            r#"  <polyline class="outline" points="{points}" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round"/>"#,
            attr(&cfg.line_color),
            cfg.line_width
        )?;

        writeln!(svg, r#"  <g class="markers" fill="{}">"#, attr(&cfg.line_color))?;
        for axis in &self.axes {
            writeln!(
                svg,
                r#"    <circle cx="{:.2}" cy="{:.2}" r="{}"/>"#,
                axis.vertex.x, axis.vertex.y, cfg.marker_radius
            )?;
        }
        writeln!(svg, "  </g>")?;

        writeln!(
            svg,
            r#"  <g class="labels" font-size="{LABEL_FONT_SIZE}" font-weight="bold" fill="{}">"#,
            attr(&cfg.title_color)
        )?;
        for axis in &self.axes {
            writeln!(
                svg,
                r#"    <text x="{:.2}" y="{:.2}" text-anchor="{}" dominant-baseline="middle">{}</text>"#,
                axis.label_anchor.x,
                axis.label_anchor.y,
                text_anchor(axis.angle),
                encode_text(axis.component.axis_label())
            )?;
        }
        writeln!(svg, "  </g>")?;

        writeln!(
            svg,
            r#"  <text class="title" x="{:.2}" y="{:.2}" text-anchor="middle" font-size="{TITLE_FONT_SIZE}" font-weight="bold" fill="{}">{}</text>"#,
            size / 2.0,
            size * 0.07,
            attr(&cfg.title_color),
            encode_text(&cfg.title)
        )?;
        writeln!(svg, "</svg>")?;

        debug!(bytes = svg.len(), "Rendered radar chart");
        Ok(svg)
    }
}

fn polar(center: Point, r: f64, angle: f64) -> Point {
    // SVG y grows downward
    Point {
        x: center.x + r * angle.cos(),
        y: center.y - r * angle.sin(),
    }
}

fn text_anchor(angle: f64) -> &'static str {
    let cos = angle.cos();
    if cos > 0.1 {
        "start"
    } else if cos < -0.1 {
        "end"
    } else {
        "middle"
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn attr(value: &str) -> std::borrow::Cow<'_, str> {
    encode_double_quoted_attribute(value)
}
