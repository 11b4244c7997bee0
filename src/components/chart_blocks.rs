//! SVG rendering for structured chart payloads.
//!
//! Each block renders into a fixed-size card; series charts share a small
//! set of pure geometry helpers so the math is testable without a DOM.

#[cfg(test)]
#[path = "chart_blocks_test.rs"]
mod chart_blocks_test;

use leptos::prelude::*;

use artifact::payload::{Block, BlockKind, SeriesPoint};

/// Drawing area of one chart card, in SVG user units.
const CHART_W: f64 = 320.0;
const CHART_H: f64 = 160.0;

/// Fraction of a bar slot left as gap (split evenly on both sides).
const BAR_GAP: f64 = 0.3;

/// Largest value in a series, floored at 1 so an all-zero series still
/// yields a flat baseline instead of dividing by zero.
fn series_max(series: &[SeriesPoint]) -> f64 {
    series.iter().map(|p| p.value).fold(1.0_f64, f64::max)
}

/// Vertical position for a value, measured from the top of the chart.
fn value_y(value: f64, max: f64, height: f64) -> f64 {
    height - (value / max) * height
}

/// `points` attribute for a line chart. A single point is centered
/// horizontally so it still draws.
fn polyline_points(series: &[SeriesPoint], width: f64, height: f64) -> String {
    let max = series_max(series);
    let step = if series.len() > 1 {
        width / (series.len() - 1) as f64
    } else {
        0.0
    };
    series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = if series.len() > 1 { i as f64 * step } else { width / 2.0 };
            let y = value_y(p.value, max, height);
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `points` attribute for an area chart: the line plus the two baseline
/// corners, so the polygon closes along the bottom edge.
fn area_points(series: &[SeriesPoint], width: f64, height: f64) -> String {
    let line = polyline_points(series, width, height);
    format!("{line} {width:.1},{height:.1} 0.0,{height:.1}")
}

/// Geometry of one bar as `(x, y, width, height)`.
fn bar_rect(index: usize, count: usize, value: f64, max: f64, width: f64, height: f64) -> (f64, f64, f64, f64) {
    let slot = width / count as f64;
    let bar_w = slot * (1.0 - BAR_GAP);
    let x = index as f64 * slot + slot * BAR_GAP / 2.0;
    let bar_h = (value / max) * height;
    (x, height - bar_h, bar_w, bar_h)
}

fn series_chart(kind: BlockKind, series: &[SeriesPoint]) -> AnyView {
    let view_box = format!("0 0 {CHART_W} {CHART_H}");
    match kind {
        BlockKind::Area => {
            let points = area_points(series, CHART_W, CHART_H);
            view! {
                <svg class="chart-block__svg" viewBox=view_box preserveAspectRatio="none">
                    <polygon class="chart-block__area" points=points></polygon>
                </svg>
            }
            .into_any()
        }
        BlockKind::Line => {
            let points = polyline_points(series, CHART_W, CHART_H);
            view! {
                <svg class="chart-block__svg" viewBox=view_box preserveAspectRatio="none">
                    <polyline class="chart-block__line" points=points fill="none"></polyline>
                </svg>
            }
            .into_any()
        }
        BlockKind::Bar => {
            let max = series_max(series);
            let count = series.len().max(1);
            let bars = series
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let (x, y, w, h) = bar_rect(i, count, p.value, max, CHART_W, CHART_H);
                    view! {
                        <rect
                            class="chart-block__bar"
                            x=format!("{x:.1}")
                            y=format!("{y:.1}")
                            width=format!("{w:.1}")
                            height=format!("{h:.1}")
                        ></rect>
                    }
                })
                .collect::<Vec<_>>();
            view! {
                <svg class="chart-block__svg" viewBox=view_box preserveAspectRatio="none">
                    {bars}
                </svg>
            }
            .into_any()
        }
        BlockKind::Metric => view! { <div></div> }.into_any(),
    }
}

fn block_card(block: Block) -> AnyView {
    let body = if block.kind == BlockKind::Metric {
        match block.metric.clone() {
            Some(metric) => view! {
                <div class="chart-block__metric">
                    <div class="chart-block__metric-value">{metric.value}</div>
                    <div class="chart-block__metric-label">{metric.label}</div>
                    {metric.trend.map(|t| view! { <div class="chart-block__metric-trend">{t}</div> })}
                </div>
            }
            .into_any(),
            None => view! { <div class="chart-block__metric"></div> }.into_any(),
        }
    } else {
        series_chart(block.kind, &block.series)
    };

    let description = block.description.clone();
    view! {
        <div class="chart-block">
            <div class="chart-block__title">{block.title.clone()}</div>
            {(!description.is_empty()).then(|| view! { <div class="chart-block__description">{description.clone()}</div> })}
            {body}
            <div class="chart-block__labels">
                {block
                    .series
                    .iter()
                    .map(|p| view! { <span class="chart-block__label">{p.label.clone()}</span> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
    .into_any()
}

/// Grid of chart cards under a shared slide heading.
#[component]
pub fn ChartBlocks(
    title: String,
    subtitle: String,
    blocks: Vec<Block>,
) -> impl IntoView {
    view! {
        <div class="chart-blocks">
            <h2 class="chart-blocks__title">{title}</h2>
            {(!subtitle.is_empty()).then(|| view! { <p class="chart-blocks__subtitle">{subtitle.clone()}</p> })}
            <div class="chart-blocks__grid">
                {blocks.into_iter().map(block_card).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
