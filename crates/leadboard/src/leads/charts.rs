//! Chart geometry: translates aggregate slices into the numbers an SVG
//! renderer needs, independent of any rendering technology. Every function is
//! pure and deterministic; malformed input fails fast instead of being
//! clamped into nonsensical shapes.

use super::summary::StatusSlice;
use crate::leads::domain::LeadStatus;
use serde::Serialize;
use std::f64::consts::PI;

/// Donut arcs are expressed against a normalized 100-unit circumference, the
/// usual stroke-dasharray convention for a unit donut.
pub const DONUT_UNITS: f64 = 100.0;

/// Fixed left margin for the first trend point.
pub const TREND_X_ORIGIN: f64 = 40.0;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ChartError {
    #[error("slice '{label}' has invalid share {share}")]
    InvalidShare { label: &'static str, share: f64 },
    #[error("{name} must be positive and finite, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },
}

/// One donut segment: where it starts along the ring and how far it runs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutArc {
    pub status: LeadStatus,
    pub start_offset: f64,
    pub length: f64,
    pub color: &'static str,
}

/// One pie segment in stroke-dash form relative to a concrete radius.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieArc {
    pub status: LeadStatus,
    pub dash_length: f64,
    pub dash_offset: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub status: LeadStatus,
    pub height: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub status: LeadStatus,
    pub x: f64,
    pub y: f64,
}

/// Partition the donut ring proportionally to each slice's share, in slice
/// order, each arc starting where the previous one ended. Lengths sum to
/// [`DONUT_UNITS`] when the snapshot is non-empty and are all zero otherwise.
pub fn donut_arcs(slices: &[StatusSlice]) -> Result<Vec<DonutArc>, ChartError> {
    validate_shares(slices)?;

    let mut cursor = 0.0;
    let arcs = slices
        .iter()
        .map(|slice| {
            let length = slice.share * DONUT_UNITS;
            let arc = DonutArc {
                status: slice.status,
                start_offset: cursor,
                length,
                color: slice.color,
            };
            cursor += length;
            arc
        })
        .collect();

    Ok(arcs)
}

/// Like [`donut_arcs`] but against an explicit radius, using the "remaining
/// circumference" dash-offset convention: the offset starts at the full
/// circumference and shrinks by each slice's dash length as the ring fills.
pub fn pie_arcs(slices: &[StatusSlice], radius: f64) -> Result<Vec<PieArc>, ChartError> {
    validate_dimension("radius", radius)?;
    validate_shares(slices)?;

    let circumference = 2.0 * PI * radius;
    let mut consumed = 0.0;
    let arcs = slices
        .iter()
        .map(|slice| {
            let dash_length = circumference * slice.share;
            let arc = PieArc {
                status: slice.status,
                dash_length,
                dash_offset: circumference - consumed,
                color: slice.color,
            };
            consumed += dash_length;
            arc
        })
        .collect();

    Ok(arcs)
}

/// Bar heights scaled against the largest slice count. An all-zero snapshot
/// produces zero-height bars, never a divide-by-zero.
pub fn bar_heights(slices: &[StatusSlice], max_bar_height: f64) -> Result<Vec<Bar>, ChartError> {
    validate_dimension("max_bar_height", max_bar_height)?;

    let max_count = slices.iter().map(|slice| slice.count).max().unwrap_or(0);
    let scale_base = max_count.max(1) as f64;

    Ok(slices
        .iter()
        .map(|slice| Bar {
            status: slice.status,
            height: slice.count as f64 / scale_base * max_bar_height,
            color: slice.color,
        })
        .collect())
}

/// Fixed-scale polyline over the categories: one point per slice, spaced
/// horizontally by `step_x`, the count plotted downward from `baseline_y`.
/// This is not a time series; the x axis is category order.
pub fn trend_points(
    slices: &[StatusSlice],
    step_x: f64,
    baseline_y: f64,
    scale_y: f64,
) -> Result<Vec<TrendPoint>, ChartError> {
    validate_dimension("step_x", step_x)?;
    validate_dimension("baseline_y", baseline_y)?;
    validate_dimension("scale_y", scale_y)?;

    Ok(slices
        .iter()
        .enumerate()
        .map(|(index, slice)| TrendPoint {
            status: slice.status,
            x: TREND_X_ORIGIN + index as f64 * step_x,
            y: baseline_y - slice.count as f64 * scale_y,
        })
        .collect())
}

fn validate_shares(slices: &[StatusSlice]) -> Result<(), ChartError> {
    for slice in slices {
        if !slice.share.is_finite() || slice.share < 0.0 {
            return Err(ChartError::InvalidShare {
                label: slice.label,
                share: slice.share,
            });
        }
    }
    Ok(())
}

fn validate_dimension(name: &'static str, value: f64) -> Result<(), ChartError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidDimension { name, value });
    }
    Ok(())
}
