//! Tabular curve export.
//!
//! Compatibility is defined purely by the column order and numeric
//! precision: `x_ethanol,y_ethanol,T_bubble_C`, with x and y to 6 decimal
//! places and T to 4.

use crate::{ResultsError, ResultsResult};
use sf_curve::{EquilibriumCurve, EquilibriumPoint};
use std::fmt::Write as _;
use std::path::Path;

pub const CURVE_CSV_HEADER: &str = "x_ethanol,y_ethanol,T_bubble_C";

/// Render the curve as CSV text.
pub fn format_curve_csv(curve: &EquilibriumCurve) -> String {
    let mut out = String::with_capacity(32 * (curve.len() + 1));
    out.push_str(CURVE_CSV_HEADER);
    out.push('\n');
    for point in curve.iter() {
        let _ = writeln!(
            out,
            "{:.6},{:.6},{:.4}",
            point.x_ethanol, point.y_ethanol, point.t_bubble_c
        );
    }
    out
}

pub fn write_curve_csv(curve: &EquilibriumCurve, path: &Path) -> ResultsResult<()> {
    std::fs::write(path, format_curve_csv(curve))?;
    Ok(())
}

/// Parse CSV text back into a curve.
pub fn parse_curve_csv(content: &str) -> ResultsResult<EquilibriumCurve> {
    let mut lines = content.lines().enumerate();

    match lines.next() {
        Some((_, header)) if header.trim() == CURVE_CSV_HEADER => {}
        Some((_, header)) => {
            return Err(ResultsError::Malformed {
                line: 1,
                reason: format!("unexpected header '{header}'"),
            });
        }
        None => {
            return Err(ResultsError::Malformed {
                line: 1,
                reason: "empty table".to_string(),
            });
        }
    }

    let mut points: Vec<EquilibriumPoint> = Vec::new();
    for (index, line) in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let point = parse_row(index + 1, line)?;
        if let Some(previous) = points.last()
            && point.x_ethanol <= previous.x_ethanol
        {
            return Err(ResultsError::Malformed {
                line: index + 1,
                reason: "x values must be strictly ascending".to_string(),
            });
        }
        points.push(point);
    }
    Ok(EquilibriumCurve::from_points(points))
}

pub fn read_curve_csv(path: &Path) -> ResultsResult<EquilibriumCurve> {
    let content = std::fs::read_to_string(path)?;
    parse_curve_csv(&content)
}

fn parse_row(line_number: usize, line: &str) -> ResultsResult<EquilibriumPoint> {
    let mut fields = line.split(',');
    let x_ethanol = parse_field(line_number, fields.next(), "x_ethanol")?;
    let y_ethanol = parse_field(line_number, fields.next(), "y_ethanol")?;
    let t_bubble_c = parse_field(line_number, fields.next(), "T_bubble_C")?;
    if fields.next().is_some() {
        return Err(ResultsError::Malformed {
            line: line_number,
            reason: "too many columns".to_string(),
        });
    }
    Ok(EquilibriumPoint {
        x_ethanol,
        y_ethanol,
        t_bubble_c,
    })
}

fn parse_field(
    line_number: usize,
    field: Option<&str>,
    name: &'static str,
) -> ResultsResult<f64> {
    let raw = field.ok_or_else(|| ResultsError::Malformed {
        line: line_number,
        reason: format!("missing column {name}"),
    })?;
    raw.trim().parse::<f64>().map_err(|_| ResultsError::Malformed {
        line: line_number,
        reason: format!("unparseable {name} value '{raw}'"),
    })
}
