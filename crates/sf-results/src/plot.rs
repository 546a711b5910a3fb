//! y-x equilibrium diagram rendering.
//!
//! Presentation-only: the diagram consumes a finished curve and carries no
//! contract beyond that.

use crate::{ResultsError, ResultsResult};
use plotters::prelude::*;
use sf_curve::EquilibriumCurve;
use std::path::Path;

const PLOT_SIZE: (u32, u32) = (800, 600);

/// Render the y-vs-x diagram with the `y = x` reference diagonal to a PNG.
pub fn plot_equilibrium_diagram(curve: &EquilibriumCurve, path: &Path) -> ResultsResult<()> {
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(to_plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Ethanol-water equilibrium", ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)
        .map_err(to_plot_error)?;

    chart
        .configure_mesh()
        .x_desc("x ethanol (liquid)")
        .y_desc("y ethanol (vapor)")
        .draw()
        .map_err(to_plot_error)?;

    // Reference diagonal y = x
    chart
        .draw_series(LineSeries::new(
            (0..=100).map(|i| {
                let v = i as f64 / 100.0;
                (v, v)
            }),
            &BLACK,
        ))
        .map_err(to_plot_error)?
        .label("y = x")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));

    chart
        .draw_series(LineSeries::new(
            curve.iter().map(|p| (p.x_ethanol, p.y_ethanol)),
            &BLUE,
        ))
        .map_err(to_plot_error)?
        .label("equilibrium")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(to_plot_error)?;

    root.present().map_err(to_plot_error)?;
    Ok(())
}

fn to_plot_error<E: std::fmt::Display>(err: E) -> ResultsError {
    ResultsError::Plot {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_curve::EquilibriumPoint;

    #[test]
    fn renders_a_png() {
        let curve = EquilibriumCurve::from_points(vec![
            EquilibriumPoint {
                x_ethanol: 0.0,
                y_ethanol: 0.0,
                t_bubble_c: 100.0,
            },
            EquilibriumPoint {
                x_ethanol: 0.5,
                y_ethanol: 0.71,
                t_bubble_c: 86.8,
            },
            EquilibriumPoint {
                x_ethanol: 1.0,
                y_ethanol: 1.0,
                t_bubble_c: 78.3,
            },
        ]);

        let path = std::env::temp_dir().join("sf_results_diagram.png");
        let _ = std::fs::remove_file(&path);

        match plot_equilibrium_diagram(&curve, &path) {
            Ok(()) => {
                let metadata = std::fs::metadata(&path).unwrap();
                assert!(metadata.len() > 0);
            }
            // Hosts without usable system fonts cannot rasterize labels
            Err(ResultsError::Plot { message }) => {
                eprintln!("skipping diagram assertion: {message}");
            }
            Err(other) => panic!("unexpected error: {other}"),
        }

        let _ = std::fs::remove_file(&path);
    }
}
