//! sf-results: equilibrium-curve persistence and presentation.
//!
//! The tabular CSV export is the compatibility surface: column order and
//! numeric precision define the format. The manifest and the y-x diagram
//! are conveniences layered next to it.

pub mod export;
pub mod manifest;
pub mod plot;

pub use export::{CURVE_CSV_HEADER, format_curve_csv, parse_curve_csv, read_curve_csv,
    write_curve_csv};
pub use manifest::{CurveManifest, CurveRequest, compute_curve_id, read_manifest, write_manifest};
pub use plot::plot_equilibrium_diagram;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed curve table at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("Plot rendering failed: {message}")]
    Plot { message: String },
}
