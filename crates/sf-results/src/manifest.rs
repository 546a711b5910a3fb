//! Curve manifests and content-based curve IDs.

use crate::ResultsResult;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;

/// What was asked of the curve generator; the identity of a generated curve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurveRequest {
    /// Vapor-pressure model name
    pub model: String,
    /// Requested grid size
    pub num_points: usize,
    /// Total pressure [atm]
    pub pressure_atm: f64,
}

/// Deterministic content hash of a curve request.
pub fn compute_curve_id(request: &CurveRequest) -> String {
    let mut hasher = Sha256::new();
    let request_json = serde_json::to_string(request).unwrap_or_default();
    hasher.update(request_json.as_bytes());
    let result = hasher.finalize();
    format!("{:x}", result)
}

/// Sidecar metadata persisted next to the CSV table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurveManifest {
    pub curve_id: String,
    pub generated_at: String,
    pub request: CurveRequest,
    pub point_count: usize,
    pub warning_count: usize,
}

impl CurveManifest {
    pub fn new(request: CurveRequest, point_count: usize, warning_count: usize) -> Self {
        Self {
            curve_id: compute_curve_id(&request),
            generated_at: chrono::Utc::now().to_rfc3339(),
            request,
            point_count,
            warning_count,
        }
    }
}

pub fn write_manifest(manifest: &CurveManifest, path: &Path) -> ResultsResult<()> {
    let content = serde_json::to_string_pretty(manifest)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn read_manifest(path: &Path) -> ResultsResult<CurveManifest> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
