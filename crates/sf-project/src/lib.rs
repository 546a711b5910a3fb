//! sf-project: design-specs file format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_specs};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_specs(path: &std::path::Path) -> ProjectResult<DesignSpecs> {
    let content = std::fs::read_to_string(path)?;
    let specs: DesignSpecs = serde_json::from_str(&content)?;
    validate_specs(&specs)?;
    Ok(specs)
}

pub fn save_specs(path: &std::path::Path, specs: &DesignSpecs) -> ProjectResult<()> {
    validate_specs(specs)?;
    let content = serde_json::to_string_pretty(specs)?;
    std::fs::write(path, content)?;
    Ok(())
}
