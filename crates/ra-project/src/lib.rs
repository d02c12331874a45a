//! ra-project: configuration files for the aerodynamic evaluator.
//!
//! A config selects the model by its string tag and carries the data that model
//! needs. Loading validates the structure; [`AeroConfig::build`] performs the full
//! parameter and table checks and returns a ready [`ra_aero::AeroEvaluator`].

pub mod build;
pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::validate_config;

use ra_aero::AeroError;
use ra_polar::PolarError;
use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error(transparent)]
    Aero(#[from] AeroError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<PolarError> for ProjectError {
    fn from(e: PolarError) -> Self {
        ProjectError::Aero(AeroError::Table(e))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

pub fn load_yaml(path: &Path) -> ProjectResult<AeroConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AeroConfig = serde_yaml::from_str(&content)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn save_yaml(path: &Path, config: &AeroConfig) -> ProjectResult<()> {
    validate_config(config)?;
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<AeroConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: AeroConfig = serde_json::from_str(&content)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn save_json(path: &Path, config: &AeroConfig) -> ProjectResult<()> {
    validate_config(config)?;
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a config, choosing the format from the file extension (`.json` or YAML).
pub fn load_config(path: &Path) -> ProjectResult<AeroConfig> {
    if is_json(path) {
        load_json(path)
    } else {
        load_yaml(path)
    }
}

/// Load a config file and build its evaluator, resolving table paths next to it.
pub fn load_evaluator(path: &Path) -> ProjectResult<ra_aero::AeroEvaluator> {
    let config = load_config(path)?;
    config.build(path.parent())
}

/// Load a standalone polar table file (`.json` or YAML).
pub fn load_table(path: &Path) -> ProjectResult<PolarTableDef> {
    let content = std::fs::read_to_string(path)?;
    let table = if is_json(path) {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(table)
}
