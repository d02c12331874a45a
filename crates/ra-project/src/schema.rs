//! Configuration file schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AeroConfig {
    /// `flat_plate`, `xfoil_table` or `semi_empirical`
    pub method: String,
    #[serde(default)]
    pub mach_correction: bool,
    #[serde(default)]
    pub reynolds_correction: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empirical: Option<EmpiricalDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<PolarTableDef>,
    /// Table stored in its own YAML/JSON file, relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_path: Option<PathBuf>,
    #[serde(default)]
    pub profile_drag: ProfileDragDef,
}

/// Semi-empirical section parameters. Every field is optional in the file so that a
/// partial set is reported as a whole instead of failing on the first missing key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmpiricalDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha_0_lift_deg: Option<f64>,
    /// Per radian.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cl_alpha: Option<f64>,
    /// Per radian.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cl_alpha_stall: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cl_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cl_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cl_incr_to_stall: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cd_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cl_at_cd_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dcd_dcl2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mach_crit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub re_scaling_exp: Option<f64>,
}

/// Polar data, either a ready grid or one raw polar per blade station.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PolarTableDef {
    Grid {
        alpha_deg: Vec<f64>,
        span_fraction: Vec<f64>,
        /// One row per span station
        cl: Vec<Vec<f64>>,
        cd: Vec<Vec<f64>>,
    },
    Stations {
        /// Common angle axis the stations are resampled onto
        alpha_deg: Vec<f64>,
        stations: Vec<StationDef>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationDef {
    pub span_fraction: f64,
    pub alpha_deg: Vec<f64>,
    pub cl: Vec<f64>,
    pub cd: Vec<f64>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProfileDragDef {
    #[default]
    Unity,
    PrandtlGlauert,
}
