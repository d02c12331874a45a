//! Model variants and their per-variant data.

use crate::error::AeroError;
use crate::stall::SemiEmpiricalStallModel;
use ra_polar::PolarTable;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Aerodynamic model family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelVariant {
    /// Thin-airfoil flat plate with a hard lift ceiling.
    FlatPlate,
    /// Interpolation in precomputed polar tables.
    TabulatedPolar,
    /// Empirical stall and compressibility model.
    SemiEmpirical,
}

impl ModelVariant {
    pub const ALL: [ModelVariant; 3] = [
        ModelVariant::FlatPlate,
        ModelVariant::TabulatedPolar,
        ModelVariant::SemiEmpirical,
    ];

    /// Tag used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelVariant::FlatPlate => "flat_plate",
            ModelVariant::TabulatedPolar => "xfoil_table",
            ModelVariant::SemiEmpirical => "semi_empirical",
        }
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelVariant {
    type Err = AeroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelVariant::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| AeroError::Configuration {
                what: format!(
                    "unknown aerodynamic method '{s}' (expected flat_plate, xfoil_table or semi_empirical)"
                ),
            })
    }
}

/// Optional corrections applied on top of the flat-plate and tabulated models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorrectionFlags {
    /// Prandtl-Glauert scaling of lift and lift-curve slope
    pub mach: bool,
    /// Regime-dependent Reynolds scaling of drag
    pub reynolds: bool,
}

impl CorrectionFlags {
    pub const NONE: CorrectionFlags = CorrectionFlags {
        mach: false,
        reynolds: false,
    };

    pub const ALL: CorrectionFlags = CorrectionFlags {
        mach: true,
        reynolds: true,
    };
}

/// A model variant together with the data it evaluates from.
#[derive(Debug, Clone)]
pub enum AeroModel {
    FlatPlate,
    TabulatedPolar(Arc<PolarTable>),
    SemiEmpirical(SemiEmpiricalStallModel),
}

impl AeroModel {
    pub fn variant(&self) -> ModelVariant {
        match self {
            AeroModel::FlatPlate => ModelVariant::FlatPlate,
            AeroModel::TabulatedPolar(_) => ModelVariant::TabulatedPolar,
            AeroModel::SemiEmpirical(_) => ModelVariant::SemiEmpirical,
        }
    }
}
