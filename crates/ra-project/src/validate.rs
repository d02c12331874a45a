//! Configuration validation.
//!
//! Checks the structure of a config before anything is built: the method tag is
//! known and the sections that method needs are present.

use crate::schema::AeroConfig;
use ra_aero::{AeroError, AeroResult, ModelVariant};

pub fn validate_config(config: &AeroConfig) -> AeroResult<ModelVariant> {
    let variant: ModelVariant = config.method.parse()?;

    match variant {
        ModelVariant::FlatPlate => {}
        ModelVariant::TabulatedPolar => match (&config.table, &config.table_path) {
            (None, None) => {
                return Err(AeroError::Validation {
                    what: "xfoil_table requires a polar table (`table` or `table_path`)",
                });
            }
            (Some(_), Some(_)) => {
                return Err(AeroError::Configuration {
                    what: "give either `table` or `table_path`, not both".into(),
                });
            }
            _ => {}
        },
        ModelVariant::SemiEmpirical => {
            if config.empirical.is_none() {
                return Err(AeroError::Configuration {
                    what: "semi_empirical requires the `empirical` parameter section".into(),
                });
            }
        }
    }

    Ok(variant)
}
