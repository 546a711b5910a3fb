//! Design-specs schema definitions.

use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignSpecs {
    #[serde(default = "default_version")]
    pub version: u32,
    pub basis: BasisDef,
    #[serde(default)]
    pub vle: VleDef,
}

/// Production basis for the overall balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BasisDef {
    #[serde(rename = "product_rate_L_per_day")]
    pub product_rate_l_per_day: f64,
    #[serde(rename = "density_ethanol_kg_per_L")]
    pub density_ethanol_kg_per_l: f64,
    #[serde(rename = "feed_composition_xF")]
    pub feed_composition_x_f: f64,
    #[serde(rename = "distillate_composition_xD")]
    pub distillate_composition_x_d: f64,
    #[serde(rename = "bottoms_composition_xB")]
    pub bottoms_composition_x_b: f64,
}

/// Settings for the equilibrium-curve sweep.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VleDef {
    #[serde(default = "default_num_points")]
    pub num_points: usize,
    #[serde(default = "default_pressure_atm")]
    pub pressure_atm: f64,
}

impl Default for VleDef {
    fn default() -> Self {
        Self {
            num_points: default_num_points(),
            pressure_atm: default_pressure_atm(),
        }
    }
}

fn default_version() -> u32 {
    LATEST_VERSION
}

fn default_num_points() -> usize {
    51
}

fn default_pressure_atm() -> f64 {
    1.0
}
