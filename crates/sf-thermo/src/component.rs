//! Binary system components.

use crate::antoine::AntoineCoefficients;
use crate::error::ThermoError;
use std::fmt;

/// Components of the ethanol-water binary system.
///
/// The set is closed: an identifier is parsed into a `Component` once at the
/// boundary, so deeper layers never see an unknown component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Ethanol (C₂H₅OH), the light key
    Ethanol,
    /// Water (H₂O), the heavy key
    Water,
}

impl Component {
    pub const ALL: [Component; 2] = [Component::Ethanol, Component::Water];

    /// Canonical lowercase key.
    pub fn key(&self) -> &'static str {
        match self {
            Component::Ethanol => "ethanol",
            Component::Water => "water",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Component::Ethanol => "Ethanol",
            Component::Water => "Water",
        }
    }

    /// Antoine coefficients for this component (P in mmHg, T in °C).
    pub fn antoine(&self) -> &'static AntoineCoefficients {
        match self {
            Component::Ethanol => &crate::antoine::ETHANOL,
            Component::Water => &crate::antoine::WATER,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Component {
    type Err = ThermoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ethanol" | "etoh" | "c2h5oh" => Ok(Component::Ethanol),
            "water" | "h2o" => Ok(Component::Water),
            _ => Err(ThermoError::UnknownComponent {
                name: s.to_string(),
            }),
        }
    }
}
