//! Danger thresholds per gas

use serde::Serialize;

use crate::types::Gas;

/// Fraction of the danger threshold where the warning band starts
pub const WARNING_RATIO: f64 = 0.7;

/// Danger threshold (ppm) per gas plus the shared warning ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GasThresholds {
    #[serde(rename = "NH3")]
    pub nh3: f64,
    #[serde(rename = "H2S")]
    pub h2s: f64,
    #[serde(rename = "TMA")]
    pub tma: f64,
    #[serde(rename = "DMS")]
    pub dms: f64,
    pub warning_ratio: f64,
}

impl GasThresholds {
    pub const DEFAULT: GasThresholds = GasThresholds {
        nh3: 7.5,
        h2s: 0.2,
        tma: 10.0,
        dms: 1.0,
        warning_ratio: WARNING_RATIO,
    };

    /// Concentration at or above which the gas is dangerous
    pub fn danger(&self, gas: Gas) -> f64 {
        match gas {
            Gas::Nh3 => self.nh3,
            Gas::H2s => self.h2s,
            Gas::Tma => self.tma,
            Gas::Dms => self.dms,
        }
    }

    /// Concentration at or above which the gas is in the warning band
    pub fn warning(&self, gas: Gas) -> f64 {
        self.danger(gas) * self.warning_ratio
    }
}

impl Default for GasThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
