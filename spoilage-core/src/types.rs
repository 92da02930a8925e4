//! Reading and status types shared by the classifier, the dataset and the HTTP surface

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SpoilageError, SpoilageResult};

/// Spoilage marker gas monitored by the detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gas {
    /// Amônia
    #[serde(rename = "NH3")]
    Nh3,
    /// Sulfeto de hidrogênio
    #[serde(rename = "H2S")]
    H2s,
    /// Trimetilamina
    #[serde(rename = "TMA")]
    Tma,
    /// Sulfeto de dimetila
    #[serde(rename = "DMS")]
    Dms,
}

impl Gas {
    /// Canonical order used on the wire and on the LED panel
    pub const ALL: [Gas; 4] = [Gas::Nh3, Gas::H2s, Gas::Tma, Gas::Dms];

    /// Field name in readings and dataset headers
    pub fn key(&self) -> &'static str {
        match self {
            Gas::Nh3 => "NH3",
            Gas::H2s => "H2S",
            Gas::Tma => "TMA",
            Gas::Dms => "DMS",
        }
    }

    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            Gas::Nh3 => "Ammonia (NH₃)",
            Gas::H2s => "Hydrogen Sulfide (H₂S)",
            Gas::Tma => "Trimethylamine (TMA)",
            Gas::Dms => "Dimethyl Sulfide (DMS)",
        }
    }

    pub fn unit(&self) -> &'static str {
        "ppm"
    }

    /// Upper end of the display scale (ppm). Readings above it are still valid.
    pub fn display_max(&self) -> f64 {
        match self {
            Gas::Nh3 => 20.0,
            Gas::H2s => 2.0,
            Gas::Tma => 30.0,
            Gas::Dms => 5.0,
        }
    }
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Snapshot of the four gas concentrations, in ppm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GasReading {
    #[serde(rename = "NH3")]
    #[cfg_attr(feature = "openapi", schema(example = 3.0))]
    pub nh3: f64,
    #[serde(rename = "H2S")]
    #[cfg_attr(feature = "openapi", schema(example = 0.1))]
    pub h2s: f64,
    #[serde(rename = "TMA")]
    #[cfg_attr(feature = "openapi", schema(example = 5.0))]
    pub tma: f64,
    #[serde(rename = "DMS")]
    #[cfg_attr(feature = "openapi", schema(example = 0.5))]
    pub dms: f64,
}

impl GasReading {
    pub fn new(nh3: f64, h2s: f64, tma: f64, dms: f64) -> Self {
        Self { nh3, h2s, tma, dms }
    }

    /// Builds a reading and rejects it unless every value is finite and non-negative
    pub fn checked(nh3: f64, h2s: f64, tma: f64, dms: f64) -> SpoilageResult<Self> {
        let reading = Self::new(nh3, h2s, tma, dms);
        reading.validate()?;
        Ok(reading)
    }

    pub fn get(&self, gas: Gas) -> f64 {
        match gas {
            Gas::Nh3 => self.nh3,
            Gas::H2s => self.h2s,
            Gas::Tma => self.tma,
            Gas::Dms => self.dms,
        }
    }

    /// Copy of this reading with one gas replaced
    pub fn with(mut self, gas: Gas, value: f64) -> Self {
        match gas {
            Gas::Nh3 => self.nh3 = value,
            Gas::H2s => self.h2s = value,
            Gas::Tma => self.tma = value,
            Gas::Dms => self.dms = value,
        }
        self
    }

    /// `(gas, value)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Gas, f64)> + '_ {
        Gas::ALL.into_iter().map(move |gas| (gas, self.get(gas)))
    }

    pub fn validate(&self) -> SpoilageResult<()> {
        for (gas, value) in self.iter() {
            if !value.is_finite() || value < 0.0 {
                return Err(SpoilageError::InvalidReading { gas, value });
            }
        }
        Ok(())
    }
}

impl Default for GasReading {
    /// Simulator start state
    fn default() -> Self {
        Self::new(3.0, 0.1, 5.0, 0.5)
    }
}

/// Traffic-light level for a single gas
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum LedColor {
    Green,
    Yellow,
    Red,
}

impl LedColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LedColor::Green => "Green",
            LedColor::Yellow => "Yellow",
            LedColor::Red => "Red",
        }
    }
}

impl fmt::Display for LedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate verdict over all four gases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum FoodStatus {
    Fresh,
    Spoiled,
}

impl FoodStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodStatus::Fresh => "Fresh",
            FoodStatus::Spoiled => "Spoiled",
        }
    }

    /// Color of the aggregate indicator
    pub fn led(&self) -> LedColor {
        match self {
            FoodStatus::Fresh => LedColor::Green,
            FoodStatus::Spoiled => LedColor::Red,
        }
    }
}

impl fmt::Display for FoodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indicator panel state derived from one reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LedStatus {
    #[serde(rename = "NH3_LED")]
    pub nh3_led: LedColor,
    #[serde(rename = "H2S_LED")]
    pub h2s_led: LedColor,
    #[serde(rename = "TMA_LED")]
    pub tma_led: LedColor,
    #[serde(rename = "DMS_LED")]
    pub dms_led: LedColor,
    #[serde(rename = "Food_Status")]
    pub food_status: FoodStatus,
}

impl LedStatus {
    pub fn get(&self, gas: Gas) -> LedColor {
        match gas {
            Gas::Nh3 => self.nh3_led,
            Gas::H2s => self.h2s_led,
            Gas::Tma => self.tma_led,
            Gas::Dms => self.dms_led,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Gas, LedColor)> + '_ {
        Gas::ALL.into_iter().map(move |gas| (gas, self.get(gas)))
    }

    pub fn is_spoiled(&self) -> bool {
        self.food_status == FoodStatus::Spoiled
    }
}

impl Default for LedStatus {
    fn default() -> Self {
        Self {
            nh3_led: LedColor::Green,
            h2s_led: LedColor::Green,
            tma_led: LedColor::Green,
            dms_led: LedColor::Green,
            food_status: FoodStatus::Fresh,
        }
    }
}

/// Ground-truth tag attached to a dataset row
///
/// On the wire it is the `foodSpoiled` string: `Yes` (after trimming) marks a
/// spoiled sample, any other text a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum SpoilageLabel {
    Spoiled,
    Fresh,
}

impl SpoilageLabel {
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == "Yes" {
            SpoilageLabel::Spoiled
        } else {
            SpoilageLabel::Fresh
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpoilageLabel::Spoiled => "Yes",
            SpoilageLabel::Fresh => "No",
        }
    }

    /// Verdict the classifier should reach for this sample
    pub fn expected_status(&self) -> FoodStatus {
        match self {
            SpoilageLabel::Spoiled => FoodStatus::Spoiled,
            SpoilageLabel::Fresh => FoodStatus::Fresh,
        }
    }
}

impl From<String> for SpoilageLabel {
    fn from(raw: String) -> Self {
        SpoilageLabel::parse(&raw)
    }
}

impl From<SpoilageLabel> for &'static str {
    fn from(label: SpoilageLabel) -> Self {
        label.as_str()
    }
}

impl fmt::Display for SpoilageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpoilageLabel::Spoiled => f.write_str("Spoiled"),
            SpoilageLabel::Fresh => f.write_str("Fresh"),
        }
    }
}
