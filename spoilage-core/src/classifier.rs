//! Threshold classifier
//!
//! Maps a reading to one LED level per gas and an aggregate freshness verdict.
//! Bands are half-open: Red for `v >= t`, Yellow for `0.7·t <= v < t`,
//! Green below that. A gas sitting exactly on its threshold is Red.

use crate::error::SpoilageResult;
use crate::thresholds::GasThresholds;
use crate::types::{FoodStatus, Gas, GasReading, LedColor, LedStatus};

/// LED level of a single gas value
pub fn classify_gas(gas: Gas, value: f64, thresholds: &GasThresholds) -> LedColor {
    if value >= thresholds.danger(gas) {
        LedColor::Red
    } else if value >= thresholds.warning(gas) {
        LedColor::Yellow
    } else {
        LedColor::Green
    }
}

/// Classifies a full reading. Fails only if the reading is invalid.
pub fn classify(reading: &GasReading, thresholds: &GasThresholds) -> SpoilageResult<LedStatus> {
    reading.validate()?;

    let led = |gas| classify_gas(gas, reading.get(gas), thresholds);
    let (nh3_led, h2s_led, tma_led, dms_led) =
        (led(Gas::Nh3), led(Gas::H2s), led(Gas::Tma), led(Gas::Dms));

    Ok(LedStatus {
        nh3_led,
        h2s_led,
        tma_led,
        dms_led,
        food_status: aggregate([nh3_led, h2s_led, tma_led, dms_led]),
    })
}

/// Spoiled iff any gas is Red
pub fn aggregate(levels: [LedColor; 4]) -> FoodStatus {
    if levels.contains(&LedColor::Red) {
        FoodStatus::Spoiled
    } else {
        FoodStatus::Fresh
    }
}
