//! # spoilage-core — multi-gas food spoilage detection
//!
//! Classifies readings of four spoilage marker gases and replays a labeled
//! reference dataset.
//!
//! ## Gases
//!
//! | Gas | Danger threshold | Warning from |
//! |-----|------------------|--------------|
//! | NH3 (ammonia) | 7.5 ppm | 5.25 ppm |
//! | H2S (hydrogen sulfide) | 0.2 ppm | 0.14 ppm |
//! | TMA (trimethylamine) | 10 ppm | 7 ppm |
//! | DMS (dimethyl sulfide) | 1 ppm | 0.7 ppm |
//!
//! Each gas gets a Green / Yellow / Red LED and the food is `Spoiled` as soon
//! as any LED is Red.
//!
//! ## Example
//!
//! ```
//! use spoilage_core::{FoodStatus, GasReading, GasThresholds, LedColor, classify};
//!
//! let reading = GasReading::new(8.0, 0.1, 5.0, 0.5);
//! let status = classify(&reading, &GasThresholds::DEFAULT)?;
//!
//! assert_eq!(status.nh3_led, LedColor::Red);
//! assert_eq!(status.food_status, FoodStatus::Spoiled);
//! # Ok::<(), spoilage_core::SpoilageError>(())
//! ```

pub mod classifier;
pub mod dataset;
pub mod error;
pub mod evaluation;
pub mod navigator;
pub mod thresholds;
pub mod types;

pub use classifier::{aggregate, classify, classify_gas};
pub use dataset::{DatasetRow, DatasetSummary, load_dataset, parse_dataset};
pub use error::{SpoilageError, SpoilageResult};
pub use evaluation::{Confusion, Evaluation, RowOutcome, evaluate};
pub use navigator::DatasetNavigator;
pub use thresholds::{GasThresholds, WARNING_RATIO};
pub use types::{FoodStatus, Gas, GasReading, LedColor, LedStatus, SpoilageLabel};

#[cfg(test)]
mod tests;
