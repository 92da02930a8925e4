//! Shared, read-only application state

use std::sync::Arc;

use spoilage_core::{DatasetRow, GasThresholds, SpoilageError, SpoilageResult};

use crate::relay::Relay;

/// Handed to every handler
///
/// The dataset is loaded in full before the state exists, so handlers only
/// ever see the complete dataset or the error that prevented loading it.
#[derive(Debug, Clone)]
pub struct AppState {
    pub thresholds: GasThresholds,
    dataset: Arc<SpoilageResult<Vec<DatasetRow>>>,
    relay: Relay,
}

impl AppState {
    pub fn new(dataset: SpoilageResult<Vec<DatasetRow>>, relay: Relay) -> Self {
        Self {
            thresholds: GasThresholds::DEFAULT,
            dataset: Arc::new(dataset),
            relay,
        }
    }

    pub fn dataset(&self) -> Result<&[DatasetRow], &SpoilageError> {
        (*self.dataset).as_ref().map(Vec::as_slice)
    }

    pub fn relay(&self) -> &Relay {
        &self.relay
    }
}
