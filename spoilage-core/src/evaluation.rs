//! Replay of a labeled dataset through the classifier

use serde::Serialize;

use crate::classifier::classify;
use crate::dataset::DatasetRow;
use crate::error::SpoilageResult;
use crate::thresholds::GasThresholds;
use crate::types::{FoodStatus, LedStatus, SpoilageLabel};

/// Classification of one dataset row next to its label
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RowOutcome {
    pub index: usize,
    pub row: DatasetRow,
    pub status: LedStatus,
}

impl RowOutcome {
    pub fn agrees(&self) -> bool {
        self.status.food_status == self.row.label.expected_status()
    }
}

/// Confusion counts, with "spoiled" as the positive class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Confusion {
    pub true_spoiled: usize,
    pub false_spoiled: usize,
    pub true_fresh: usize,
    pub false_fresh: usize,
}

impl Confusion {
    fn record(&mut self, label: SpoilageLabel, verdict: FoodStatus) {
        match (label, verdict) {
            (SpoilageLabel::Spoiled, FoodStatus::Spoiled) => self.true_spoiled += 1,
            (SpoilageLabel::Fresh, FoodStatus::Spoiled) => self.false_spoiled += 1,
            (SpoilageLabel::Fresh, FoodStatus::Fresh) => self.true_fresh += 1,
            (SpoilageLabel::Spoiled, FoodStatus::Fresh) => self.false_fresh += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.true_spoiled + self.false_spoiled + self.true_fresh + self.false_fresh
    }

    pub fn correct(&self) -> usize {
        self.true_spoiled + self.true_fresh
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Evaluation {
    pub outcomes: Vec<RowOutcome>,
    pub confusion: Confusion,
}

impl Evaluation {
    /// Share of rows where verdict and label agree; `None` for an empty dataset
    pub fn accuracy(&self) -> Option<f64> {
        let total = self.confusion.total();
        (total > 0).then(|| self.confusion.correct() as f64 / total as f64)
    }

    pub fn disagreements(&self) -> impl Iterator<Item = &RowOutcome> {
        self.outcomes.iter().filter(|o| !o.agrees())
    }
}

/// Classifies every row in order
pub fn evaluate(rows: &[DatasetRow], thresholds: &GasThresholds) -> SpoilageResult<Evaluation> {
    let mut evaluation = Evaluation::default();

    for (index, row) in rows.iter().enumerate() {
        let status = classify(&row.reading, thresholds)?;
        evaluation.confusion.record(row.label, status.food_status);
        evaluation.outcomes.push(RowOutcome {
            index,
            row: *row,
            status,
        });
    }

    Ok(evaluation)
}
