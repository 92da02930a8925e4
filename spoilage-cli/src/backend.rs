//! Where readings get classified and where the dataset comes from

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use spoilage_core::{DatasetRow, GasReading, GasThresholds, LedStatus, classify, load_dataset};

/// Local classifier, or a running spoilage API
#[derive(Debug, Clone)]
pub enum Backend {
    Local(GasThresholds),
    Remote(String),
}

impl Backend {
    pub fn new(remote: Option<&str>) -> Self {
        match remote {
            Some(url) => Backend::Remote(url.trim_end_matches('/').to_string()),
            None => Backend::Local(GasThresholds::DEFAULT),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Backend::Local(_) => "local classifier".to_string(),
            Backend::Remote(url) => format!("remote analyzer via {}", url),
        }
    }

    pub fn thresholds(&self) -> GasThresholds {
        match self {
            Backend::Local(thresholds) => *thresholds,
            Backend::Remote(_) => GasThresholds::DEFAULT,
        }
    }

    pub fn classify(&self, reading: &GasReading) -> Result<LedStatus> {
        match self {
            Backend::Local(thresholds) => Ok(classify(reading, thresholds)?),
            Backend::Remote(url) => {
                let body = serde_json::to_string(reading)?;
                let text = call(
                    ureq::post(&format!("{}/api/simulate", url))
                        .set("Content-Type", "application/json")
                        .send_string(&body),
                )?;
                serde_json::from_str(&text).context("Analyzer returned an invalid verdict")
            }
        }
    }

    /// Dataset from `path`, or from `/api/dataset` when remote
    pub fn dataset(&self, path: &Path) -> Result<Vec<DatasetRow>> {
        match self {
            Backend::Local(_) => Ok(load_dataset(path)?),
            Backend::Remote(url) => {
                let text = call(ureq::get(&format!("{}/api/dataset", url)).call())?;
                serde_json::from_str(&text).context("Server returned an invalid dataset")
            }
        }
    }
}

fn call(result: Result<ureq::Response, ureq::Error>) -> Result<String> {
    match result {
        Ok(response) => Ok(response.into_string()?),
        Err(ureq::Error::Status(code, response)) => {
            let detail = response.into_string().unwrap_or_default();
            Err(anyhow!("server responded with status {}: {}", code, detail.trim()))
        }
        Err(err) => Err(anyhow!("request failed: {}", err)),
    }
}
