//! Client for the remote analyzer
//!
//! The relay forwards a validated reading to `{analyzer}/analyze` and hands
//! back the analyzer's verdict untouched. Any failure is reported as
//! `ApiFailure::Upstream`; there is no retry and no fallback verdict.

use std::time::Duration;

use spoilage_core::{GasReading, LedStatus};

use crate::error::ApiFailure;

#[derive(Debug, Clone)]
pub struct Relay {
    client: reqwest::Client,
    analyze_url: String,
}

impl Relay {
    pub fn new(analyzer_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            analyze_url: format!("{}/analyze", analyzer_url.trim_end_matches('/')),
        })
    }

    pub fn analyze_url(&self) -> &str {
        &self.analyze_url
    }

    pub async fn forward(&self, reading: &GasReading) -> Result<LedStatus, ApiFailure> {
        let response = self
            .client
            .post(&self.analyze_url)
            .json(reading)
            .send()
            .await
            .map_err(|e| ApiFailure::Upstream(format!("Analyzer request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiFailure::Upstream(format!(
                "Analyzer responded with status: {}",
                status
            )));
        }

        response
            .json::<LedStatus>()
            .await
            .map_err(|e| ApiFailure::Upstream(format!("Analyzer returned an invalid verdict: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_url() {
        let relay = Relay::new("http://localhost:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(relay.analyze_url(), "http://localhost:5000/analyze");

        let relay = Relay::new("http://analyzer:5000", Duration::from_secs(1)).unwrap();
        assert_eq!(relay.analyze_url(), "http://analyzer:5000/analyze");
    }
}
