//! Server configuration from command line and environment

use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::Context;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "spoilage-api")]
#[command(author = "Spoilage Detector Contributors")]
#[command(version)]
#[command(about = "Food spoilage analyzer, analyzer relay and dataset server", long_about = None)]
pub struct ServerArgs {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "SPOILAGE_API_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3001, env = "SPOILAGE_API_PORT")]
    pub port: u16,

    /// Base URL of the analyzer used by /api/simulate (default: this server)
    #[arg(long, env = "SPOILAGE_ANALYZER_URL")]
    pub analyzer_url: Option<String>,

    /// CSV file served by /api/dataset
    #[arg(
        long,
        default_value = "dataset/gas_sensor_dataset.csv",
        env = "SPOILAGE_DATASET"
    )]
    pub dataset: PathBuf,

    /// Timeout for one analyzer call, in seconds
    #[arg(long, default_value_t = 10, env = "SPOILAGE_UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: u64,

    /// Disable CORS headers
    #[arg(long, default_value_t = false)]
    pub no_cors: bool,
}

impl ServerArgs {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid address {}:{}", self.host, self.port))
    }

    /// Analyzer base URL, falling back to this server's own `/analyze`.
    /// The fallback needs a fixed port: with `--port 0` the bound port is
    /// unknown here, so an explicit analyzer URL is required.
    pub fn analyzer_url(&self) -> anyhow::Result<String> {
        match &self.analyzer_url {
            Some(url) => Ok(url.clone()),
            None if self.port == 0 => {
                anyhow::bail!("--analyzer-url is required when listening on an ephemeral port (--port 0)")
            }
            None => {
                let host = match self.host.as_str() {
                    "0.0.0.0" => "127.0.0.1",
                    "::" => "::1",
                    other => other,
                };
                Ok(if host.contains(':') {
                    format!("http://[{}]:{}", host, self.port)
                } else {
                    format!("http://{}:{}", host, self.port)
                })
            }
        }
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}
