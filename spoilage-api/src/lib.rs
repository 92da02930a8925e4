//! Spoilage detector HTTP service
//!
//! One process plays both roles of the detector backend:
//!
//! - **analyzer**: `POST /analyze` classifies a reading locally
//! - **relay**: `POST /api/simulate` forwards a reading to the configured
//!   analyzer (by default this same server) and `GET /api/dataset` serves the
//!   labeled reference readings
//!
//! ## Environment Variables
//! - `SPOILAGE_API_HOST`: Host to bind to (default: 127.0.0.1)
//! - `SPOILAGE_API_PORT`: Port to listen on (default: 3001)
//! - `SPOILAGE_ANALYZER_URL`: Analyzer base URL for the relay (default: this server)
//! - `SPOILAGE_DATASET`: Dataset CSV (default: dataset/gas_sensor_dataset.csv)
//! - `SPOILAGE_UPSTREAM_TIMEOUT_SECS`: Analyzer call timeout (default: 10)

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod relay;
pub mod routes;
pub mod state;

pub use config::ServerArgs;
pub use error::ApiFailure;
pub use relay::Relay;
pub use routes::create_router;
pub use state::AppState;
