//! OpenAPI documentation configuration

use spoilage_core::{DatasetRow, FoodStatus, GasReading, GasThresholds, LedColor, LedStatus};
use utoipa::OpenApi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Spoilage Detector API",
        description = "Multi-gas food spoilage analyzer, analyzer relay and reference dataset",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "http://localhost:3001", description = "Local development server")
    ),
    tags(
        (name = "analysis", description = "Threshold classification of gas readings"),
        (name = "relay", description = "Forward readings to the configured analyzer"),
        (name = "dataset", description = "Labeled reference readings"),
        (name = "health", description = "Health check endpoints")
    ),
    paths(
        handlers::analyze_handler,
        handlers::simulate_handler,
        handlers::dataset_handler,
        handlers::health_handler,
    ),
    components(
        schemas(
            GasReading,
            LedStatus,
            LedColor,
            FoodStatus,
            DatasetRow,
            GasThresholds,
            ErrorBody,
            HealthCheck,
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        for path in ["/analyze", "/api/simulate", "/api/dataset", "/health"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_reading_schema_carries_examples() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let props = &doc["components"]["schemas"]["GasReading"]["properties"];
        assert_eq!(props["NH3"]["example"], 3.0);
        assert_eq!(props["DMS"]["example"], 0.5);
        assert!(doc["components"]["schemas"]["DatasetRow"].is_object());
    }
}
