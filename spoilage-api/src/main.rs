//! Spoilage detector API server

use clap::Parser;
use spoilage_api::{AppState, Relay, ServerArgs, create_router};
use spoilage_core::load_dataset;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spoilage_api=info,spoilage_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = ServerArgs::parse();
    let addr = args.socket_addr()?;

    // Dataset is loaded completely before any route is served
    let dataset = load_dataset(&args.dataset);
    match &dataset {
        Ok(rows) => tracing::info!("Loaded {} dataset rows from {}", rows.len(), args.dataset.display()),
        Err(err) => tracing::error!("Dataset unavailable, /api/dataset will fail: {}", err),
    }

    let relay = Relay::new(&args.analyzer_url()?, args.upstream_timeout())?;
    let mut app = create_router(AppState::new(dataset, relay.clone()));

    if !args.no_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    // Add tracing layer
    app = app.layer(TraceLayer::new_for_http());

    tracing::info!("Spoilage API server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/docs", addr);
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  POST /analyze      - Classify a gas reading");
    tracing::info!("  POST /api/simulate - Relay a gas reading to the analyzer");
    tracing::info!("  GET  /api/dataset  - Labeled reference readings");
    tracing::info!("  GET  /health       - Health check");
    tracing::info!("  GET  /docs         - Swagger UI");
    tracing::info!("");
    tracing::info!("Analyzer: {}", relay.analyze_url());
    tracing::info!("Upstream timeout: {}s", args.upstream_timeout_secs);
    tracing::info!("CORS: {}", if args.no_cors { "disabled" } else { "any origin" });

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
