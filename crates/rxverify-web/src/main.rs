//! RxVerify Web Server
//!
//! Run with: cargo run -p rxverify-web

use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rxverify_dataset::ReferenceDataset;
use rxverify_llm::{GeminiBackend, MedicineExtractor};
use rxverify_verifier::Verifier;
use rxverify_web::config::Config;
use rxverify_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A local .env is honoured but not required
    dotenvy::dotenv().ok();

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting RxVerify server...");

    let config = Config::from_env()?;

    let dataset = ReferenceDataset::load(&config.dataset_path)?;
    let backend = GeminiBackend::new(&config.gemini_api_key, &config.gemini_model);
    let extractor = MedicineExtractor::new(Arc::new(backend));
    let verifier = Verifier::new(config.match_threshold);

    info!(
        model = %config.gemini_model,
        dataset = %config.dataset_path.display(),
        medicines = dataset.len(),
        threshold = config.match_threshold,
        "State initialized"
    );

    let state = AppState::new(dataset, extractor, verifier);
    let app = rxverify_web::router::build_router(state);

    info!("🚀 Server listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
