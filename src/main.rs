//! Kargo Rates - Shipping quote service
//!
//! Thin HTTP shell over the pure rate engine; all pricing happens in
//! the library.

use anyhow::Result;
use axum::{extract::{Path, State}, http::StatusCode, routing::{get, post}, Json, Router};
use chrono::{DateTime, Utc};
use kargo_rates::tariff::{DerivedMultipliers, DhlDomesticExpress, RateTable, SuratStandard};
use kargo_rates::{Carrier, Dimensions, Package, QuoteOptions, RateEngine, ShippingQuote};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;
use validator::Validate;

#[derive(Clone)] pub struct AppState { pub engine: Arc<RateEngine> }

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())).with(tracing_subscriber::fmt::layer()).init();
    let state = AppState { engine: Arc::new(build_engine()?) };

    let app = Router::new()
        .route("/health", get(|| async { Json(serde_json::json!({"status": "healthy", "service": "kargo-rates"})) }))
        .route("/api/v1/carriers", get(list_carriers))
        .route("/api/v1/quotes", post(quote_all))
        .route("/api/v1/quotes/recommend", post(recommend))
        .route("/api/v1/quotes/estimate", post(estimate))
        .route("/api/v1/quotes/:carrier", post(quote_carrier))
        .layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive()).with_state(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8084".to_string());
    tracing::info!("🚀 Kargo Rates listening on 0.0.0.0:{}", port);
    axum::serve(tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?, app).await?;
    Ok(())
}

/// Default registry, with the Sürat table optionally replaced from a
/// JSON file (SURAT_TARIFF_FILE) so contract rates can land without a
/// deploy of new code.
fn build_engine() -> Result<RateEngine> {
    let surat = match std::env::var("SURAT_TARIFF_FILE") {
        Ok(path) => {
            let table: RateTable = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
            table.validate()?;
            tracing::info!("Loaded Sürat tariff table from {}", path);
            SuratStandard::new(table)
        }
        Err(_) => SuratStandard::default(),
    };
    Ok(RateEngine::with_carriers(vec![
        Box::new(surat.clone()),
        Box::new(DhlDomesticExpress::new(surat, DerivedMultipliers::default())),
    ]))
}

#[derive(Debug, Deserialize, Validate)]
pub struct DimensionsRequest {
    #[validate(range(min = 0.0))] pub length: f64,
    #[validate(range(min = 0.0))] pub width: f64,
    #[validate(range(min = 0.0))] pub height: f64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct QuoteRequest {
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub actual_weight_kg: f64,
    #[validate]
    pub dimensions_cm: DimensionsRequest,
    #[serde(default)]
    pub remote_area: bool,
}

impl QuoteRequest {
    fn package(&self) -> Package {
        let d = &self.dimensions_cm;
        Package::new(self.actual_weight_kg, Dimensions::new(d.length, d.width, d.height))
    }
    fn options(&self) -> QuoteOptions { QuoteOptions::new().with_remote_area(self.remote_area) }
}

#[derive(Debug, Deserialize, Validate)]
pub struct EstimateRequest {
    #[validate(range(min = 1))]
    pub item_count: u32,
    #[serde(default)]
    pub remote_area: bool,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse { pub quote_id: Uuid, pub quoted_at: DateTime<Utc>, pub quote: ShippingQuote }

impl QuoteResponse {
    fn new(quote: ShippingQuote) -> Self { Self { quote_id: Uuid::now_v7(), quoted_at: Utc::now(), quote } }
}

#[derive(Debug, Serialize)]
pub struct QuoteListResponse { pub quote_id: Uuid, pub quoted_at: DateTime<Utc>, pub quotes: Vec<ShippingQuote> }

async fn recommend(State(s): State<AppState>, Json(r): Json<QuoteRequest>) -> Result<Json<QuoteResponse>, (StatusCode, String)> {
    r.validate().map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    let quote = s.engine.recommend(&r.package(), &r.options()).map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok(Json(QuoteResponse::new(quote)))
}

async fn quote_all(State(s): State<AppState>, Json(r): Json<QuoteRequest>) -> Result<Json<QuoteListResponse>, (StatusCode, String)> {
    r.validate().map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    let mut quotes = s.engine.quote_all(&r.package(), &r.options());
    quotes.sort_by_key(|q| q.total.amount());
    Ok(Json(QuoteListResponse { quote_id: Uuid::now_v7(), quoted_at: Utc::now(), quotes }))
}

async fn quote_carrier(State(s): State<AppState>, Path(carrier): Path<String>, Json(r): Json<QuoteRequest>) -> Result<Json<QuoteResponse>, (StatusCode, String)> {
    r.validate().map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    let carrier: Carrier = carrier.parse().map_err(|e: kargo_rates::ShippingError| (StatusCode::NOT_FOUND, e.to_string()))?;
    let quote = s.engine.quote_for(carrier, &r.package(), &r.options()).map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;
    Ok(Json(QuoteResponse::new(quote)))
}

async fn estimate(State(s): State<AppState>, Json(r): Json<EstimateRequest>) -> Result<Json<QuoteResponse>, (StatusCode, String)> {
    r.validate().map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    let package = Package::estimate_for_cart(r.item_count);
    let options = QuoteOptions::new().with_remote_area(r.remote_area);
    let quote = s.engine.recommend(&package, &options).map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok(Json(QuoteResponse::new(quote)))
}

async fn list_carriers(State(s): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "carriers": s.engine.carriers() }))
}
