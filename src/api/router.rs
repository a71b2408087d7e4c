use axum::{
  routing::get,
  Json, Router,
};
use http::StatusCode;
use serde_json::json;
use tower_http::{
  compression::CompressionLayer,
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{
  config::Config,
  error::AppError,
  market::{routes::market_routes, service::MarketService},
};

pub fn create_router(config: &Config) -> Result<Router, AppError> {
  let market_service = MarketService::from_config(config)?;
  Ok(router_with_service(market_service))
}

pub fn router_with_service(market_service: MarketService) -> Router {
  // Setup CORS
  let cors = CorsLayer::new()
      .allow_origin(Any)
      .allow_methods(Any)
      .allow_headers(Any);

  let api_routes = Router::new()
      .route("/health", get(health_check))
      .merge(market_routes(market_service));

  Router::new()
      .nest("/api/v1", api_routes)
      .layer(TraceLayer::new_for_http())
      .layer(CompressionLayer::new())
      .layer(cors)
}

async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
  (
      StatusCode::OK,
      Json(json!({
          "status": "success",
          "message": "Server is running"
      })),
  )
}
