use axum::{extract::State, Json};

use crate::{
  error::AppError,
  market::{model::LtpResponse, service::MarketService},
};

pub async fn get_ltp(
  State(service): State<MarketService>,
) -> Result<Json<LtpResponse>, AppError> {
  let response = service.get_ltp().await?;
  Ok(Json(response))
}
