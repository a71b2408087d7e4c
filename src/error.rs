use axum::{
  response::{IntoResponse, Response},
  Json,
};
use http::StatusCode;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
  #[error("Upstream request failed: {0}")]
  UpstreamError(String),

  #[error("Unexpected upstream response: {0}")]
  UpstreamShapeError(String),

  #[error("Upstream rejected the request: {}", .0.join(", "))]
  UpstreamRejected(Vec<String>),

  #[error("Config error: {0}")]
  ConfigError(String),
}

impl From<reqwest::Error> for AppError {
  fn from(err: reqwest::Error) -> Self {
      Self::UpstreamError(err.to_string())
  }
}

impl AppError {
  pub fn status_code(&self) -> StatusCode {
      match self {
          AppError::UpstreamError(_) => StatusCode::INTERNAL_SERVER_ERROR,
          AppError::UpstreamShapeError(_) | AppError::UpstreamRejected(_) => StatusCode::BAD_GATEWAY,
          AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
      }
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
      let status = self.status_code();
      let error_message = match &self {
          // Config details stay in the logs
          AppError::ConfigError(_) => "A configuration error occurred".to_string(),
          _ => self.to_string(),
      };

      error!(status = status.as_u16(), "{}", self);

      let body = Json(json!({
          "error": error_message,
      }));

      (status, body).into_response()
  }
}
