use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    error::AppError,
    market::model::{LtpResponse, Quote, TickerResponse},
};

const BASE_CURRENCY: &str = "BTC";

/// Reshapes a raw ticker body into the `ltp` list, one quote per upstream pair.
pub fn process_response(response: Value) -> Result<LtpResponse, AppError> {
    let ticker: TickerResponse = serde_json::from_value(response)
        .map_err(|e| AppError::UpstreamShapeError(e.to_string()))?;

    // Entries starting with `E` are errors, anything else (`W...`) is a warning
    let (errors, warnings): (Vec<String>, Vec<String>) = ticker
        .error
        .into_iter()
        .partition(|entry| entry.starts_with('E'));

    if !errors.is_empty() {
        return Err(AppError::UpstreamRejected(errors));
    }

    for warning in &warnings {
        warn!(%warning, "upstream warning");
    }

    let result = ticker
        .result
        .ok_or_else(|| AppError::UpstreamShapeError("missing `result` field".into()))?;

    let mut ltp = Vec::with_capacity(result.len());

    for (code, info) in result {
        let pair = format_pair(&code).ok_or_else(|| {
            AppError::UpstreamShapeError(format!("pair code {:?} is too short", code))
        })?;

        let price = info.c.first().ok_or_else(|| {
            AppError::UpstreamShapeError(format!("no last trade for pair {}", code))
        })?;

        debug!(%code, %price, "last trade");

        ltp.push(Quote {
            pair,
            amount: parse_amount(price),
        });
    }

    Ok(LtpResponse { ltp })
}

/// `XXBTZUSD` -> `BTC/USD`. The quote currency is the trailing three characters.
pub fn format_pair(code: &str) -> Option<String> {
    let len = code.chars().count();
    if len < 3 {
        return None;
    }

    let quote: String = code.chars().skip(len - 3).collect();
    Some(format!("{}/{}", BASE_CURRENCY, quote))
}

/// Unparsable (including surrounding whitespace), negative and non-finite prices all become `0.0`.
pub fn parse_amount(s: &str) -> f64 {
    match s.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => amount,
        _ => 0.0,
    }
}
