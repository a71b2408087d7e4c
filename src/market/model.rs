use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// Ticker payload as returned by the upstream `/0/public/Ticker` endpoint.
// Only the fields we read are modelled, everything else is ignored.
#[derive(Debug, Deserialize)]
pub struct TickerResponse {
    #[serde(default)]
    pub error: Vec<String>,
    pub result: Option<BTreeMap<String, TickerInfo>>,
}

#[derive(Debug, Deserialize)]
pub struct TickerInfo {
    /// Last trade closed: `[price, lot volume]`
    pub c: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub pair: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LtpResponse {
    pub ltp: Vec<Quote>,
}
