use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::AppError,
    market::{model::LtpResponse, transform},
};

const TICKER_PATH: &str = "/0/public/Ticker";
const TICKER_PAIRS: &str = "BTCCHF,BTCEUR,BTCUSD";

/// Something that can hand back a raw ticker body.
#[async_trait]
pub trait TickerSource: Send + Sync {
    async fn fetch_ticker(&self) -> Result<Value, AppError>;
}

/// Kraken public REST client, one GET per call.
#[derive(Clone)]
pub struct KrakenClient {
    client: Client,
    ticker_url: String,
}

impl KrakenClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let timeout = config
            .upstream_timeout
            .to_std()
            .map_err(|_| AppError::ConfigError("UPSTREAM_TIMEOUT out of range".into()))?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ltp-proxy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            ticker_url: format!("{}{}", config.upstream_url, TICKER_PATH),
        })
    }

    pub fn ticker_url(&self) -> &str {
        &self.ticker_url
    }
}

#[async_trait]
impl TickerSource for KrakenClient {
    async fn fetch_ticker(&self) -> Result<Value, AppError> {
        debug!(url = %self.ticker_url, pairs = TICKER_PAIRS, "requesting ticker");

        let response = self
            .client
            .get(&self.ticker_url)
            .query(&[("pair", TICKER_PAIRS)])
            .send()
            .await?;

        // Kraken reports failures inside the body, so the status alone decides nothing
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "upstream returned non-success status");
        }

        let body = response.json::<Value>().await?;
        Ok(body)
    }
}

#[derive(Clone)]
pub struct MarketService {
    source: Arc<dyn TickerSource>,
}

impl MarketService {
    pub fn new(source: Arc<dyn TickerSource>) -> Self {
        Self { source }
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = KrakenClient::new(config)?;
        info!(url = %client.ticker_url(), "using upstream ticker endpoint");
        Ok(Self::new(Arc::new(client)))
    }

    pub async fn get_ltp(&self) -> Result<LtpResponse, AppError> {
        let raw = self.source.fetch_ticker().await?;
        let response = transform::process_response(raw)?;

        debug!(quotes = response.ltp.len(), "transformed ticker");
        Ok(response)
    }
}
