//! Etherscan-style account API client.

use crate::ledger::Category;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_API_URL: &str = "https://api.etherscan.io/v2/api";
const ETHEREUM_MAINNET: u32 = 1;
const REQUEST_TIMEOUT_SECS: u64 = 15;
const DEFAULT_END_BLOCK: u64 = 99_999_999;

/// Environment variable holding the explorer API key.
pub const API_KEY_ENV: &str = "ETHERSCAN_API_KEY";

/// One raw transaction record as returned by the API. The field set varies
/// by category, so records stay opaque until normalization.
pub type RawTransaction = serde_json::Map<String, serde_json::Value>;

#[derive(Clone, Debug)]
pub struct FetchConfig {
    pub base_url: String,
    pub chain_id: u32,
    pub api_key: String,
}

impl FetchConfig {
    /// Build a config from the environment. Fails when the API key is
    /// absent or blank, before any network activity.
    pub fn from_env() -> Result<Self, FetchError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| FetchError::MissingApiKey)?;
        if api_key.trim().is_empty() {
            return Err(FetchError::MissingApiKey);
        }
        Ok(Self {
            base_url: DEFAULT_API_URL.to_string(),
            chain_id: ETHEREUM_MAINNET,
            api_key,
        })
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("api error: status {0} body {1}")]
    Api(u16, String),
    #[error("api rejected: {0}")]
    Rejected(String),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("missing ETHERSCAN_API_KEY environment variable")]
    MissingApiKey,
}

/// Response envelope shared by all account-module actions.
#[derive(Debug, Deserialize)]
pub struct EtherscanResponse {
    pub status: String,
    pub message: String,
    #[serde(default)]
    pub result: serde_json::Value,
}

/// Explorer client with a fixed request timeout. One GET per category,
/// no retries, no pagination.
pub struct Fetcher {
    config: FetchConfig,
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { config, client })
    }

    /// Fetch one category's transaction list for `address`. Never fails:
    /// any transport or API error is logged and yields an empty list so the
    /// remaining categories still run.
    pub async fn account_txs(
        &self,
        address: &str,
        category: Category,
        from_block: Option<u64>,
        to_block: Option<u64>,
    ) -> Vec<RawTransaction> {
        match self
            .try_account_txs(address, category, from_block, to_block)
            .await
        {
            Ok(rows) => {
                info!(action = category.action(), count = rows.len(), "fetched");
                rows
            }
            Err(e) => {
                warn!(
                    action = category.action(),
                    error = %e,
                    "category fetch failed; continuing with no records"
                );
                Vec::new()
            }
        }
    }

    async fn try_account_txs(
        &self,
        address: &str,
        category: Category,
        from_block: Option<u64>,
        to_block: Option<u64>,
    ) -> Result<Vec<RawTransaction>, FetchError> {
        let url = self.request_url(address, category, from_block, to_block);
        let res = self.client.get(url).send().await?;
        let status = res.status().as_u16();
        let body = res.text().await.unwrap_or_default();
        Self::decode_response(status, &body)
    }

    fn request_url(
        &self,
        address: &str,
        category: Category,
        from_block: Option<u64>,
        to_block: Option<u64>,
    ) -> String {
        format!(
            "{}?chainid={}&module=account&action={}&address={}&startblock={}&endblock={}&sort=asc&apikey={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.chain_id,
            category.action(),
            urlencoding::encode(address),
            from_block.unwrap_or(0),
            to_block.unwrap_or(DEFAULT_END_BLOCK),
            urlencoding::encode(&self.config.api_key),
        )
    }

    /// Validate one response. HTTP status must be exactly 200, the body must
    /// parse as the envelope, the application status must be `"1"`, and the
    /// result must be a record list, which is returned unchanged.
    pub fn decode_response(
        http_status: u16,
        body: &str,
    ) -> Result<Vec<RawTransaction>, FetchError> {
        if http_status != 200 {
            return Err(FetchError::Api(http_status, body.to_string()));
        }
        let envelope: EtherscanResponse =
            serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
        if envelope.status != "1" {
            return Err(FetchError::Rejected(envelope.message));
        }
        serde_json::from_value(envelope.result).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}
