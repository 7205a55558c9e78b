use serde::Deserialize;
use serde::de::DeserializeOwned;
use tick_types::CurrencyDirectoryEntry;
use tick_types::ProviderId;
use tick_types::QuoteRecord;
use tick_types::serde_helpers::null_as_default;
use tracing::debug;

use crate::client::HttpClient;
use crate::client::HttpClientConfig;
use crate::errors::HttpError;
use crate::errors::Result;

pub const COINMARKETCAP_BASE_URL: &str = "https://api.coinmarketcap.com/v2";

/// CoinMarketCap public API client for listings and per-currency tickers
pub struct CoinMarketCapClient {
    client: HttpClient,
    base_url: String,
}

impl CoinMarketCapClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a new client builder
    pub fn builder() -> CoinMarketCapClientBuilder {
        CoinMarketCapClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get every currency the provider knows about, in listing order
    pub async fn listings(&self) -> Result<Vec<CurrencyDirectoryEntry>> {
        let url = format!("{}/listings/", self.base_url);
        let entries: Vec<CurrencyDirectoryEntry> = self.get_data(&url).await?;
        debug!("Listings returned {} currencies", entries.len());
        Ok(entries)
    }

    /// Get the USD ticker for one currency
    pub async fn ticker(&self, id: ProviderId) -> Result<QuoteRecord> {
        let url = format!("{}/ticker/{}", self.base_url, id);
        let ticker: TickerData = self.get_data(&url).await?;
        Ok(ticker.into())
    }

    /// GET a provider envelope and unwrap its `data` member
    async fn get_data<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(self.handle_error_response(response).await);
        }

        let bytes = response.bytes().await?;
        let envelope: Envelope<T> = serde_json::from_slice(&bytes)?;

        if let Some(message) = envelope.metadata.error_message() {
            return Err(HttpError::ApiError(message));
        }

        envelope.data.ok_or_else(|| HttpError::InvalidResponse(format!("no data in response from {url}")))
    }

    /// Handle error response from the provider
    async fn handle_error_response(&self, response: reqwest::Response) -> HttpError {
        let status = response.status();

        let message = match response.json::<Envelope<serde_json::Value>>().await {
            Ok(envelope) => envelope.metadata.error_message(),
            Err(_) => None,
        };

        HttpError::Status {
            status: status.as_u16(),
            message: message.unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown status").to_string()),
        }
    }
}

/// Builder for configuring the CoinMarketCap client
pub struct CoinMarketCapClientBuilder {
    http_config: HttpClientConfig,
    base_url: String,
}

impl Default for CoinMarketCapClientBuilder {
    fn default() -> Self {
        Self { http_config: HttpClientConfig::default(), base_url: COINMARKETCAP_BASE_URL.to_string() }
    }
}

impl CoinMarketCapClientBuilder {
    /// Set custom base URL
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Configure HTTP client settings
    pub fn http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    /// Build the CoinMarketCap client
    pub fn build(self) -> Result<CoinMarketCapClient> {
        let client = HttpClient::with_config(self.http_config)?;

        Ok(CoinMarketCapClient { client, base_url: self.base_url })
    }
}

// Every endpoint wraps its payload as {"data": ..., "metadata": {...}}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    #[serde(default)]
    metadata: Metadata,
}

#[derive(Debug, Default, Deserialize)]
struct Metadata {
    #[serde(default)]
    error: Option<serde_json::Value>,
}

impl Metadata {
    fn error_message(&self) -> Option<String> {
        match &self.error {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(message)) => Some(message.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TickerData {
    id: ProviderId,
    name: String,
    symbol: String,
    #[serde(default, deserialize_with = "null_as_default")]
    rank: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    circulating_supply: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    total_supply: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    max_supply: f64,
    quotes: Quotes,
    #[serde(default, deserialize_with = "null_as_default")]
    last_updated: i64,
}

#[derive(Debug, Deserialize)]
struct Quotes {
    #[serde(rename = "USD")]
    usd: UsdQuote,
}

#[derive(Debug, Deserialize)]
struct UsdQuote {
    #[serde(default, deserialize_with = "null_as_default")]
    price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    volume_24h: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    market_cap: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    percent_change_1h: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    percent_change_24h: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    percent_change_7d: f64,
}

impl From<TickerData> for QuoteRecord {
    fn from(ticker: TickerData) -> Self {
        let usd = ticker.quotes.usd;
        QuoteRecord {
            id: ticker.id,
            name: ticker.name,
            symbol: ticker.symbol,
            rank: ticker.rank,
            circulating_supply: ticker.circulating_supply,
            total_supply: ticker.total_supply,
            max_supply: ticker.max_supply,
            price: usd.price,
            volume_24h: usd.volume_24h,
            market_cap: usd.market_cap,
            percent_change_1h: usd.percent_change_1h,
            percent_change_24h: usd.percent_change_24h,
            percent_change_7d: usd.percent_change_7d,
            last_updated: ticker.last_updated,
        }
    }
}
