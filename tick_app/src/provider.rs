use tick_http::CoinMarketCapClient;
use tick_http::HttpError;
use tick_types::CurrencyDirectoryEntry;
use tick_types::ProviderId;
use tick_types::QuoteRecord;

/// Source of the currency directory and per-currency quotes
///
/// Calls are awaited one at a time; implementations need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait PriceProvider {
    async fn load_directory(&self) -> Result<Vec<CurrencyDirectoryEntry>, HttpError>;

    async fn fetch_quote(&self, id: ProviderId) -> Result<QuoteRecord, HttpError>;
}

impl PriceProvider for CoinMarketCapClient {
    async fn load_directory(&self) -> Result<Vec<CurrencyDirectoryEntry>, HttpError> {
        self.listings().await
    }

    async fn fetch_quote(&self, id: ProviderId) -> Result<QuoteRecord, HttpError> {
        self.ticker(id).await
    }
}
