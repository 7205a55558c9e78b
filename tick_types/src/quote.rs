use serde::Deserialize;
use serde::Serialize;

use crate::directory::ProviderId;

/// Latest market data for one currency, priced in USD
///
/// Built fresh for every fetch and dropped once formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub id: ProviderId,
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    pub circulating_supply: f64,
    pub total_supply: f64,
    pub max_supply: f64,
    pub price: f64,
    pub volume_24h: f64,
    pub market_cap: f64,
    pub percent_change_1h: f64,
    pub percent_change_24h: f64,
    pub percent_change_7d: f64,
    /// Unix timestamp in seconds
    pub last_updated: i64,
}

#[cfg(any(test, feature = "testing"))]
impl QuoteRecord {
    /// Minimal record carrying just what the ticker line shows
    pub fn priced(id: u32, symbol: &str, price: f64, percent_change_24h: f64) -> Self {
        Self {
            id: ProviderId(id),
            name: symbol.to_string(),
            symbol: symbol.to_string(),
            rank: 0,
            circulating_supply: 0.0,
            total_supply: 0.0,
            max_supply: 0.0,
            price,
            volume_24h: 0.0,
            market_cap: 0.0,
            percent_change_1h: 0.0,
            percent_change_24h,
            percent_change_7d: 0.0,
            last_updated: 0,
        }
    }
}
