pub mod client;
pub mod coinmarketcap;
pub mod errors;

pub use client::HttpClient;
pub use client::HttpClientConfig;
pub use coinmarketcap::CoinMarketCapClient;
pub use errors::HttpError;
pub use errors::Result;
