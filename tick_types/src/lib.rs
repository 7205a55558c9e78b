//! # tick_types
//!
//! Domain types shared by the provider client and the ticker app.

pub mod directory;
pub mod quote;
pub mod serde_helpers;
pub mod symbol_index;

pub use directory::CurrencyDirectoryEntry;
pub use directory::ProviderId;
pub use quote::QuoteRecord;
pub use symbol_index::SymbolIndex;
