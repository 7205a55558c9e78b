use serde::Deserialize;
use serde::Serialize;

/// Numeric identifier the provider assigns to a currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(pub u32);

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the provider's currency listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyDirectoryEntry {
    pub id: ProviderId,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub website_slug: String,
}

#[cfg(any(test, feature = "testing"))]
impl CurrencyDirectoryEntry {
    pub fn new(id: u32, name: &str, symbol: &str) -> Self {
        Self { id: ProviderId(id), name: name.to_string(), symbol: symbol.to_string(), website_slug: name.to_lowercase().replace(' ', "-") }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_id_display() {
        assert_eq!(ProviderId(1027).to_string(), "1027");
    }

    #[test]
    fn test_entry_deserialize() {
        let json = r#"{"id": 1, "name": "Bitcoin", "symbol": "BTC", "website_slug": "bitcoin"}"#;
        let entry: CurrencyDirectoryEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry, CurrencyDirectoryEntry::new(1, "Bitcoin", "BTC"));
    }

    #[test]
    fn test_entry_without_slug() {
        let json = r#"{"id": 2, "name": "Litecoin", "symbol": "LTC"}"#;
        let entry: CurrencyDirectoryEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.id, ProviderId(2));
        assert!(entry.website_slug.is_empty());
    }
}
