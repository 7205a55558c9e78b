use std::collections::HashMap;

use crate::directory::CurrencyDirectoryEntry;
use crate::directory::ProviderId;

/// Lookup from upper-cased ticker symbol to provider ID
///
/// Built once from the directory. When the provider lists the same symbol
/// under several IDs, the first entry in listing order wins.
#[derive(Debug, Clone, Default)]
pub struct SymbolIndex {
    ids: HashMap<String, ProviderId>,
    duplicates: usize,
}

impl SymbolIndex {
    pub fn from_entries(entries: &[CurrencyDirectoryEntry]) -> Self {
        let mut ids = HashMap::with_capacity(entries.len());
        let mut duplicates = 0;

        for entry in entries {
            let symbol = entry.symbol.to_uppercase();
            if ids.contains_key(&symbol) {
                duplicates += 1;
                continue;
            }
            ids.insert(symbol, entry.id);
        }

        Self { ids, duplicates }
    }

    /// Case-insensitive lookup
    pub fn get(&self, symbol: &str) -> Option<ProviderId> {
        self.ids.get(&symbol.to_uppercase()).copied()
    }

    pub fn contains_id(&self, id: ProviderId) -> bool {
        self.ids.values().any(|known| *known == id)
    }

    /// Number of listing entries ignored because their symbol was already taken
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn directory() -> Vec<CurrencyDirectoryEntry> {
        vec![
            CurrencyDirectoryEntry::new(1, "Bitcoin", "BTC"),
            CurrencyDirectoryEntry::new(1027, "Ethereum", "ETH"),
            CurrencyDirectoryEntry::new(1831, "Bitcoin Cash", "BCH"),
        ]
    }

    #[test]
    fn test_lookup() {
        let index = SymbolIndex::from_entries(&directory());

        assert_eq!(index.len(), 3);
        assert_eq!(index.get("ETH"), Some(ProviderId(1027)));
        assert_eq!(index.get("XRP"), None);
    }

    #[test]
    fn test_lookup_ignores_case() {
        let index = SymbolIndex::from_entries(&directory());

        assert_eq!(index.get("btc"), Some(ProviderId(1)));
        assert_eq!(index.get("Bch"), Some(ProviderId(1831)));
    }

    #[test]
    fn test_first_seen_wins() {
        let mut entries = directory();
        entries.push(CurrencyDirectoryEntry::new(9999, "Bitcoin Imitation", "BTC"));
        entries.push(CurrencyDirectoryEntry::new(8888, "Lowercase Ether", "eth"));

        let index = SymbolIndex::from_entries(&entries);

        assert_eq!(index.get("BTC"), Some(ProviderId(1)));
        assert_eq!(index.get("ETH"), Some(ProviderId(1027)));
        assert_eq!(index.duplicates(), 2);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_contains_id() {
        let index = SymbolIndex::from_entries(&directory());

        assert!(index.contains_id(ProviderId(1831)));
        assert!(!index.contains_id(ProviderId(2)));
    }

    #[test]
    fn test_empty_directory() {
        let index = SymbolIndex::from_entries(&[]);

        assert!(index.is_empty());
        assert_eq!(index.get("BTC"), None);
    }

    proptest! {
        #[test]
        fn prop_casing_does_not_change_resolution(symbol in "[A-Z0-9]{1,8}", mask in proptest::collection::vec(any::<bool>(), 8)) {
            let index = SymbolIndex::from_entries(&[CurrencyDirectoryEntry::new(42, "Anything", &symbol)]);

            let mixed: String = symbol
                .chars()
                .zip(mask.iter().cycle())
                .map(|(c, lower)| if *lower { c.to_ascii_lowercase() } else { c })
                .collect();

            prop_assert_eq!(index.get(&mixed), Some(ProviderId(42)));
            prop_assert_eq!(index.get(&mixed), index.get(&symbol));
        }
    }
}
