use tick_types::ProviderId;
use tick_types::SymbolIndex;

use crate::errors::Result;
use crate::errors::TickError;

pub const DEFAULT_SYMBOLS: [&str; 3] = ["BTC", "ETH", "BCH"];

/// The symbols the user asked for, upper-cased, in request order
///
/// Shrinks as symbols turn out to be unknown to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingSet {
    symbols: Vec<String>,
}

impl WorkingSet {
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let symbols = symbols.into_iter().map(|s| s.as_ref().trim().to_uppercase()).filter(|s| !s.is_empty()).collect();
        Self { symbols }
    }

    /// Requested symbols, or `fallback` when nothing was requested
    pub fn or_default<S: AsRef<str>>(requested: &[String], fallback: &[S]) -> Self {
        let set = Self::new(requested);
        if set.is_empty() {
            Self::new(fallback)
        } else {
            set
        }
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Drop every occurrence of the given symbols
    pub fn remove_all(&mut self, unresolved: &[String]) {
        self.symbols.retain(|symbol| !unresolved.contains(symbol));
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for WorkingSet {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOLS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSymbol {
    pub symbol: String,
    pub id: ProviderId,
}

/// Outcome of resolving a whole working set in one go
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub resolved: Vec<ResolvedSymbol>,
    pub unresolved: Vec<String>,
}

/// Look up one symbol, ignoring case
pub fn resolve(symbol: &str, index: &SymbolIndex) -> Result<ProviderId> {
    let symbol = symbol.to_uppercase();
    index.get(&symbol).ok_or(TickError::SymbolNotFound(symbol))
}

/// Split the requested symbols into known and unknown, keeping request order
pub fn partition(requested: &[String], index: &SymbolIndex) -> Resolution {
    let mut resolution = Resolution::default();

    for symbol in requested {
        match resolve(symbol, index) {
            Ok(id) => resolution.resolved.push(ResolvedSymbol { symbol: symbol.to_uppercase(), id }),
            Err(_) => {
                let missing = symbol.to_uppercase();
                if !resolution.unresolved.contains(&missing) {
                    resolution.unresolved.push(missing);
                }
            }
        }
    }

    resolution
}

#[cfg(test)]
mod tests {
    use tick_types::CurrencyDirectoryEntry;

    use super::*;

    fn index() -> SymbolIndex {
        SymbolIndex::from_entries(&[
            CurrencyDirectoryEntry::new(1, "Bitcoin", "BTC"),
            CurrencyDirectoryEntry::new(1027, "Ethereum", "ETH"),
            CurrencyDirectoryEntry::new(1831, "Bitcoin Cash", "BCH"),
        ])
    }

    #[test]
    fn test_default_working_set() {
        let set = WorkingSet::default();
        assert_eq!(set.symbols(), &["BTC", "ETH", "BCH"]);
    }

    #[test]
    fn test_working_set_uppercases() {
        let set = WorkingSet::new(["btc", " Eth ", ""]);
        assert_eq!(set.symbols(), &["BTC", "ETH"]);
    }

    #[test]
    fn test_or_default() {
        let set = WorkingSet::or_default(&[], &DEFAULT_SYMBOLS);
        assert_eq!(set.len(), 3);

        let set = WorkingSet::or_default(&["xrp".to_string()], &DEFAULT_SYMBOLS);
        assert_eq!(set.symbols(), &["XRP"]);
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve("eth", &index()).unwrap(), ProviderId(1027));
        assert!(matches!(resolve("doge", &index()), Err(TickError::SymbolNotFound(s)) if s == "DOGE"));
    }

    #[test]
    fn test_partition_keeps_order() {
        let requested = WorkingSet::new(["BCH", "XRP", "BTC", "DOGE"]);

        let resolution = partition(requested.symbols(), &index());

        assert_eq!(
            resolution.resolved,
            vec![
                ResolvedSymbol { symbol: "BCH".to_string(), id: ProviderId(1831) },
                ResolvedSymbol { symbol: "BTC".to_string(), id: ProviderId(1) },
            ]
        );
        assert_eq!(resolution.unresolved, vec!["XRP", "DOGE"]);
    }

    #[test]
    fn test_partition_reports_repeated_miss_once() {
        let requested = WorkingSet::new(["XRP", "xrp"]);

        let resolution = partition(requested.symbols(), &index());

        assert!(resolution.resolved.is_empty());
        assert_eq!(resolution.unresolved, vec!["XRP"]);
    }

    #[test]
    fn test_remove_all() {
        let mut set = WorkingSet::new(["BTC", "XRP", "ETH", "XRP"]);

        set.remove_all(&["XRP".to_string()]);

        assert_eq!(set.symbols(), &["BTC", "ETH"]);
    }
}
