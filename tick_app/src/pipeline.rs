use std::time::Duration;

use tick_types::SymbolIndex;
use tracing::debug;
use tracing::info;
use tracing::warn;

use crate::errors::Result;
use crate::errors::TickError;
use crate::formatter;
use crate::provider::PriceProvider;
use crate::resolver;
use crate::resolver::WorkingSet;

const DEFAULT_NOT_FOUND_PAUSE: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// How long to hold after warning about unknown symbols
    pub not_found_pause: Duration,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self { not_found_pause: DEFAULT_NOT_FOUND_PAUSE }
    }
}

/// Symbol index and working set threaded through every pass
pub struct Pipeline<P> {
    provider: P,
    index: SymbolIndex,
    working_set: WorkingSet,
    settings: PipelineSettings,
}

impl<P: PriceProvider> Pipeline<P> {
    /// Load the currency directory once and index it
    pub async fn bootstrap(provider: P, working_set: WorkingSet, settings: PipelineSettings) -> Result<Self> {
        let directory = provider.load_directory().await.map_err(|err| TickError::DirectoryLoad(Box::new(err.into())))?;
        let index = SymbolIndex::from_entries(&directory);

        info!("Loaded {} currencies ({} distinct symbols)", directory.len(), index.len());
        if index.duplicates() > 0 {
            debug!("Ignored {} listings whose symbol was already taken", index.duplicates());
        }

        Ok(Self { provider, index, working_set, settings })
    }

    /// Resolve the working set, fetch each quote in turn and format the line
    ///
    /// Unknown symbols are dropped for good. Fails once nothing is left to fetch.
    pub async fn pass(&mut self) -> Result<String> {
        let resolution = resolver::partition(self.working_set.symbols(), &self.index);

        if !resolution.unresolved.is_empty() {
            for symbol in &resolution.unresolved {
                warn!("Symbol '{symbol}' not found, continuing without it");
            }
            self.working_set.remove_all(&resolution.unresolved);

            if self.working_set.is_empty() {
                return Err(TickError::AllSymbolsExhausted);
            }
            tokio::time::sleep(self.settings.not_found_pause).await;
        }

        if resolution.resolved.is_empty() {
            return Err(TickError::AllSymbolsExhausted);
        }

        let mut quotes = Vec::with_capacity(resolution.resolved.len());
        for resolved in &resolution.resolved {
            debug_assert!(self.index.contains_id(resolved.id));
            debug!("Fetching {} (id {})", resolved.symbol, resolved.id);
            quotes.push(self.provider.fetch_quote(resolved.id).await?);
        }

        Ok(formatter::format_quotes(&quotes))
    }

    pub fn working_set(&self) -> &WorkingSet {
        &self.working_set
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}
