use tick_types::QuoteRecord;

/// Render one quote as `SYMBOL: $PRICE (CHANGE%)` followed by a tab
///
/// Both numbers use Rust's `{:.2}`, which rounds the exact binary value
/// (ties go to even).
pub fn format_segment(quote: &QuoteRecord) -> String {
    format!("{}: ${:.2} ({:.2}%)\t", quote.symbol, quote.price, quote.percent_change_24h)
}

/// Concatenate the segments of every quote; the trailing tab is kept
pub fn format_quotes(quotes: &[QuoteRecord]) -> String {
    quotes.iter().map(format_segment).collect()
}
