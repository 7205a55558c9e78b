use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// Print cryptocurrency prices and their 24h change
///
/// tick -t BTC -t XRP -w 10s
#[derive(Parser, Debug)]
#[command(name = "tick", version, about, long_about = None)]
pub struct Cli {
    /// Ticker symbol to show; repeat for more (default: BTC, ETH, BCH)
    #[arg(short = 't', long = "ticker", value_name = "SYMBOL")]
    pub tickers: Vec<String>,

    /// Redraw every INTERVAL, e.g. 500ms, 5s, 1m30s (0 prints once)
    #[arg(short = 'w', long = "watch", value_name = "INTERVAL", value_parser = parse_interval, default_value = "0")]
    pub watch: Duration,

    /// Configuration file, ignored when missing
    #[arg(short = 'c', long = "config", value_name = "PATH", default_value = "tick.toml")]
    pub config: PathBuf,

    /// Provider base URL, overrides the configuration
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,
}

/// Parses an interval such as `5s`, `250ms`, `1m30s` or bare seconds
pub fn parse_interval(input: &str) -> Result<Duration, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("interval is empty".to_string());
    }
    if let Ok(secs) = input.parse::<u64>() {
        return Ok(Duration::from_secs(secs));
    }

    let mut total = Duration::ZERO;
    let mut rest = input;

    while !rest.is_empty() {
        let number_len = rest.find(|c: char| !(c.is_ascii_digit() || c == '.')).unwrap_or(rest.len());
        if number_len == 0 {
            return Err(format!("invalid interval '{input}'"));
        }
        let (number, tail) = rest.split_at(number_len);
        let unit_len = tail.find(|c: char| c.is_ascii_digit() || c == '.').unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_len);

        let value: f64 = number.parse().map_err(|_| format!("invalid number '{number}' in interval '{input}'"))?;
        let unit_secs = match unit {
            "ms" => 0.001,
            "s" => 1.0,
            "m" => 60.0,
            "h" => 3600.0,
            "" => return Err(format!("missing unit after '{number}' in interval '{input}'")),
            other => return Err(format!("unknown unit '{other}' in interval '{input}' (use ms, s, m or h)")),
        };

        let term = Duration::try_from_secs_f64(value * unit_secs).map_err(|err| format!("interval '{input}' out of range: {err}"))?;
        total = total.checked_add(term).ok_or_else(|| format!("interval '{input}' out of range"))?;
        rest = next;
    }

    Ok(total)
}
