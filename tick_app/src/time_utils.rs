use time::OffsetDateTime;
use time::macros::format_description;

/// Render a timestamp as `YYYY-MM-DD HH:MM:SS UTC`
pub fn format_timestamp(at: OffsetDateTime) -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
    at.format(format).unwrap_or_else(|_| at.unix_timestamp().to_string())
}

/// Current wall-clock time for the watch-mode header
pub fn now_timestamp() -> String {
    format_timestamp(OffsetDateTime::now_utc())
}
