//! Human-readable number formatting for dashboard metrics

/// 千位后缀：thousand, million, billion, trillion
const SUFFIXES: [&str; 4] = ["k", "m", "b", "t"];

/// 默认保留的有效数字位数
const DEFAULT_PLACES: usize = 3;

/// Placeholder shown when a metric has not been fetched yet
pub const PLACEHOLDER: &str = "-";

/// Format a count with a magnitude suffix, keeping three significant digits.
///
/// `999` → `"999"`, `1234` → `"1.23k"`, `12345` → `"12.3k"`,
/// `1_500_000` → `"1.5m"`. Digits beyond the precision are truncated,
/// never rounded up into the next magnitude.
pub fn pretty_number(value: u64) -> String {
    pretty_number_with_places(value, DEFAULT_PLACES)
}

pub fn pretty_number_with_places(value: u64, places: usize) -> String {
    if value < 1000 {
        return value.to_string();
    }

    let mut divisor: u64 = 1;
    let mut magnitude = 0;
    while value / divisor >= 1000 && magnitude < SUFFIXES.len() {
        divisor *= 1000;
        magnitude += 1;
    }

    let whole = value / divisor;
    let decimals = places.saturating_sub(whole.to_string().len()) as u32;
    let scale = 10u64.pow(decimals);
    // remainder < divisor <= 10^12 and scale <= 100, so this cannot overflow
    let fraction = (value % divisor) * scale / divisor;

    let mut text = if decimals > 0 && fraction > 0 {
        format!("{}.{:0width$}", whole, fraction, width = decimals as usize)
    } else {
        whole.to_string()
    };
    if text.contains('.') {
        let trimmed_len = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed_len);
    }

    format!("{}{}", text, SUFFIXES[magnitude - 1])
}

/// Render `value` through `content`, or the placeholder dash when absent
pub fn dash<T>(value: Option<T>, content: impl FnOnce(T) -> String) -> String {
    match value {
        Some(v) => content(v),
        None => PLACEHOLDER.to_string(),
    }
}

/// Value-or-dash rule for the users / installations metrics
pub fn format_metric(value: Option<u64>) -> String {
    dash(value, pretty_number)
}
