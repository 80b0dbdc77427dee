use chrono::{Datelike, NaiveDate, Utc};

/// Canonicalize a candidate word: lowercase, trim, strip everything outside a-z
pub fn normalize_word(raw: &str) -> String {
    raw.trim()
        .chars()
        .flat_map(|c| c.to_lowercase())
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Check a normalized word against a length band
/// Rejects empty strings and anything with a non-letter left in it
pub fn is_valid_word(normalized: &str, min_len: usize, max_len: usize) -> bool {
    if normalized.is_empty() {
        return false;
    }
    if normalized.len() < min_len || normalized.len() > max_len {
        return false;
    }
    normalized.chars().all(|c| c.is_ascii_lowercase())
}

/// Stable 32-bit FNV-1a-style string hash
/// Used wherever the same key must map to the same index on every device
pub fn hash_string(value: &str) -> u32 {
    let mut hash: u32 = 2166136261;
    for byte in value.bytes() {
        hash ^= byte as u32;
        hash = hash
            .wrapping_add(hash << 1)
            .wrapping_add(hash << 4)
            .wrapping_add(hash << 7)
            .wrapping_add(hash << 8)
            .wrapping_add(hash << 24);
    }
    hash
}

/// Today's UTC calendar date as a "YYYY-MM-DD" key
pub fn today_key() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

/// Whole days from one date key to another (negative if `to` is earlier)
/// Unparseable keys count as zero days apart
pub fn day_diff(from_key: &str, to_key: &str) -> i64 {
    match (parse_date_key(from_key), parse_date_key(to_key)) {
        (Some(from), Some(to)) => (to - from).num_days(),
        _ => 0,
    }
}

/// The date key one day before the given key
pub fn yesterday_key(date_key: &str) -> Option<String> {
    let date = parse_date_key(date_key)?;
    let prev = date.pred_opt()?;
    Some(format!(
        "{:04}-{:02}-{:02}",
        prev.year(),
        prev.month(),
        prev.day()
    ))
}
