//! Number formatting for display.

const BYTE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count with a binary unit, e.g. `1536` -> `"1.5 KB"`.
///
/// Values keep at most two decimals with trailing zeros dropped. Sizes past
/// the gigabyte range stay in GB.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, BYTE_UNITS[unit])
}

/// Format an integer with comma thousands separators, e.g. `12345` -> `"12,345"`.
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a percentage with a fixed number of decimals and a `%` sign.
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}
