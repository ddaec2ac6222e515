pub fn extract_first_name(name: &str) -> &str {
    name.split_whitespace()
        .next()
        .unwrap_or(name)
}

/// `2995` -> `$29.95`
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

pub fn format_distance(km: f64) -> String {
    format!("{:.1} km", km)
}

/// `95` -> `1h 35m`, `40` -> `40 min`
pub fn format_minutes(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{} min", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// Character-safe truncation with a trailing ellipsis.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
