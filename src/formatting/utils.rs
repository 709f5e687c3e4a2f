pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

pub fn format_hours(hours: u32) -> String {
    format!("{}h", hours)
}

/// Display form of a role tag: "product-manager" -> "Product Manager".
pub fn format_role(role: &str) -> String {
    role.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a textual progress bar of `width` cells; the fill is capped at
/// full width even when pct exceeds 100.
pub fn progress_bar(pct: f64, width: usize) -> String {
    let ratio = (pct / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long team name", 9), "a long...");
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(40), "40h");
    }

    #[test]
    fn test_format_role() {
        assert_eq!(format_role("dev"), "Dev");
        assert_eq!(format_role("product-manager"), "Product Manager");
    }

    #[test]
    fn test_progress_bar_caps_at_width() {
        assert_eq!(progress_bar(150.0, 10), "█".repeat(10));
        assert_eq!(progress_bar(0.0, 10), "░".repeat(10));
        assert_eq!(progress_bar(50.0, 10), format!("{}{}", "█".repeat(5), "░".repeat(5)));
    }
}
