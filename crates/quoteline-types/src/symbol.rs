//! Ticker symbol normalization.

/// Normalizes a ticker symbol: trims surrounding whitespace and uppercases.
///
/// Returns `None` when nothing is left after trimming.
///
/// ```
/// use quoteline_types::normalize_symbol;
///
/// assert_eq!(normalize_symbol("   aapl  ").as_deref(), Some("AAPL"));
/// assert_eq!(normalize_symbol(" \t "), None);
/// ```
#[must_use]
pub fn normalize_symbol(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol("msft").as_deref(), Some("MSFT"));
        assert_eq!(normalize_symbol("brk-b").as_deref(), Some("BRK-B"));
        assert_eq!(normalize_symbol("^gspc\n").as_deref(), Some("^GSPC"));
    }

    #[test]
    fn test_empty_symbol() {
        assert_eq!(normalize_symbol(""), None);
        assert_eq!(normalize_symbol("    "), None);
    }
}
