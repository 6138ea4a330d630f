/// Normalize a user-typed ticker for provider calls.
///
/// Symbols are case-insensitive; surrounding whitespace is ignored and a
/// blank symbol counts as missing.
pub fn normalize_symbol(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercases() {
        assert_eq!(normalize_symbol("aapl"), Some("AAPL".to_string()));
        assert_eq!(normalize_symbol("brk-b"), Some("BRK-B".to_string()));
        assert_eq!(normalize_symbol("shop.to"), Some("SHOP.TO".to_string()));
    }

    #[test]
    fn test_trims() {
        assert_eq!(normalize_symbol("  msft \n"), Some("MSFT".to_string()));
    }

    #[test]
    fn test_blank_is_missing() {
        assert_eq!(normalize_symbol(""), None);
        assert_eq!(normalize_symbol("   "), None);
    }
}
