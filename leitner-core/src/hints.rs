use crate::{Card, NO_HINT};

/// The authored hint, or the fixed fallback when there is none.
pub fn get_hint(card: &Card) -> String {
    card.hint
        .as_deref()
        .filter(|h| !h.trim().is_empty())
        .unwrap_or(NO_HINT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_when_missing_or_blank() {
        assert_eq!(get_hint(&Card::new("a", "b")), NO_HINT);
        assert_eq!(get_hint(&Card::new("a", "b").with_hint("  ")), NO_HINT);
        assert_eq!(
            get_hint(&Card::new("a", "b").with_hint("starts with a")),
            "starts with a"
        );
    }
}
