use crate::Card;

fn mentions(card: &Card, needle: &str) -> bool {
    let hay = |s: &str| s.to_lowercase().contains(needle);
    hay(card.front.as_str())
        || hay(card.back.as_str())
        || card.hint.as_deref().is_some_and(hay)
        || card.tags.iter().any(|t| hay(t.as_str()))
}

/// Cards whose front, back, hint or any tag contains `query`. Blank matches all.
pub fn filter_by_text<'a, I>(cards: I, query: &str) -> Vec<&'a Card>
where
    I: IntoIterator<Item = &'a Card>,
{
    let needle = query.trim().to_lowercase();
    cards
        .into_iter()
        .filter(|c| needle.is_empty() || mentions(c, &needle))
        .collect()
}

pub fn filter_by_tag<'a, I>(cards: I, tag: &str) -> Vec<&'a Card>
where
    I: IntoIterator<Item = &'a Card>,
{
    let wanted = tag.trim();
    cards
        .into_iter()
        .filter(|c| c.tags.iter().any(|t| t.eq_ignore_ascii_case(wanted)))
        .collect()
}
