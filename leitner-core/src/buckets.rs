use crate::{Card, CoreError, MAX_ACTIVE_BUCKET};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Bucket index -> cards currently in that bucket.
///
/// Cloning yields an independent snapshot; the scheduler never edits an
/// assignment it was handed, it builds a new one. Indices that are not
/// listed behave as empty buckets. Emptied buckets stay listed so that an
/// index which once held cards keeps showing up in progress reports.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketAssignment {
    buckets: BTreeMap<u32, HashSet<Card>>,
}

impl BucketAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_all_in<I>(bucket: u32, cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut a = Self::new();
        a.buckets.insert(bucket, cards.into_iter().collect());
        a
    }

    /// Listed indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.buckets.keys().copied()
    }

    pub fn bucket(&self, index: u32) -> impl Iterator<Item = &Card> + '_ {
        self.buckets.get(&index).into_iter().flat_map(|s| s.iter())
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &HashSet<Card>)> + '_ {
        self.buckets.iter().map(|(i, s)| (*i, s))
    }

    pub fn len(&self, index: u32) -> usize {
        self.buckets.get(&index).map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(|s| s.is_empty())
    }

    pub fn total_cards(&self) -> usize {
        self.buckets.values().map(|s| s.len()).sum()
    }

    pub fn contains(&self, index: u32, card: &Card) -> bool {
        self.buckets
            .get(&index)
            .map(|s| s.contains(card))
            .unwrap_or(false)
    }

    /// Adds `card` to bucket `index`, creating the bucket if needed.
    /// Returns false when the card was already in that bucket.
    pub fn insert(&mut self, index: u32, card: Card) -> bool {
        self.buckets.entry(index).or_default().insert(card)
    }

    /// Removes `card` from whichever bucket holds it.
    pub fn remove(&mut self, card: &Card) -> Option<u32> {
        let index = self.find_card_bucket(card)?;
        if let Some(set) = self.buckets.get_mut(&index) {
            set.remove(card);
        }
        Some(index)
    }

    pub fn find_card_bucket(&self, card: &Card) -> Option<u32> {
        self.buckets
            .iter()
            .find(|(_, set)| set.contains(card))
            .map(|(i, _)| *i)
    }

    /// True once every active bucket (0 through `MAX_ACTIVE_BUCKET`) is empty.
    pub fn is_retired(&self) -> bool {
        (0..=MAX_ACTIVE_BUCKET).all(|i| self.len(i) == 0)
    }

    /// Every card must sit in at most one bucket.
    pub fn check_invariant(&self) -> Result<(), CoreError> {
        let mut seen: HashSet<&Card> = HashSet::new();
        for (index, set) in &self.buckets {
            for card in set {
                if !seen.insert(card) {
                    return Err(CoreError::InvariantViolation(format!(
                        "card {:?}/{:?} appears again in bucket {}",
                        card.front, card.back, index
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlisted_index_is_empty() {
        let a = BucketAssignment::with_all_in(0, [Card::new("a", "b")]);
        assert_eq!(a.len(3), 0);
        assert_eq!(a.bucket(3).count(), 0);
        assert!(!a.contains(3, &Card::new("a", "b")));
    }

    #[test]
    fn remove_keeps_index_listed() {
        let card = Card::new("a", "b");
        let mut a = BucketAssignment::with_all_in(2, [card.clone()]);
        assert_eq!(a.remove(&card), Some(2));
        assert_eq!(a.indices().collect::<Vec<_>>(), vec![2]);
        assert_eq!(a.total_cards(), 0);
        assert_eq!(a.remove(&card), None);
    }

    #[test]
    fn invariant_flags_duplicates() {
        let card = Card::new("a", "b");
        let mut a = BucketAssignment::new();
        a.insert(0, card.clone());
        assert!(a.check_invariant().is_ok());
        a.insert(3, card.with_hint("other hint, same identity"));
        assert!(matches!(
            a.check_invariant(),
            Err(CoreError::InvariantViolation(_))
        ));
    }

    #[test]
    fn retired_only_looks_at_active_buckets() {
        let mut a = BucketAssignment::new();
        assert!(a.is_retired());
        a.insert(7, Card::new("x", "y"));
        assert!(a.is_retired());
        a.insert(4, Card::new("p", "q"));
        assert!(!a.is_retired());
    }
}
