use crate::{BucketAssignment, Card, CoreError, Difficulty, RETIRE_AT};
use std::collections::HashSet;

/// Result of moving one card: the new assignment plus the indices used.
#[derive(Debug)]
pub struct Transition {
    pub buckets: BucketAssignment,
    pub previous_bucket: u32,
    pub next_bucket: Option<u32>,
}

impl Transition {
    pub fn retired(&self) -> bool {
        self.next_bucket.is_none()
    }
}

/// Bucket `i` is reviewed on days divisible by 2^i. Past 2^63 no day but 0 qualifies.
pub fn is_due(bucket: u32, day: u64) -> bool {
    match 1u64.checked_shl(bucket) {
        Some(period) => day % period == 0,
        None => day == 0,
    }
}

pub fn select_due(buckets: &BucketAssignment, day: u64) -> HashSet<Card> {
    buckets
        .iter()
        .filter(|(i, _)| is_due(*i, day))
        .flat_map(|(_, set)| set.iter().cloned())
        .collect()
}

/// Target bucket for a card in `current`; `None` means it retires.
pub fn next_bucket(current: u32, difficulty: Difficulty) -> Option<u32> {
    let target = match difficulty {
        Difficulty::Wrong => 0,
        Difficulty::Hard => current.saturating_sub(1),
        Difficulty::Easy => current.saturating_add(1),
    };
    (target < RETIRE_AT).then_some(target)
}

pub fn advance_card(
    buckets: &BucketAssignment,
    card: &Card,
    difficulty: Difficulty,
) -> Result<Transition, CoreError> {
    let previous_bucket =
        buckets
            .find_card_bucket(card)
            .ok_or_else(|| CoreError::CardNotScheduled {
                front: card.front.clone(),
                back: card.back.clone(),
            })?;

    let next = next_bucket(previous_bucket, difficulty);

    let mut updated = buckets.clone();
    // the stored copy carries hint and tags; keep it rather than the caller's
    let stored = updated
        .bucket(previous_bucket)
        .find(|c| *c == card)
        .cloned()
        .unwrap_or_else(|| card.clone());
    updated.remove(card);
    if let Some(target) = next {
        updated.insert(target, stored);
    }

    Ok(Transition {
        buckets: updated,
        previous_bucket,
        next_bucket: next,
    })
}
