use crate::{BucketAssignment, Card};

/// Mutable scheduling state: the current bucket assignment plus the day.
///
/// Has no locking of its own; `Engine` owns one behind a mutex.
#[derive(Clone, Debug, Default)]
pub struct BucketStore {
    buckets: BucketAssignment,
    day: u64,
}

impl BucketStore {
    pub fn new(buckets: BucketAssignment) -> Self {
        Self { buckets, day: 0 }
    }

    /// Owned snapshot; later writes to the store do not show through it.
    pub fn get_buckets(&self) -> BucketAssignment {
        self.buckets.clone()
    }

    pub fn buckets(&self) -> &BucketAssignment {
        &self.buckets
    }

    pub fn set_buckets(&mut self, new: BucketAssignment) {
        debug_assert!(new.check_invariant().is_ok());
        self.buckets = new;
    }

    pub fn get_day(&self) -> u64 {
        self.day
    }

    pub fn advance_day(&mut self) -> u64 {
        self.day += 1;
        self.day
    }

    pub fn find_card_bucket(&self, card: &Card) -> Option<u32> {
        self.buckets.find_card_bucket(card)
    }
}
