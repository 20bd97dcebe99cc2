use crate::{BucketAssignment, Difficulty, Review};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub total: u32,
    pub wrong: u32,
    pub hard: u32,
    pub easy: u32,
}

impl Totals {
    pub fn record(&mut self, d: Difficulty) {
        self.total += 1;
        match d {
            Difficulty::Wrong => self.wrong += 1,
            Difficulty::Hard => self.hard += 1,
            Difficulty::Easy => self.easy += 1,
        }
    }

    pub fn correct(&self) -> u32 {
        self.hard + self.easy
    }

    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct() as f64 / self.total as f64
        }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub total_flashcards: usize,
    pub bucket_distribution: BTreeMap<u32, usize>,
    pub accuracy_rate: f64,
    pub reviews_per_bucket: BTreeMap<u32, usize>,
    pub outcomes: Totals,
}

pub fn compute_progress(buckets: &BucketAssignment, history: &[Review]) -> ProgressStats {
    let bucket_distribution: BTreeMap<u32, usize> =
        buckets.iter().map(|(i, set)| (i, set.len())).collect();

    let mut reviews_per_bucket: BTreeMap<u32, usize> =
        buckets.indices().map(|i| (i, 0)).collect();
    let mut outcomes = Totals::default();
    for r in history {
        outcomes.record(r.difficulty);
        *reviews_per_bucket.entry(r.previous_bucket).or_default() += 1;
    }

    ProgressStats {
        total_flashcards: buckets.total_cards(),
        bucket_distribution,
        accuracy_rate: outcomes.accuracy(),
        reviews_per_bucket,
        outcomes,
    }
}
