//! The coordinating component that owns all mutable review state.
//!
//! Deck, bucket store and history live behind one mutex. Each public
//! operation takes that lock exactly once, so a review submission reads the
//! current assignment, computes the transition, writes the new assignment
//! and appends the history record without any other mutation in between.

use crate::{
    compute_progress, get_hint, scheduler, BucketAssignment, BucketStore, Card, CoreError,
    Difficulty, ProgressStats, Review,
};
use chrono::Utc;
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, error, info, warn};

/// Cards due on a given day, plus whether every active bucket is empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Practice {
    pub day: u64,
    pub cards: Vec<Card>,
    pub retired: bool,
}

#[derive(Debug)]
pub struct ReviewOutcome {
    pub buckets: BucketAssignment,
    pub review: Review,
}

struct State {
    deck: Vec<Card>,
    store: BucketStore,
    history: Vec<Review>,
}

impl State {
    fn apply(&mut self, card: &Card, difficulty: Difficulty) -> Result<ReviewOutcome, CoreError> {
        let t = scheduler::advance_card(self.store.buckets(), card, difficulty).map_err(|e| {
            error!(front = %card.front, back = %card.back, error = %e, "review on unscheduled card");
            e
        })?;

        let review = Review::new(
            card.clone(),
            difficulty,
            t.previous_bucket,
            t.next_bucket,
            Utc::now(),
        );
        match t.next_bucket {
            Some(next) => info!(
                front = %card.front,
                difficulty = difficulty.as_str(),
                from = t.previous_bucket,
                to = next,
                "card moved"
            ),
            None => info!(
                front = %card.front,
                from = t.previous_bucket,
                "card retired"
            ),
        }

        self.store.set_buckets(t.buckets.clone());
        self.history.push(review.clone());
        Ok(ReviewOutcome {
            buckets: t.buckets,
            review,
        })
    }

    fn lookup(&self, front: &str, back: &str) -> Result<&Card, CoreError> {
        self.deck
            .iter()
            .find(|c| c.is(front, back))
            .ok_or_else(|| CoreError::UnknownCard {
                front: front.to_string(),
                back: back.to_string(),
            })
    }
}

pub struct Engine {
    state: Mutex<State>,
}

impl Engine {
    /// Starts on day 0 with every card in bucket 0. Repeated (front, back)
    /// pairs collapse to the first occurrence.
    pub fn new<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        let mut seen = HashSet::new();
        let mut deck = Vec::new();
        for card in cards {
            if seen.insert(card.clone()) {
                deck.push(card);
            } else {
                warn!(front = %card.front, back = %card.back, "duplicate card dropped");
            }
        }
        let buckets = BucketAssignment::with_all_in(0, deck.iter().cloned());
        info!(cards = deck.len(), "engine ready");
        Self {
            state: Mutex::new(State {
                deck,
                store: BucketStore::new(buckets),
                history: Vec::new(),
            }),
        }
    }

    pub fn deck(&self) -> Vec<Card> {
        self.state.lock().deck.clone()
    }

    pub fn find_card(&self, front: &str, back: &str) -> Result<Card, CoreError> {
        self.state.lock().lookup(front, back).cloned()
    }

    pub fn day(&self) -> u64 {
        self.state.lock().store.get_day()
    }

    pub fn buckets(&self) -> BucketAssignment {
        self.state.lock().store.get_buckets()
    }

    pub fn history(&self) -> Vec<Review> {
        self.state.lock().history.clone()
    }

    pub fn find_card_bucket(&self, card: &Card) -> Option<u32> {
        self.state.lock().store.find_card_bucket(card)
    }

    pub fn select_due(&self) -> Practice {
        let s = self.state.lock();
        Self::practice(s.store.buckets(), s.store.get_day())
    }

    pub fn select_due_on(&self, day: u64) -> Practice {
        let s = self.state.lock();
        Self::practice(s.store.buckets(), day)
    }

    fn practice(buckets: &BucketAssignment, day: u64) -> Practice {
        let mut cards: Vec<Card> = scheduler::select_due(buckets, day).into_iter().collect();
        cards.sort_by(|a, b| (&a.front, &a.back).cmp(&(&b.front, &b.back)));
        let retired = buckets.is_retired();
        debug!(day, due = cards.len(), retired, "selected practice cards");
        Practice {
            day,
            cards,
            retired,
        }
    }

    pub fn advance_card(
        &self,
        card: &Card,
        difficulty: Difficulty,
    ) -> Result<ReviewOutcome, CoreError> {
        self.state.lock().apply(card, difficulty)
    }

    /// Looks the card up by identity and applies the review under one lock.
    pub fn submit_review(
        &self,
        front: &str,
        back: &str,
        difficulty: Difficulty,
    ) -> Result<ReviewOutcome, CoreError> {
        let mut s = self.state.lock();
        let card = s.lookup(front, back)?.clone();
        s.apply(&card, difficulty)
    }

    /// Hint from the stored deck entry when the card is known.
    pub fn get_hint(&self, card: &Card) -> String {
        let s = self.state.lock();
        match s.lookup(&card.front, &card.back) {
            Ok(stored) => get_hint(stored),
            Err(_) => get_hint(card),
        }
    }

    pub fn advance_day(&self) -> u64 {
        let day = self.state.lock().store.advance_day();
        info!(day, "advanced day");
        day
    }

    pub fn compute_progress(&self) -> ProgressStats {
        let s = self.state.lock();
        compute_progress(s.store.buckets(), &s.history)
    }
}
