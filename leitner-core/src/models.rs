use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use uuid::Uuid;

use crate::CoreError;

pub type ReviewId = Uuid;

/// Highest bucket index that is still scheduled.
pub const MAX_ACTIVE_BUCKET: u32 = 4;
/// Target index at which a card leaves the buckets for good.
pub const RETIRE_AT: u32 = MAX_ACTIVE_BUCKET + 1;

pub const NO_HINT: &str = "No hint available for this card.";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Wrong,
    Hard,
    Easy,
}

impl Difficulty {
    pub fn is_correct(&self) -> bool {
        matches!(self, Difficulty::Hard | Difficulty::Easy)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Wrong => "wrong",
            Difficulty::Hard => "hard",
            Difficulty::Easy => "easy",
        }
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0" | "w" | "wrong" => Ok(Difficulty::Wrong),
            "1" | "h" | "hard" => Ok(Difficulty::Hard),
            "2" | "e" | "easy" => Ok(Difficulty::Easy),
            _ => Err(CoreError::Invalid("difficulty must be wrong, hard or easy")),
        }
    }
}

/// A flashcard. Identity is the (front, back) pair; hint and tags ride along.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            hint: None,
            tags: BTreeSet::new(),
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn is(&self, front: &str, back: &str) -> bool {
        self.front == front && self.back == back
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.front == other.front && self.back == other.back
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.front.hash(state);
        self.back.hash(state);
    }
}

/// One graded review. `next_bucket` is `None` when the card retired.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub card: Card,
    pub difficulty: Difficulty,
    pub previous_bucket: u32,
    pub next_bucket: Option<u32>,
    pub reviewed_at: DateTime<Utc>,
}

impl Review {
    pub fn new(
        card: Card,
        difficulty: Difficulty,
        previous_bucket: u32,
        next_bucket: Option<u32>,
        reviewed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            card,
            difficulty,
            previous_bucket,
            next_bucket,
            reviewed_at,
        }
    }

    pub fn is_retirement(&self) -> bool {
        self.next_bucket.is_none()
    }
}
