use leitner_core::Card;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CardOut {
    pub front: String,
    pub back: String,
    pub hint: Option<String>,
    pub tags: Vec<String>,
}

impl From<&Card> for CardOut {
    fn from(c: &Card) -> Self {
        Self {
            front: c.front.clone(),
            back: c.back.clone(),
            hint: c.hint.clone(),
            tags: c.tags.iter().cloned().collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PracticeOut {
    pub day: u64,
    pub cards: Vec<CardOut>,
    pub retired: bool,
}

#[derive(Debug, Deserialize)]
pub struct CardQuery {
    pub front: String,
    pub back: String,
}

#[derive(Debug, Serialize)]
pub struct HintOut {
    pub hint: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateIn {
    pub front: String,
    pub back: String,
    pub difficulty: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOut {
    pub previous_bucket: u32,
    pub next_bucket: Option<u32>,
    pub retired: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayOut {
    pub current_day: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct CardsQuery {
    pub tag: Option<String>,
    pub q: Option<String>,
}
