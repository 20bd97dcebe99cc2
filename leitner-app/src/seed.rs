//! Loads the deck the engine starts with.

use anyhow::{bail, Context, Result};
use leitner_core::Card;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::paths::default_deck_file;

const BUILTIN_DECK: &str = include_str!("../assets/default_deck.json");

#[derive(Deserialize)]
struct CsvRow {
    front: String,
    back: String,
    #[serde(default)]
    hint: Option<String>,
    #[serde(default)]
    tags: Option<String>,
}

impl From<CsvRow> for Card {
    fn from(r: CsvRow) -> Self {
        let mut card = Card::new(r.front.trim(), r.back.trim());
        card.hint = r.hint.map(|h| h.trim().to_string()).filter(|h| !h.is_empty());
        card.tags = r
            .tags
            .unwrap_or_default()
            .split(';')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        card
    }
}

/// Explicit path first, then the data-dir deck, then the built-in one.
pub fn load_deck(path: Option<&Path>) -> Result<Vec<Card>> {
    if let Some(p) = path {
        return load_file(p);
    }
    let fallback = default_deck_file();
    if fallback.is_file() {
        return load_file(&fallback);
    }
    info!("using built-in deck");
    parse_json(BUILTIN_DECK)
}

pub fn load_file(path: &Path) -> Result<Vec<Card>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let cards = match ext.as_deref() {
        Some("json") => {
            let s = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_json(&s)?
        }
        Some("csv") => {
            let rdr = csv::Reader::from_path(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_csv(rdr)?
        }
        _ => bail!("unsupported deck format: {} (use .json or .csv)", path.display()),
    };
    info!(path = %path.display(), cards = cards.len(), "loaded deck");
    Ok(cards)
}

pub fn parse_json(s: &str) -> Result<Vec<Card>> {
    let cards: Vec<Card> = serde_json::from_str(s).context("parsing deck json")?;
    if let Some(i) = cards.iter().position(|c| c.front.trim().is_empty() || c.back.trim().is_empty()) {
        bail!("card #{} has an empty front or back", i + 1);
    }
    Ok(cards)
}

pub fn parse_csv<R: std::io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Card>> {
    let mut cards = Vec::new();
    for (i, row) in rdr.deserialize::<CsvRow>().enumerate() {
        let card: Card = row.with_context(|| format!("csv row {}", i + 1))?.into();
        if card.front.is_empty() || card.back.is_empty() {
            bail!("csv row {} has an empty front or back", i + 1);
        }
        cards.push(card);
    }
    Ok(cards)
}
