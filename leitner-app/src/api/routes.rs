use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use leitner_core::{filter_by_tag, filter_by_text, Card, CoreError, Difficulty, Engine, ProgressStats};

use crate::api::dto::{
    CardOut, CardQuery, CardsQuery, DayOut, HintOut, PracticeOut, UpdateIn, UpdateOut,
};

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Engine>,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        let status = match &e {
            CoreError::NotFound(_) | CoreError::UnknownCard { .. } => StatusCode::NOT_FOUND,
            CoreError::Invalid(_) => StatusCode::BAD_REQUEST,
            CoreError::CardNotScheduled { .. } | CoreError::InvariantViolation(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if e.is_internal() {
            error!(error = %e, "engine bookkeeping fault");
        }
        Self {
            status,
            message: e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub async fn practice(State(st): State<Arc<AppState>>) -> Json<PracticeOut> {
    let p = st.engine.select_due();
    Json(PracticeOut {
        day: p.day,
        cards: p.cards.iter().map(CardOut::from).collect(),
        retired: p.retired,
    })
}

pub async fn hint(
    State(st): State<Arc<AppState>>,
    Query(q): Query<CardQuery>,
) -> Result<Json<HintOut>, ApiError> {
    let card = st.engine.find_card(&q.front, &q.back)?;
    Ok(Json(HintOut {
        hint: st.engine.get_hint(&card),
    }))
}

pub async fn update(
    State(st): State<Arc<AppState>>,
    Json(body): Json<UpdateIn>,
) -> Result<Json<UpdateOut>, ApiError> {
    let difficulty: Difficulty = body.difficulty.parse()?;
    let out = st.engine.submit_review(&body.front, &body.back, difficulty)?;
    Ok(Json(UpdateOut {
        previous_bucket: out.review.previous_bucket,
        next_bucket: out.review.next_bucket,
        retired: out.review.is_retirement(),
    }))
}

pub async fn progress(State(st): State<Arc<AppState>>) -> Json<ProgressStats> {
    Json(st.engine.compute_progress())
}

pub async fn next_day(State(st): State<Arc<AppState>>) -> Json<DayOut> {
    Json(DayOut {
        current_day: st.engine.advance_day(),
    })
}

pub async fn list_cards(
    State(st): State<Arc<AppState>>,
    Query(q): Query<CardsQuery>,
) -> Json<Vec<CardOut>> {
    let deck = st.engine.deck();
    let mut cards: Vec<&Card> = match q.tag.as_deref() {
        Some(tag) => filter_by_tag(&deck, tag),
        None => deck.iter().collect(),
    };
    if let Some(text) = q.q.as_deref() {
        cards = filter_by_text(cards, text);
    }
    Json(cards.into_iter().map(CardOut::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> Arc<AppState> {
        let deck = vec![
            Card::new("hola", "hello").with_hint("a greeting").with_tags(["spanish"]),
            Card::new("merci", "thanks").with_tags(["french"]),
        ];
        Arc::new(AppState {
            engine: Arc::new(Engine::new(deck)),
        })
    }

    fn update_in(front: &str, back: &str, difficulty: &str) -> Json<UpdateIn> {
        Json(UpdateIn {
            front: front.into(),
            back: back.into(),
            difficulty: difficulty.into(),
        })
    }

    #[tokio::test]
    async fn practice_lists_everything_on_day_zero() {
        let Json(p) = practice(State(state())).await;
        assert_eq!(p.day, 0);
        assert_eq!(p.cards.len(), 2);
        assert!(!p.retired);
    }

    #[tokio::test]
    async fn update_moves_card_and_day_advances() {
        let st = state();
        let Json(out) = update(State(st.clone()), update_in("hola", "hello", "easy"))
            .await
            .unwrap();
        assert_eq!(out.previous_bucket, 0);
        assert_eq!(out.next_bucket, Some(1));

        let Json(day) = next_day(State(st.clone())).await;
        assert_eq!(day.current_day, 1);
        let Json(p) = practice(State(st.clone())).await;
        assert_eq!(p.cards.len(), 1);
        assert_eq!(p.cards[0].front, "merci");

        let Json(stats) = progress(State(st)).await;
        assert_eq!(stats.reviews_per_bucket.get(&0), Some(&1));
        assert_eq!(stats.accuracy_rate, 1.0);
    }

    #[tokio::test]
    async fn bad_difficulty_is_400_and_unknown_card_is_404() {
        let st = state();
        let err = update(State(st.clone()), update_in("hola", "hello", "medium"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        let err = update(State(st.clone()), update_in("nope", "nada", "easy"))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert!(st.engine.history().is_empty());
    }

    #[tokio::test]
    async fn hint_falls_back_for_cards_without_one() {
        let st = state();
        let q = |f: &str, b: &str| {
            Query(CardQuery {
                front: f.into(),
                back: b.into(),
            })
        };
        let Json(h) = hint(State(st.clone()), q("hola", "hello")).await.unwrap();
        assert_eq!(h.hint, "a greeting");
        let Json(h) = hint(State(st), q("merci", "thanks")).await.unwrap();
        assert_eq!(h.hint, leitner_core::NO_HINT);
    }

    #[tokio::test]
    async fn cards_filter_by_tag() {
        let Json(cards) = list_cards(
            State(state()),
            Query(CardsQuery {
                tag: Some("French".into()),
                q: None,
            }),
        )
        .await;
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].front, "merci");
    }
}
