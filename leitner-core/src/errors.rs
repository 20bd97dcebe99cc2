use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("not found: {0}")]
    NotFound(&'static str),
    #[error("unknown card: {front} / {back}")]
    UnknownCard { front: String, back: String },
    #[error("card is not in any bucket: {front} / {back}")]
    CardNotScheduled { front: String, back: String },
    #[error("bucket invariant violated: {0}")]
    InvariantViolation(String),
    #[error("invalid input: {0}")]
    Invalid(&'static str),
}

impl CoreError {
    /// Bookkeeping faults inside the engine, as opposed to bad caller input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            CoreError::CardNotScheduled { .. } | CoreError::InvariantViolation(_)
        )
    }
}
