use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanningError {
    #[error("discount must be in [0, 1), got {0}")]
    InvalidDiscount(f64),
    #[error("theta must be a non-negative number, got {0}")]
    InvalidTheta(f64),
    /// A non-terminal state without legal actions has no Bellman backup.
    #[error("non-terminal state {state} has no legal actions")]
    NoLegalActions { state: String },
}
