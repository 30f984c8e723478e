use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SummonError {
    /// Rejected at function entry, never corrected silently.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The probabilities do not add up to one. Only a computation defect can cause this.
    #[error("internal consistency failure: probabilities sum to {sum}, expected 1")]
    Inconsistent { sum: f64 },
}

pub type Result<T> = std::result::Result<T, SummonError>;
