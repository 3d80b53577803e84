use statistics::StatisticsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PricingError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("invalid parameter '{name}' = {value}: must be {constraint}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },

    #[error("insufficient samples: {requested} requested for {workers} workers leaves no sample to simulate")]
    InsufficientSamples { requested: usize, workers: usize },

    #[error("worker {worker} failed: {reason}")]
    WorkerFailure { worker: usize, reason: String },

    #[error("numerical overflow: {quantity} = {value}")]
    NumericalOverflow { quantity: &'static str, value: f64 },

    #[error(transparent)]
    Statistics(#[from] StatisticsError),
}

impl PricingError {
    pub(crate) fn invalid(name: &'static str, value: f64, constraint: &'static str) -> Self {
        PricingError::InvalidParameter {
            name,
            value,
            constraint,
        }
    }
}
