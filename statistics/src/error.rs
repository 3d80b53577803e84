use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatisticsError {
    #[error("division by 0: the sample is empty")]
    EmptySample,
}
