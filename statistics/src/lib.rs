mod error;
mod moments;

pub use error::StatisticsError;
pub use moments::{mean, moments, SampleMoments};
