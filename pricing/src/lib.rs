//! Monte Carlo pricing of European options under geometric Brownian motion.
//!
//! The [`simulation::MonteCarloEngine`] splits the samples over a fixed number of worker
//! threads, each with its own generator and payoff buffer, and merges the buffers into a
//! discounted price and the standard error of the mean payoff once all workers are joined.
//!
//! ```
//! use pricing::common::{DerivativeParameter, OptionType};
//! use pricing::simulation::{MonteCarloEngine, SimulationConfig};
//!
//! let dp = DerivativeParameter::new(100.0, 100.0, 1.0, 0.05, 0.2);
//! let engine = MonteCarloEngine::new(SimulationConfig::default().workers(2).seed(42));
//! let call = engine.simulate(&dp, OptionType::Call, 10_000).unwrap();
//! assert_eq!(call.nr_samples, 10_000);
//! ```

pub mod analytic;
pub mod common;
pub mod error;
pub mod simulation;

pub use error::{PricingError, Result};
pub use simulation::simulate;
