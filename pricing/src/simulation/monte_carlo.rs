use std::thread;

use rand::Rng;
use rand_hc::Hc128Rng;
use tracing::{debug, trace, warn};

use crate::common::models::{DerivativeParameter, OptionType};
use crate::error::{PricingError, Result};
use crate::simulation::config::SimulationConfig;
use crate::simulation::gbm::GeometricBrownianMotion;

/// The payoffs sampled by a single worker, in the order they were drawn.
pub type Payoffs = Vec<f64>;

/// A Monte Carlo price together with its statistical uncertainty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct McEstimate {
    /// discounted mean payoff
    pub price: f64,
    /// standard error of the (undiscounted) mean payoff
    pub standard_error: f64,
    /// number of samples actually simulated, which can be less than requested
    pub nr_samples: usize,
    pub nr_workers: usize,
}

impl McEstimate {
    /// Reduces the payoffs of all workers into one estimate, as if they were a single sample.
    pub fn from_payoffs(partial_payoffs: &[Payoffs], discount_factor: f64) -> Result<Self> {
        let moments = statistics::moments(partial_payoffs.iter().flatten())?;

        let estimate = Self {
            price: discount_factor * moments.mean,
            standard_error: moments.standard_error(),
            nr_samples: moments.count,
            nr_workers: partial_payoffs.len(),
        };
        // the sums can overflow even if every single payoff is finite
        for (quantity, value) in [
            ("mean payoff", moments.mean),
            ("payoff variance", moments.variance),
            ("price", estimate.price),
            ("standard error", estimate.standard_error),
        ] {
            if !value.is_finite() {
                return Err(PricingError::NumericalOverflow { quantity, value });
            }
        }
        Ok(estimate)
    }

    pub fn as_pair(&self) -> (f64, f64) {
        (self.price, self.standard_error)
    }
}

/// Prices European options by sampling the terminal asset price on a fixed set of worker threads.
///
/// Every call of [`simulate`](Self::simulate) spawns the workers anew, each one with its own
/// random number generator and payoff buffer, and joins all of them before the buffers are merged.
#[derive(Clone, Debug, Default)]
pub struct MonteCarloEngine {
    config: SimulationConfig,
}

impl MonteCarloEngine {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn simulate(
        &self,
        params: &DerivativeParameter,
        option_type: OptionType,
        nr_samples: usize,
    ) -> Result<McEstimate> {
        let partial_payoffs = self.simulate_payoffs(params, option_type, nr_samples)?;
        let estimate = McEstimate::from_payoffs(&partial_payoffs, params.discount_factor())?;

        debug!(
            ?option_type,
            price = estimate.price,
            standard_error = estimate.standard_error,
            nr_samples = estimate.nr_samples,
            "aggregated worker payoffs"
        );
        Ok(estimate)
    }

    /// The undiscounted payoffs, one buffer per worker.
    pub fn simulate_payoffs(
        &self,
        params: &DerivativeParameter,
        option_type: OptionType,
        nr_samples: usize,
    ) -> Result<Vec<Payoffs>> {
        params.validate()?;
        if nr_samples == 0 {
            return Err(PricingError::invalid("nr_samples", 0.0, "> 0"));
        }
        let nr_workers = self.config.nr_workers();
        if nr_workers == 0 {
            return Err(PricingError::invalid("nr_workers", 0.0, "> 0"));
        }

        let shares = self
            .config
            .partition_policy()
            .partition(nr_samples, nr_workers);
        let nr_used: usize = shares.iter().sum();
        if nr_used == 0 {
            return Err(PricingError::InsufficientSamples {
                requested: nr_samples,
                workers: nr_workers,
            });
        }
        if nr_used < nr_samples {
            warn!(
                requested = nr_samples,
                simulated = nr_used,
                nr_workers,
                "sample count truncated to a multiple of the number of workers"
            );
        }
        debug!(nr_workers, ?shares, ?option_type, "spawning workers");

        // under the risk neutral measure we have mu = r
        let stock_gbm = GeometricBrownianMotion::new(
            params.asset_price,
            params.rfr,
            params.vola,
            params.time_to_expiration,
        );
        let generators = self.config.seeding().generators(nr_workers);
        let strike = params.strike;

        thread::scope(|scope| {
            let handles: Vec<_> = shares
                .iter()
                .zip(generators)
                .enumerate()
                .map(|(worker, (&share, rng))| {
                    let stock_gbm = &stock_gbm;
                    thread::Builder::new()
                        .name(format!("mc-worker-{}", worker))
                        .spawn_scoped(scope, move || {
                            simulate_worker(worker, stock_gbm, strike, option_type, share, rng)
                        })
                        .map_err(|err| PricingError::WorkerFailure {
                            worker,
                            reason: err.to_string(),
                        })
                })
                .collect();

            // join every worker before looking at the results
            let results: Vec<Result<Payoffs>> = handles
                .into_iter()
                .enumerate()
                .map(|(worker, handle)| -> Result<Payoffs> {
                    handle?.join().map_err(|_| PricingError::WorkerFailure {
                        worker,
                        reason: "worker thread panicked".to_string(),
                    })?
                })
                .collect();

            results.into_iter().collect()
        })
    }
}

fn simulate_worker(
    worker: usize,
    stock_gbm: &GeometricBrownianMotion,
    strike: f64,
    option_type: OptionType,
    nr_samples: usize,
    mut rng: Hc128Rng,
) -> Result<Payoffs> {
    let mut payoffs = vec![0.0; nr_samples];

    for (idx, payoff) in payoffs.iter_mut().enumerate() {
        let terminal_price: f64 = rng.sample(stock_gbm);
        if !terminal_price.is_finite() {
            return Err(PricingError::WorkerFailure {
                worker,
                reason: format!("non-finite terminal price {} at sample {}", terminal_price, idx),
            });
        }
        *payoff = option_type.payoff(terminal_price, strike);
    }

    trace!(worker, nr_samples, "worker finished");
    Ok(payoffs)
}
