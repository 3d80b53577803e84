use crate::common::models::{DerivativeParameter, OptionType};
use crate::error::Result;
use crate::simulation::config::SimulationConfig;
use crate::simulation::monte_carlo::{McEstimate, MonteCarloEngine};

pub struct MonteCarloEuropeanOption {
    option_params: DerivativeParameter,
    engine: MonteCarloEngine,
    nr_samples: usize,
}

impl MonteCarloEuropeanOption {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
        nr_samples: usize,
        config: SimulationConfig,
    ) -> Self {
        let option_params =
            DerivativeParameter::new(asset_price, strike, time_to_expiration, rfr, vola);
        Self {
            option_params,
            engine: MonteCarloEngine::new(config),
            nr_samples,
        }
    }

    pub fn params(&self) -> &DerivativeParameter {
        &self.option_params
    }

    pub fn price(&self, option_type: OptionType) -> Result<McEstimate> {
        self.engine
            .simulate(&self.option_params, option_type, self.nr_samples)
    }

    /// The price (theoretical value) of the standard European call option.
    pub fn call(&self) -> Result<McEstimate> {
        self.price(OptionType::Call)
    }

    /// The price (theoretical value) of the standard European put option.
    pub fn put(&self) -> Result<McEstimate> {
        self.price(OptionType::Put)
    }
}

/// Monte Carlo price and standard error of a European option with the default engine settings:
/// one worker per logical cpu, entropy seeded, sample count truncated to a multiple of the workers.
pub fn simulate(
    initial_price: f64,
    strike: f64,
    risk_free_rate: f64,
    volatility: f64,
    time_to_maturity: f64,
    sample_count: usize,
    is_call: bool,
) -> Result<(f64, f64)> {
    let mc_option = MonteCarloEuropeanOption::new(
        initial_price,
        strike,
        time_to_maturity,
        risk_free_rate,
        volatility,
        sample_count,
        SimulationConfig::default(),
    );
    mc_option
        .price(OptionType::from_is_call(is_call))
        .map(|estimate| estimate.as_pair())
}
