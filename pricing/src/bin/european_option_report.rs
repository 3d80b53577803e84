//! Prices a European call and put on the same underlying by Monte Carlo simulation
//! and reports both estimates with their standard errors and the elapsed time.
//!
//! Built with the `report` feature: `cargo run --release --features report`.
//! Set `RUST_LOG=pricing=debug` to follow the partitioning and the aggregation.

use std::time::Instant;

use pricing::analytic::{BlackScholesMerton, OptionPrice};
use pricing::common::{DerivativeParameter, OptionType};
use pricing::simulation::{MonteCarloEngine, SimulationConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const ASSET_PRICE: f64 = 239.36;
const STRIKE: f64 = 242.50;
const RISK_FREE_RATE: f64 = 0.0417;
const VOLATILITY: f64 = 0.3052;
/// in years
const TIME_TO_EXPIRATION: f64 = 0.063;
const NR_SAMPLES: usize = 10_000_000;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let start = Instant::now();

    let dp = DerivativeParameter::new(
        ASSET_PRICE,
        STRIKE,
        TIME_TO_EXPIRATION,
        RISK_FREE_RATE,
        VOLATILITY,
    );
    let engine = MonteCarloEngine::new(SimulationConfig::default());
    info!(
        nr_workers = engine.config().nr_workers(),
        nr_samples = NR_SAMPLES,
        "pricing European options"
    );

    let call = engine.simulate(&dp, OptionType::Call, NR_SAMPLES)?;
    let put = engine.simulate(&dp, OptionType::Put, NR_SAMPLES)?;

    let elapsed = start.elapsed();

    println!(
        "European Call Option Price: {:.6} +- error: {:.6} (Black-Scholes: {:.6})",
        call.price,
        call.standard_error,
        BlackScholesMerton::call(&dp)
    );
    println!(
        "European Put Option Price: {:.6} +- error: {:.6} (Black-Scholes: {:.6})",
        put.price,
        put.standard_error,
        BlackScholesMerton::put(&dp)
    );
    println!(
        "Samples: {} on {} workers",
        call.nr_samples, call.nr_workers
    );
    println!("Execution Time: {:.3} seconds", elapsed.as_secs_f64());

    Ok(())
}
