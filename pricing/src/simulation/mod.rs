mod config;
mod european_option;
mod gbm;
mod monte_carlo;
mod partition;
mod payoff;
mod random;

pub use config::SimulationConfig;
pub use european_option::{simulate, MonteCarloEuropeanOption};
pub use gbm::GeometricBrownianMotion;
pub use monte_carlo::{McEstimate, MonteCarloEngine, Payoffs};
pub use partition::PartitionPolicy;
pub use payoff::{call_payoff, put_payoff};
pub use random::{worker_seeds, Seeding};
