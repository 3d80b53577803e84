use super::partition::PartitionPolicy;
use super::random::Seeding;

/// Settings of the [`MonteCarloEngine`](super::MonteCarloEngine).
///
/// The defaults use one worker per logical cpu, entropy seeded generators and
/// truncate the sample count to a multiple of the number of workers.
///
/// ```
/// use pricing::simulation::{PartitionPolicy, SimulationConfig};
///
/// let config = SimulationConfig::default()
///     .workers(4)
///     .seed(42)
///     .partition(PartitionPolicy::Distribute);
/// assert_eq!(config.nr_workers(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimulationConfig {
    nr_workers: Option<usize>,
    seeding: Seeding,
    partition: PartitionPolicy,
}

impl SimulationConfig {
    /// Overrides the number of worker threads.
    pub fn workers(mut self, nr_workers: usize) -> Self {
        self.nr_workers = Some(nr_workers);
        self
    }

    /// Derives the worker seeds from `seed_nr` instead of the operating system's entropy.
    pub fn seed(mut self, seed_nr: u64) -> Self {
        self.seeding = Seeding::Master(seed_nr);
        self
    }

    pub fn partition(mut self, partition: PartitionPolicy) -> Self {
        self.partition = partition;
        self
    }

    /// The configured number of workers, or the number of logical cpus (at least 1).
    pub fn nr_workers(&self) -> usize {
        self.nr_workers.unwrap_or_else(|| num_cpus::get().max(1))
    }

    pub fn seeding(&self) -> Seeding {
        self.seeding
    }

    pub fn partition_policy(&self) -> PartitionPolicy {
        self.partition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SimulationConfig::default();
        assert!(config.nr_workers() >= 1);
        assert_eq!(config.seeding(), Seeding::Entropy);
        assert_eq!(config.partition_policy(), PartitionPolicy::Truncate);
    }

    #[test]
    fn overrides() {
        let config = SimulationConfig::default()
            .workers(3)
            .seed(7)
            .partition(PartitionPolicy::Distribute);
        assert_eq!(config.nr_workers(), 3);
        assert_eq!(config.seeding(), Seeding::Master(7));
        assert_eq!(config.partition_policy(), PartitionPolicy::Distribute);
    }
}
