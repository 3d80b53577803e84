use rand::{Rng, SeedableRng};
use rand_hc::Hc128Rng;

/// How the random number generators of the workers are initialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Seeding {
    /// each worker draws its seed from the operating system
    #[default]
    Entropy,
    /// the worker seeds are derived from a master seed, for reproducible runs
    Master(u64),
}

impl Seeding {
    /// One independent generator per worker.
    pub fn generators(&self, nr_workers: usize) -> Vec<Hc128Rng> {
        match *self {
            Seeding::Entropy => (0..nr_workers).map(|_| Hc128Rng::from_entropy()).collect(),
            Seeding::Master(seed_nr) => worker_seeds(seed_nr, nr_workers)
                .into_iter()
                .map(Hc128Rng::seed_from_u64)
                .collect(),
        }
    }
}

/// Derives `nr_workers` seeds from the master seed by drawing them from a generator seeded with it.
pub fn worker_seeds(seed_nr: u64, nr_workers: usize) -> Vec<u64> {
    let mut master = Hc128Rng::seed_from_u64(seed_nr);
    (0..nr_workers).map(|_| master.gen()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_distr::StandardNormal;

    #[test]
    fn worker_seeds_are_reproducible() {
        assert_eq!(worker_seeds(42, 8), worker_seeds(42, 8));
        assert_ne!(worker_seeds(42, 8), worker_seeds(43, 8));

        // more workers only append seeds
        assert_eq!(worker_seeds(42, 8)[..4], worker_seeds(42, 4)[..]);
    }

    #[test]
    fn worker_streams_differ() {
        let mut generators = Seeding::Master(1).generators(4);
        let first_draws: Vec<f64> = generators
            .iter_mut()
            .map(|rng| rng.sample(StandardNormal))
            .collect();

        for i in 0..first_draws.len() {
            for j in (i + 1)..first_draws.len() {
                assert_ne!(first_draws[i], first_draws[j]);
            }
        }
    }

    #[test]
    fn master_seed_reproduces_streams() {
        let mut a = Seeding::Master(99).generators(2);
        let mut b = Seeding::Master(99).generators(2);
        for (x, y) in a.iter_mut().zip(b.iter_mut()) {
            let xs: Vec<f64> = x.sample_iter(StandardNormal).take(10).collect();
            let ys: Vec<f64> = y.sample_iter(StandardNormal).take(10).collect();
            assert_eq!(xs, ys);
        }
    }

    #[test]
    fn entropy_generators() {
        assert_eq!(Seeding::default(), Seeding::Entropy);
        assert_eq!(Seeding::Entropy.generators(3).len(), 3);
    }
}
