/// What to do with the `nr_samples % nr_workers` samples that do not divide evenly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PartitionPolicy {
    /// every worker simulates `nr_samples / nr_workers` paths, the remainder is dropped
    #[default]
    Truncate,
    /// the first `nr_samples % nr_workers` workers simulate one extra path each
    Distribute,
}

impl PartitionPolicy {
    /// The number of samples per worker; their sum is the number of samples actually simulated.
    pub fn partition(&self, nr_samples: usize, nr_workers: usize) -> Vec<usize> {
        if nr_workers == 0 {
            return vec![];
        }
        let share = nr_samples / nr_workers;
        match self {
            PartitionPolicy::Truncate => vec![share; nr_workers],
            PartitionPolicy::Distribute => {
                let remainder = nr_samples % nr_workers;
                (0..nr_workers)
                    .map(|worker| if worker < remainder { share + 1 } else { share })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_drops_remainder() {
        let shares = PartitionPolicy::Truncate.partition(10, 4);
        assert_eq!(shares, vec![2, 2, 2, 2]);
        assert_eq!(shares.iter().sum::<usize>(), 4 * (10 / 4));

        assert_eq!(PartitionPolicy::Truncate.partition(3, 4), vec![0, 0, 0, 0]);
        assert_eq!(PartitionPolicy::Truncate.partition(12, 4), vec![3, 3, 3, 3]);
    }

    #[test]
    fn distribute_keeps_all_samples() {
        let shares = PartitionPolicy::Distribute.partition(10, 4);
        assert_eq!(shares, vec![3, 3, 2, 2]);
        assert_eq!(shares.iter().sum::<usize>(), 10);

        assert_eq!(PartitionPolicy::Distribute.partition(3, 4), vec![1, 1, 1, 0]);
    }

    #[test]
    fn single_worker_gets_everything() {
        assert_eq!(PartitionPolicy::Truncate.partition(7, 1), vec![7]);
        assert_eq!(PartitionPolicy::Distribute.partition(7, 1), vec![7]);
    }

    #[test]
    fn no_workers() {
        assert!(PartitionPolicy::Truncate.partition(7, 0).is_empty());
    }
}
