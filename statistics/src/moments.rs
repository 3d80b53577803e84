use crate::error::StatisticsError;

/// The first two (central) moments of a sample, together with its size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleMoments {
    pub count: usize,
    pub mean: f64,
    /// population variance, i.e. normalized by `count` and not `count - 1`
    pub variance: f64,
}

impl SampleMoments {
    /// The estimated standard deviation of the sample mean, $\sqrt{\sigma^2 / n}$.
    /// See https://en.wikipedia.org/wiki/Standard_error
    pub fn standard_error(&self) -> f64 {
        (self.variance / self.count as f64).sqrt()
    }

    /// Symmetric interval `mean +- z * standard_error`, e.g. `z = 1.96` for 95%.
    pub fn confidence_interval(&self, z: f64) -> (f64, f64) {
        let half_width = z * self.standard_error();
        (self.mean - half_width, self.mean + half_width)
    }
}

/// The arithmetic mean of the sample.
/// Use a chained iterator to average over several buffers without concatenating them.
pub fn mean<'a, I>(samples: I) -> Result<f64, StatisticsError>
where
    I: IntoIterator<Item = &'a f64>,
{
    let (count, total) = samples
        .into_iter()
        .fold((0_usize, 0.0), |(count, total), x| (count + 1, total + x));

    if count == 0 {
        return Err(StatisticsError::EmptySample);
    }
    Ok(total / count as f64)
}

/// Mean and population variance in two passes over the sample:
/// the first one for the mean, the second one for the squared deviations from it.
pub fn moments<'a, I>(samples: I) -> Result<SampleMoments, StatisticsError>
where
    I: IntoIterator<Item = &'a f64>,
    I::IntoIter: Clone,
{
    let samples = samples.into_iter();
    let count = samples.clone().count();
    let mean = mean(samples.clone())?;

    let sum_sq_deviations = samples.fold(0.0, |acc, x| acc + (x - mean).powi(2));

    Ok(SampleMoments {
        count,
        mean,
        variance: sum_sq_deviations / count as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn empty_sample() {
        let samples: Vec<f64> = vec![];
        assert_eq!(mean(&samples), Err(StatisticsError::EmptySample));
        assert_eq!(moments(&samples), Err(StatisticsError::EmptySample));
    }

    #[test]
    fn mean_and_variance() {
        let samples = vec![1.0, 2.0, 3.0, 4.0];
        let m = moments(&samples).unwrap();

        assert_eq!(m.count, 4);
        assert_eq!(m.mean, 2.5);
        // (2.25 + 0.25 + 0.25 + 2.25) / 4
        assert_eq!(m.variance, 1.25);
        assert_approx_eq!(m.standard_error(), (1.25_f64 / 4.0).sqrt(), 1e-15);
    }

    #[test]
    fn chained_buffers() {
        let partitions = vec![vec![1.0, 2.0], vec![], vec![3.0, 4.0]];
        let m = moments(partitions.iter().flatten()).unwrap();

        assert_eq!(m, moments(&[1.0, 2.0, 3.0, 4.0]).unwrap());
    }

    #[test]
    fn single_sample() {
        let m = moments(&[7.5]).unwrap();
        assert_eq!(m.mean, 7.5);
        assert_eq!(m.variance, 0.0);
        assert_eq!(m.standard_error(), 0.0);
    }

    #[test]
    fn constant_sample() {
        let samples = vec![0.3; 1000];
        let m = moments(&samples).unwrap();
        assert_approx_eq!(m.mean, 0.3, 1e-12);
        assert_approx_eq!(m.standard_error(), 0.0, 1e-12);
    }

    #[test]
    fn confidence_interval() {
        let m = SampleMoments {
            count: 100,
            mean: 10.0,
            variance: 4.0,
        };
        let (lower, upper) = m.confidence_interval(1.96);
        assert_approx_eq!(lower, 10.0 - 1.96 * 0.2, 1e-12);
        assert_approx_eq!(upper, 10.0 + 1.96 * 0.2, 1e-12);
    }
}
