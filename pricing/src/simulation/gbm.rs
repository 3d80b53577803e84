use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Model params for the SDE
/// '''math
/// dS_t / S_t = mu dt + sigma dW_t
/// ''', where $dW_t ~ N(0, sqrt(dt))$
/// https://en.wikipedia.org/wiki/Geometric_Brownian_motion
///
/// Only the value at the end of the horizon `dt` is sampled, using the exact solution
/// S_dt = S_0 * exp((mu - sigma^2 / 2) * dt + sigma * sqrt(dt) * Z), Z ~ N(0, 1).
#[derive(Clone, Debug)]
pub struct GeometricBrownianMotion {
    initial_value: f64,
    /// (mu - sigma^2 / 2) * dt
    drift_term: f64,
    /// sigma * sqrt(dt)
    diffusion_scale: f64,
}

impl GeometricBrownianMotion {
    pub fn new(initial_value: f64, drift: f64, vola: f64, dt: f64) -> Self {
        Self {
            initial_value,
            drift_term: (drift - vola.powi(2) / 2.0) * dt,
            diffusion_scale: vola * dt.sqrt(),
        }
    }

    /// The value at the end of the horizon for the standard normal draw `z`.
    #[inline]
    pub fn terminal_value(&self, z: f64) -> f64 {
        self.initial_value * (self.drift_term + self.diffusion_scale * z).exp()
    }
}

impl Distribution<f64> for GeometricBrownianMotion {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.terminal_value(rng.sample(StandardNormal))
    }
}
