use crate::common::models::OptionType;

/// max(S_T - K, 0)
#[inline]
pub fn call_payoff(terminal_price: f64, strike: f64) -> f64 {
    (terminal_price - strike).max(0.0)
}

/// max(K - S_T, 0)
#[inline]
pub fn put_payoff(terminal_price: f64, strike: f64) -> f64 {
    (strike - terminal_price).max(0.0)
}

impl OptionType {
    /// The intrinsic value at expiration for the terminal price `terminal_price`.
    #[inline]
    pub fn payoff(&self, terminal_price: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => call_payoff(terminal_price, strike),
            OptionType::Put => put_payoff(terminal_price, strike),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use proptest::prelude::*;

    #[test]
    fn call_and_put() {
        assert_eq!(call_payoff(110.0, 100.0), 10.0);
        assert_eq!(call_payoff(90.0, 100.0), 0.0);
        assert_eq!(put_payoff(90.0, 100.0), 10.0);
        assert_eq!(put_payoff(110.0, 100.0), 0.0);
        assert_eq!(call_payoff(100.0, 100.0), 0.0);
        assert_eq!(put_payoff(100.0, 100.0), 0.0);
    }

    #[test]
    fn dispatch_on_option_type() {
        assert_eq!(OptionType::Call.payoff(120.0, 100.0), 20.0);
        assert_eq!(OptionType::Put.payoff(80.0, 100.0), 20.0);
    }

    proptest! {
        #[test]
        fn payoffs_are_non_negative(s in 0.0..1e6_f64, k in 0.0..1e6_f64) {
            prop_assert!(call_payoff(s, k) >= 0.0);
            prop_assert!(put_payoff(s, k) >= 0.0);
        }

        #[test]
        fn call_increases_and_put_decreases(s in 0.0..1e6_f64, ds in 0.0..1e3_f64, k in 0.0..1e6_f64) {
            prop_assert!(call_payoff(s + ds, k) >= call_payoff(s, k));
            prop_assert!(put_payoff(s + ds, k) <= put_payoff(s, k));
        }

        #[test]
        fn put_call_payoff_symmetry(s in 0.0..1e6_f64, k in 0.0..1e6_f64) {
            assert_approx_eq!(call_payoff(s, k) - put_payoff(s, k), s - k, 1e-9);
        }
    }
}
