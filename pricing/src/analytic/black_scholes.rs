use crate::common::models::{DerivativeParameter, OptionType};
use probability::distribution::{Distribution, Gaussian};

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> f64;
    fn call(params: &Self::Params) -> f64;

    fn price(params: &Self::Params, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => Self::call(params),
            OptionType::Put => Self::put(params),
        }
    }
}

/// European Put and Call option prices for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
///
/// Serves as the reference for the Monte Carlo estimates, which sample the same lognormal
/// terminal distribution.
pub struct BlackScholesMerton;

impl BlackScholesMerton {
    /// (d1, d2), or `None` without volatility where the price is the discounted forward intrinsic value
    fn d1_d2(dp: &DerivativeParameter) -> Option<(f64, f64)> {
        let sigma_exp = dp.vola * dp.time_to_expiration.sqrt();
        if sigma_exp == 0.0 {
            return None;
        }
        let d1 = ((dp.asset_price / dp.strike).ln()
            + (dp.rfr + dp.vola.powi(2) / 2.0) * dp.time_to_expiration)
            / sigma_exp;
        Some((d1, d1 - sigma_exp))
    }
}

impl OptionPrice for BlackScholesMerton {
    type Params = DerivativeParameter;

    fn call(dp: &DerivativeParameter) -> f64 {
        match Self::d1_d2(dp) {
            Some((d1, d2)) => {
                cdf(d1) * dp.asset_price - cdf(d2) * dp.strike * dp.discount_factor()
            }
            None => (dp.asset_price - dp.strike * dp.discount_factor()).max(0.0),
        }
    }

    fn put(dp: &DerivativeParameter) -> f64 {
        match Self::d1_d2(dp) {
            Some((d1, d2)) => {
                cdf(-d2) * dp.strike * dp.discount_factor() - cdf(-d1) * dp.asset_price
            }
            None => (dp.strike * dp.discount_factor() - dp.asset_price).max(0.0),
        }
    }
}
