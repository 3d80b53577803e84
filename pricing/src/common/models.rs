use crate::error::{PricingError, Result};

/// Call or put, the two kinds of plain vanilla European options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn from_is_call(is_call: bool) -> Self {
        if is_call {
            OptionType::Call
        } else {
            OptionType::Put
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DerivativeParameter {
    /// the asset's price at time t
    pub asset_price: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiration: f64,
    /// the annualized risk-free interest rate
    pub rfr: f64,
    /// the annualized standard deviation of the stock's returns
    pub vola: f64,
}

impl DerivativeParameter {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
    ) -> Self {
        Self {
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
        }
    }

    /// Checks the preconditions of the pricers; NaN fails every check.
    pub fn validate(&self) -> Result<()> {
        if !(self.asset_price > 0.0 && self.asset_price.is_finite()) {
            return Err(PricingError::invalid("asset_price", self.asset_price, "> 0"));
        }
        if !(self.strike > 0.0 && self.strike.is_finite()) {
            return Err(PricingError::invalid("strike", self.strike, "> 0"));
        }
        if !(self.time_to_expiration > 0.0 && self.time_to_expiration.is_finite()) {
            return Err(PricingError::invalid(
                "time_to_expiration",
                self.time_to_expiration,
                "> 0",
            ));
        }
        if !self.rfr.is_finite() {
            return Err(PricingError::invalid("rfr", self.rfr, "finite"));
        }
        if !(self.vola >= 0.0 && self.vola.is_finite()) {
            return Err(PricingError::invalid("vola", self.vola, ">= 0"));
        }
        Ok(())
    }

    /// exp(-r * (T - t))
    pub fn discount_factor(&self) -> f64 {
        (-self.rfr * self.time_to_expiration).exp()
    }
}
