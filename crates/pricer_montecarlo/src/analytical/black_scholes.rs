//! Black-Scholes prices for European options.
//!
//! **Call**: C = S·N(d₁) − K·e^(−rT)·N(d₂)
//! **Put**: P = K·e^(−rT)·N(−d₂) − S·N(−d₁)
//!
//! with d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T) and d₂ = d₁ − σ√T.

use num_traits::Float;

use super::distributions::{constant, norm_cdf};
use crate::mc::{ConfigError, GbmParams};

/// Black-Scholes model for European option pricing.
///
/// # Examples
/// ```
/// use pricer_montecarlo::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call = bs.price_call(105.0, 1.0);
/// let put = bs.price_put(105.0, 1.0);
///
/// assert!((call - 8.0214).abs() < 1e-3);
/// assert!((put - 7.9004).abs() < 1e-3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlackScholes<T: Float> {
    spot: T,
    rate: T,
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` if spot is not positive or
    /// volatility is negative.
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, ConfigError> {
        let zero = T::zero();

        if !(spot > zero) {
            return Err(ConfigError::parameter(
                "spot",
                spot.to_f64().unwrap_or(f64::NAN),
                "must be positive",
            ));
        }
        if !(volatility >= zero) {
            return Err(ConfigError::parameter(
                "volatility",
                volatility.to_f64().unwrap_or(f64::NAN),
                "must be non-negative",
            ));
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        let half = constant::<T>(0.5);
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// d₂ = d₁ − σ√T
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// European call price.
    ///
    /// Zero expiry returns the intrinsic value; zero volatility returns the
    /// discounted deterministic payoff.
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();

        if expiry <= zero {
            return (self.spot - strike).max(zero);
        }

        let discounted_strike = strike * (-self.rate * expiry).exp();

        if self.volatility == zero {
            return (self.spot - discounted_strike).max(zero);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        self.spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2)
    }

    /// European put price.
    ///
    /// Same limiting cases as [`price_call`](Self::price_call).
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();

        if expiry <= zero {
            return (strike - self.spot).max(zero);
        }

        let discounted_strike = strike * (-self.rate * expiry).exp();

        if self.volatility == zero {
            return (discounted_strike - self.spot).max(zero);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        discounted_strike * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }
}

impl BlackScholes<f64> {
    /// Builds the model from GBM parameters.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parameters are invalid.
    pub fn from_gbm(gbm: &GbmParams) -> Result<Self, ConfigError> {
        gbm.validate()?;
        Self::new(gbm.spot, gbm.rate, gbm.volatility)
    }
}

/// Black-Scholes call price for GBM parameters.
///
/// # Errors
///
/// Returns `ConfigError` if the parameters are invalid.
pub fn bs_call(gbm: &GbmParams, strike: f64) -> Result<f64, ConfigError> {
    Ok(BlackScholes::from_gbm(gbm)?.price_call(strike, gbm.maturity))
}

/// Black-Scholes put price for GBM parameters.
///
/// # Errors
///
/// Returns `ConfigError` if the parameters are invalid.
pub fn bs_put(gbm: &GbmParams, strike: f64) -> Result<f64, ConfigError> {
    Ok(BlackScholes::from_gbm(gbm)?.price_put(strike, gbm.maturity))
}
