//! European payoff functions.
//!
//! - Call: `max(S_T − K, 0)`
//! - Put: `max(K − S_T, 0)`

use super::error::ConfigError;
use super::paths::PathSet;

/// European option type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PayoffType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

/// Payoff parameters: strike and option type.
///
/// # Examples
///
/// ```rust
/// use pricer_montecarlo::mc::PayoffParams;
///
/// let call = PayoffParams::call(105.0);
/// assert_eq!(call.evaluate(110.0), 5.0);
/// assert_eq!(call.evaluate(100.0), 0.0);
///
/// let put = PayoffParams::put(105.0);
/// assert_eq!(put.evaluate(100.0), 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffParams {
    /// Strike price (K).
    pub strike: f64,
    /// Call or put.
    pub payoff_type: PayoffType,
}

impl PayoffParams {
    /// European call with strike `strike`.
    #[inline]
    pub fn call(strike: f64) -> Self {
        Self {
            strike,
            payoff_type: PayoffType::Call,
        }
    }

    /// European put with strike `strike`.
    #[inline]
    pub fn put(strike: f64) -> Self {
        Self {
            strike,
            payoff_type: PayoffType::Put,
        }
    }

    /// Checks that the strike is non-negative and finite.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` naming `strike` otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.strike >= 0.0 && self.strike.is_finite()) {
            return Err(ConfigError::parameter(
                "strike",
                self.strike,
                "must be non-negative and finite",
            ));
        }
        Ok(())
    }

    /// Payoff at expiry given the terminal price. Never negative.
    #[inline]
    pub fn evaluate(&self, terminal: f64) -> f64 {
        match self.payoff_type {
            PayoffType::Call => (terminal - self.strike).max(0.0),
            PayoffType::Put => (self.strike - terminal).max(0.0),
        }
    }
}

/// Evaluates the payoff of every path's terminal price into `out`.
pub fn compute_payoffs(paths: &PathSet, payoff: PayoffParams, out: &mut [f64]) {
    debug_assert_eq!(out.len(), paths.len());

    for (idx, value) in out.iter_mut().enumerate() {
        *value = payoff.evaluate(paths.terminal(idx));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_payoff() {
        let call = PayoffParams::call(100.0);
        assert_eq!(call.evaluate(120.0), 20.0);
        assert_eq!(call.evaluate(100.0), 0.0);
        assert_eq!(call.evaluate(80.0), 0.0);
    }

    #[test]
    fn test_put_payoff() {
        let put = PayoffParams::put(100.0);
        assert_eq!(put.evaluate(80.0), 20.0);
        assert_eq!(put.evaluate(100.0), 0.0);
        assert_eq!(put.evaluate(120.0), 0.0);
    }

    #[test]
    fn test_call_minus_put_is_forward_payoff() {
        let call = PayoffParams::call(105.0);
        let put = PayoffParams::put(105.0);

        for s in [50.0, 104.9, 105.0, 105.1, 200.0] {
            assert!((call.evaluate(s) - put.evaluate(s) - (s - 105.0)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_compute_payoffs() {
        let paths = PathSet::from_values(vec![100.0, 90.0, 100.0, 110.0], 2, 1).unwrap();
        let mut out = vec![0.0; 2];

        compute_payoffs(&paths, PayoffParams::call(100.0), &mut out);
        assert_eq!(out, vec![0.0, 10.0]);

        compute_payoffs(&paths, PayoffParams::put(100.0), &mut out);
        assert_eq!(out, vec![10.0, 0.0]);
    }

    #[test]
    fn test_validate_strike() {
        assert!(PayoffParams::call(0.0).validate().is_ok());
        assert!(PayoffParams::put(105.0).validate().is_ok());

        for strike in [-0.01, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                PayoffParams::call(strike).validate(),
                Err(ConfigError::InvalidParameter { name: "strike", .. })
            ));
        }
    }
}
