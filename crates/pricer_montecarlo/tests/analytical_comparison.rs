//! Monte Carlo estimates against closed-form Black-Scholes prices.
//!
//! # Test Categories
//!
//! 1. **Reference scenario**: S0=100, K=105, T=1, r=5%, σ=20%, 100k paths
//! 2. **Moneyness sweep**: ITM/ATM/OTM calls and puts within standard errors
//! 3. **Put-call parity**: C − P against S0 − K·e^(−rT)
//! 4. **Convergence**: standard error shrinks like 1/√N

use approx::assert_relative_eq;
use pricer_montecarlo::analytical::{bs_call, bs_put};
use pricer_montecarlo::mc::{
    simulate_and_price, GbmParams, MonteCarloConfig, MonteCarloPricer, PayoffParams,
    SimulationParams,
};

fn config(n_paths: usize, n_steps: usize, seed: u64) -> MonteCarloConfig {
    MonteCarloConfig::builder()
        .n_paths(n_paths)
        .n_steps(n_steps)
        .seed(seed)
        .build()
        .unwrap()
}

fn reference_params() -> SimulationParams {
    SimulationParams::new(GbmParams::new(100.0, 0.05, 0.2, 1.0), 105.0)
}

// ============================================================================
// Reference scenario
// ============================================================================

#[test]
fn test_reference_scenario_call_and_put() {
    let params = reference_params();
    let simulation = simulate_and_price(&params, &config(100_000, 100, 42)).unwrap();

    let call = simulation.call();
    let put = simulation.put();

    // Black-Scholes: call ≈ 8.02, put ≈ 7.90
    assert_relative_eq!(call.price, 8.02, max_relative = 0.04);
    assert_relative_eq!(put.price, 7.90, max_relative = 0.04);

    let bs_call_price = bs_call(&params.gbm, params.strike).unwrap();
    let bs_put_price = bs_put(&params.gbm, params.strike).unwrap();

    assert!(
        (call.price - bs_call_price).abs() < 4.0 * call.std_error,
        "Call: MC={:.4}, BS={:.4}, SE={:.4}",
        call.price,
        bs_call_price,
        call.std_error
    );
    assert!(
        (put.price - bs_put_price).abs() < 4.0 * put.std_error,
        "Put: MC={:.4}, BS={:.4}, SE={:.4}",
        put.price,
        bs_put_price,
        put.std_error
    );
}

#[test]
fn test_reference_scenario_reproducible() {
    let params = reference_params();
    let a = simulate_and_price(&params, &config(10_000, 100, 2024)).unwrap();
    let b = simulate_and_price(&params, &config(10_000, 100, 2024)).unwrap();

    assert_eq!(a.call(), b.call());
    assert_eq!(a.put(), b.put());
    assert_eq!(a.paths(), b.paths());
}

// ============================================================================
// Moneyness sweep
// ============================================================================

#[test]
fn test_calls_and_puts_across_strikes() {
    let gbm = GbmParams::new(100.0, 0.03, 0.25, 0.5);

    for (seed, strike) in [(1_u64, 80.0), (2, 100.0), (3, 120.0)] {
        // The GBM step is exact, so one step suffices for European payoffs.
        let mut pricer = MonteCarloPricer::new(config(200_000, 1, seed)).unwrap();

        let call = pricer.price_european(gbm, PayoffParams::call(strike)).unwrap();
        let put = pricer.price_european(gbm, PayoffParams::put(strike)).unwrap();

        let expected_call = bs_call(&gbm, strike).unwrap();
        let expected_put = bs_put(&gbm, strike).unwrap();

        assert!(
            (call.price - expected_call).abs() < (4.0 * call.std_error).max(0.02),
            "K={}: call MC={:.4}, BS={:.4}, SE={:.4}",
            strike,
            call.price,
            expected_call,
            call.std_error
        );
        assert!(
            (put.price - expected_put).abs() < (4.0 * put.std_error).max(0.02),
            "K={}: put MC={:.4}, BS={:.4}, SE={:.4}",
            strike,
            put.price,
            expected_put,
            put.std_error
        );
    }
}

#[test]
fn test_step_count_does_not_bias_european_price() {
    let params = reference_params();
    let coarse = simulate_and_price(&params, &config(50_000, 1, 11)).unwrap();
    let fine = simulate_and_price(&params, &config(50_000, 250, 12)).unwrap();

    let tolerance = 4.0 * (coarse.call().std_error.powi(2) + fine.call().std_error.powi(2)).sqrt();
    assert!(
        (coarse.call().price - fine.call().price).abs() < tolerance,
        "coarse={:.4}, fine={:.4}, tolerance={:.4}",
        coarse.call().price,
        fine.call().price,
        tolerance
    );
}

// ============================================================================
// Put-call parity
// ============================================================================

#[test]
fn test_put_call_parity_within_sampling_error() {
    let params = reference_params();
    let simulation = simulate_and_price(&params, &config(100_000, 50, 7)).unwrap();

    // Gap is e^{−rT}·mean(S_T) − S0; sd(S_T) ≈ 21 so SE ≈ 0.066 at 100k paths.
    assert!(
        simulation.parity_gap().abs() < 0.3,
        "parity gap = {:.4}",
        simulation.parity_gap()
    );
}

// ============================================================================
// Convergence
// ============================================================================

#[test]
fn test_standard_error_shrinks_with_paths() {
    let params = reference_params();
    let small = simulate_and_price(&params, &config(2_500, 1, 5)).unwrap();
    let large = simulate_and_price(&params, &config(40_000, 1, 5)).unwrap();

    // 16x paths => roughly 4x smaller standard error
    let ratio = small.call().std_error / large.call().std_error;
    assert!((3.0..5.0).contains(&ratio), "ratio = {:.3}", ratio);
}
