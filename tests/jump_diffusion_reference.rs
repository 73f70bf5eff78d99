//! Reference checks for the jump-diffusion simulator: hand-computed pure-GBM
//! paths, volatility provenance, seeded reproducibility, and the error
//! surface.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use jumpdiff::core::SimulationError;
use jumpdiff::market::{HistoricalSeries, PricePoint, PriceSource, StaticSource};
use jumpdiff::mc::{simulate, JumpDiffusionPathGenerator, SimulationParams};
use jumpdiff::models::JumpDiffusion;
use jumpdiff::report::merge_with_history;

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
}

fn reference_series() -> HistoricalSeries {
    HistoricalSeries::from_closes(start_date(), &[100.0, 102.0, 101.0, 105.0]).unwrap()
}

fn sample_std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let ss = values.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>();
    (ss / (n - 1.0)).sqrt()
}

#[test]
fn zero_noise_path_matches_hand_computed_gbm_recursion() {
    // With every draw forced to zero the recursion collapses to
    // S_i = S_{i-1} * exp((mu - sigma^2/2) * dt), seeded at the last close.
    let series = reference_series();
    let returns = series.log_returns();
    let mu = returns.iter().sum::<f64>() / returns.len() as f64;

    // Consecutive-price log returns telescope to ln(105/100) over 3 steps.
    assert_relative_eq!(mu, (1.05_f64).ln() / 3.0, epsilon = 1.0e-14);

    let sigma = 0.05;
    let steps = 3;
    let dt = 1.0 / steps as f64;

    let generator = JumpDiffusionPathGenerator {
        model: JumpDiffusion {
            mu,
            sigma,
            jump_intensity: 0.0,
            jump_mean: 0.0,
            jump_vol: 0.0,
        },
        s0: series.last_close(),
        horizon: 1.0,
        steps,
    };

    let zeros = vec![0.0; steps];
    let path = generator.generate_from_draws(&zeros, &zeros, &zeros);

    assert_eq!(path.len(), steps + 1);
    assert_eq!(path[0], 105.0);

    let growth = ((mu - 0.5 * sigma * sigma) * dt).exp();
    let mut expected = 105.0;
    for value in path.iter().skip(1) {
        expected *= growth;
        assert_relative_eq!(*value, expected, epsilon = 1.0e-12);
    }

    // Over the full horizon the drift telescopes as well.
    assert_relative_eq!(
        path[steps],
        105.0 * (mu - 0.5 * sigma * sigma).exp(),
        epsilon = 1.0e-12
    );
}

#[test]
fn supplied_sigma_is_reported_verbatim() {
    let series = reference_series();
    let params = SimulationParams {
        sigma: Some(0.05),
        steps: 3,
        ..SimulationParams::default()
    };

    let mut rng = StdRng::seed_from_u64(11);
    let path = simulate(&series, &params, &mut rng).unwrap();

    assert_eq!(path.sigma_used, 0.05);
    assert!(!path.sigma_was_estimated);
    assert_eq!(path.prices.len(), 4);
    assert_eq!(path.prices[0], 105.0);
}

#[test]
fn omitted_sigma_is_estimated_from_log_returns() {
    let series = reference_series();
    let params = SimulationParams {
        steps: 3,
        ..SimulationParams::default()
    };

    let mut rng = StdRng::seed_from_u64(11);
    let path = simulate(&series, &params, &mut rng).unwrap();

    assert!(path.sigma_was_estimated);
    assert_relative_eq!(
        path.sigma_used,
        sample_std_dev(&series.log_returns()),
        epsilon = 1.0e-14
    );
}

#[test]
fn identical_seeds_yield_identical_paths() {
    let series = reference_series();
    let params = SimulationParams::default();

    let a = simulate(&series, &params, &mut StdRng::seed_from_u64(99)).unwrap();
    let b = simulate(&series, &params, &mut StdRng::seed_from_u64(99)).unwrap();

    assert_eq!(a.prices.len(), 253);
    assert_eq!(a, b);
}

#[test]
fn all_prices_are_finite_and_strictly_positive() {
    let series = reference_series();
    let params = SimulationParams {
        jump_intensity: 0.5,
        jump_mean: -0.1,
        jump_vol: 0.3,
        ..SimulationParams::default()
    };

    let mut rng = StdRng::seed_from_u64(3);
    let path = simulate(&series, &params, &mut rng).unwrap();

    assert_eq!(path.prices.len(), 253);
    assert!(path.prices.iter().all(|p| p.is_finite() && *p > 0.0));
}

#[test]
fn single_step_yields_a_two_element_path() {
    let series = reference_series();
    let params = SimulationParams {
        sigma: Some(0.05),
        steps: 1,
        ..SimulationParams::default()
    };

    let mut rng = StdRng::seed_from_u64(5);
    let path = simulate(&series, &params, &mut rng).unwrap();

    assert_eq!(path.prices.len(), 2);
    assert_eq!(path.prices[0], 105.0);
}

#[test]
fn one_point_series_is_rejected_before_simulation() {
    let short = HistoricalSeries::from_closes(start_date(), &[100.0]);
    assert!(matches!(short, Err(SimulationError::InsufficientData(_))));
}

#[test]
fn invalid_parameters_fail_fast() {
    let series = reference_series();
    let mut rng = StdRng::seed_from_u64(1);

    let zero_steps = SimulationParams {
        steps: 0,
        ..SimulationParams::default()
    };
    assert!(matches!(
        simulate(&series, &zero_steps, &mut rng),
        Err(SimulationError::InvalidParameter(_))
    ));

    let bad_horizon = SimulationParams {
        horizon_years: -1.0,
        ..SimulationParams::default()
    };
    assert!(matches!(
        simulate(&series, &bad_horizon, &mut rng),
        Err(SimulationError::InvalidParameter(_))
    ));

    let bad_jump_vol = SimulationParams {
        jump_vol: -0.1,
        ..SimulationParams::default()
    };
    assert!(matches!(
        simulate(&series, &bad_jump_vol, &mut rng),
        Err(SimulationError::InvalidParameter(_))
    ));
}

#[test]
fn source_failure_propagates_as_data_unavailable() {
    let source = StaticSource::new();
    let err = source
        .daily_closes("SB=F", start_date(), start_date())
        .unwrap_err();
    assert!(matches!(err, SimulationError::DataUnavailable(_)));
}

#[test]
fn source_to_simulation_pipeline_produces_a_path() {
    let mut source = StaticSource::new();
    source.insert(
        "SB=F",
        (0..30)
            .map(|i| PricePoint {
                date: start_date() + chrono::Duration::days(i),
                close: 20.0 + (i as f64 * 0.37).sin(),
            })
            .collect::<Vec<_>>(),
    );

    let series = source
        .daily_closes(
            "SB=F",
            start_date(),
            start_date() + chrono::Duration::days(60),
        )
        .unwrap();

    let mut rng = StdRng::seed_from_u64(21);
    let path = simulate(&series, &SimulationParams::default(), &mut rng).unwrap();

    assert_eq!(path.prices.len(), 253);
    assert_eq!(path.prices[0], series.last_close());
    assert!(path.sigma_was_estimated);

    let merged = merge_with_history(&series, &path);
    assert_eq!(merged.len(), series.len());
    assert!(merged.iter().all(|m| m.simulated.is_some()));
    assert_eq!(merged[0].simulated, Some(path.prices[0]));
}
