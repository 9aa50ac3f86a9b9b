//! Property tests over random decoding instances.

use cryptoforge_core::EstimatorConfig;
use cryptoforge_sd::{sd_estimator, SdProblem};
use proptest::prelude::*;

/// Random but structurally valid (n, k, w) triples.
fn instances() -> impl Strategy<Value = (u64, u64, u64)> {
    (24u64..80).prop_flat_map(|n| {
        (Just(n), n / 4..3 * n / 4).prop_flat_map(|(n, k)| {
            let w_max = (n - k).min(n / 5).max(1);
            (Just(n), Just(k), 1u64..=w_max)
        })
    })
}

proptest! {
    #[test]
    fn chosen_parameters_stay_inside_their_boxes((n, k, w) in instances()) {
        let problem = SdProblem::new(n, k, w).unwrap();
        let mut estimator = sd_estimator(problem, &[], EstimatorConfig::default());
        let report = estimator.estimate();
        for entry in &report.entries {
            if !entry.estimate.time.is_finite() {
                continue;
            }
            let params = &entry.estimate.parameters;
            prop_assert!((0..=(n - k) as i64).contains(&params["r"]));
            if let Some(p) = params.get("p") {
                prop_assert!((0..=(w / 2) as i64).contains(p), "p out of box: {p}");
            }
            if let Some(l) = params.get("l") {
                prop_assert!((0..=(n - k) as i64).contains(l), "l out of box: {l}");
            }
        }
    }

    #[test]
    fn optima_respect_the_memory_bound((n, k, w) in instances()) {
        let free_memory = {
            let problem = SdProblem::new(n, k, w).unwrap();
            let mut estimator = sd_estimator(problem, &[], EstimatorConfig::default());
            estimator.algorithm_mut("Stern").unwrap().memory_complexity()
        };
        let bound = free_memory - 0.5;
        let problem = SdProblem::new(n, k, w).unwrap().with_memory_bound(bound);
        let mut estimator = sd_estimator(problem, &[], EstimatorConfig::default());
        let constrained = estimator.algorithm_mut("Stern").unwrap().memory_complexity();
        prop_assert!(constrained <= bound || constrained == f64::INFINITY);
    }

    #[test]
    fn tightening_the_memory_bound_never_speeds_anything_up((n, k, w) in instances()) {
        let problem = SdProblem::new(n, k, w).unwrap();
        let mut free = sd_estimator(problem.clone(), &[], EstimatorConfig::default());
        let free_time = free.algorithm_mut("Stern").unwrap().time_complexity();
        let free_memory = free.algorithm_mut("Stern").unwrap().memory_complexity();

        let tight = problem.with_memory_bound(free_memory - 1.0);
        let mut constrained = sd_estimator(tight, &[], EstimatorConfig::default());
        let tight_time = constrained.algorithm_mut("Stern").unwrap().time_complexity();
        prop_assert!(tight_time >= free_time);
    }

    #[test]
    fn reset_reproduces_results_bit_for_bit((n, k, w) in instances()) {
        let problem = SdProblem::new(n, k, w).unwrap();
        let mut estimator = sd_estimator(problem, &[], EstimatorConfig::default());
        for algorithm in estimator.algorithms_mut() {
            let before = algorithm.time_complexity();
            algorithm.reset();
            prop_assert_eq!(before.to_bits(), algorithm.time_complexity().to_bits());
        }
    }

    #[test]
    fn refixing_the_free_optimum_reproduces_it((n, k, w) in instances()) {
        let problem = SdProblem::new(n, k, w).unwrap();
        let mut estimator = sd_estimator(problem, &[], EstimatorConfig::default());
        let stern = estimator.algorithm_mut("Stern").unwrap();
        let free_time = stern.time_complexity();
        if !free_time.is_finite() {
            return Ok(());
        }
        let params = stern.optimal_parameters();
        stern.reset();
        stern.set_parameters(&params).unwrap();
        prop_assert_eq!(free_time.to_bits(), stern.time_complexity().to_bits());
    }
}
