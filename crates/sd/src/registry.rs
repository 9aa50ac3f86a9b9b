//! Plug-in registry and estimator constructor for the SD family.

use crate::algorithms::{BallCollision, Dumer, Prange, Stern};
use crate::problem::SdProblem;
use cryptoforge_core::{CostSpec, Estimator, EstimatorConfig};
use std::rc::Rc;

/// All registered ISD plug-ins, in report order. Every one of them applies
/// to any well-formed binary SD instance.
pub fn default_specs(problem: &SdProblem) -> Vec<Box<dyn CostSpec<SdProblem>>> {
    vec![
        Box::new(BallCollision::new(problem)),
        Box::new(Dumer::new(problem)),
        Box::new(Prange::new(problem)),
        Box::new(Stern::new(problem)),
    ]
}

/// Builds an estimator over the default registry minus
/// `excluded_algorithms`.
pub fn sd_estimator(
    problem: SdProblem,
    excluded_algorithms: &[String],
    config: EstimatorConfig,
) -> Estimator<SdProblem> {
    let specs = default_specs(&problem);
    Estimator::new(Rc::new(problem), specs, excluded_algorithms, config)
}
