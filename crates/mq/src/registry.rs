//! Plug-in registry and estimator constructor for the MQ family.

use crate::algorithms::{
    BooleanSolveFxl, Crossbred, ExhaustiveSearch, F5, HybridF5, Lokshtanov,
};
use crate::problem::MqProblem;
use cryptoforge_core::{CostSpec, Estimator, EstimatorConfig};
use std::rc::Rc;

/// All registered MQ plug-ins that apply to `problem`, in report order.
pub fn default_specs(problem: &MqProblem) -> Vec<Box<dyn CostSpec<MqProblem>>> {
    let mut specs: Vec<Box<dyn CostSpec<MqProblem>>> = Vec::new();
    if BooleanSolveFxl::applies_to(problem) {
        specs.push(Box::new(BooleanSolveFxl::new(problem)));
    }
    if Crossbred::applies_to(problem) {
        specs.push(Box::new(Crossbred::new(problem)));
    }
    if ExhaustiveSearch::applies_to(problem) {
        specs.push(Box::new(ExhaustiveSearch::new(problem)));
    }
    if F5::applies_to(problem) {
        specs.push(Box::new(F5::new(problem)));
    }
    if HybridF5::applies_to(problem) {
        specs.push(Box::new(HybridF5::new(problem)));
    }
    if Lokshtanov::applies_to(problem) {
        specs.push(Box::new(Lokshtanov::new(problem)));
    }
    specs
}

/// Builds an estimator over the default registry minus
/// `excluded_algorithms`.
pub fn mq_estimator(
    problem: MqProblem,
    excluded_algorithms: &[String],
    config: EstimatorConfig,
) -> Estimator<MqProblem> {
    let specs = default_specs(&problem);
    Estimator::new(Rc::new(problem), specs, excluded_algorithms, config)
}
