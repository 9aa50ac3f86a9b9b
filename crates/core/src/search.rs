//! The optimisation core: deterministic enumeration of tuning assignments.
//!
//! Independent parameters are fixed first via each plug-in's closed-form
//! optimiser, then the joint parameters are enumerated (default Cartesian
//! product, or the plug-in's own generator). Every surviving sample is
//! transformed by the configured cost model and checked against the
//! problem's memory bound; the first minimal sample wins, making results
//! deterministic for identical inputs.

use crate::algorithm::{Assignment, AuxMap, CostSpec, Optimum, SearchState};
use crate::config::AlgorithmConfig;
use crate::params::{CartesianChoices, ParamKind, ParamRanges, SearchRanges};
use crate::problem::Problem;
use tracing::debug;

/// Applies the cost-model transforms to one native sample: unit conversion
/// into bits, then the memory-access penalty on the converted memory.
pub(crate) fn evaluate<P: Problem>(
    spec: &dyn CostSpec<P>,
    problem: &P,
    config: &AlgorithmConfig,
    values: &[i64],
    aux: Option<&mut AuxMap>,
) -> (f64, f64) {
    let assignment = Assignment::new(spec.schema(), values);
    let sample = spec.cost(problem, &assignment, aux);
    let mut time = sample.time;
    let mut memory = sample.memory;
    if config.bit_complexities {
        time = problem.to_bitcomplexity_time(time);
        memory = problem.to_bitcomplexity_memory(memory);
    }
    time += config.memory_access.cost(memory);
    (time, memory)
}

pub(crate) fn find_optimum<P: Problem>(
    spec: &dyn CostSpec<P>,
    problem: &P,
    config: &AlgorithmConfig,
    ranges: &ParamRanges,
) -> SearchState {
    let schema = spec.schema();

    // Every parameter pinned by the user: evaluate exactly that assignment,
    // bypassing the validity predicate and the memory bound.
    if (0..schema.len()).all(|i| ranges.fixed(i).is_some()) {
        let values: Vec<i64> = (0..schema.len())
            .map(|i| ranges.fixed(i).unwrap())
            .collect();
        let mut aux = AuxMap::new();
        let (time, memory) = evaluate(spec, problem, config, &values, Some(&mut aux));
        if !time.is_finite() {
            return SearchState::NoFeasibleSample;
        }
        return SearchState::Optimal(Optimum {
            values,
            time,
            memory,
            aux,
        });
    }

    let mut working: Vec<(i64, i64)> = (0..schema.len()).map(|i| ranges.range(i)).collect();

    // Closed-form independents first, in declaration order. A missing
    // analytic routine demotes the parameter to a joint one.
    for (i, param) in schema.iter().enumerate() {
        if param.kind == ParamKind::Independent && ranges.fixed(i).is_none() {
            if let Some(v) = spec.optimal_independent(problem, param.name) {
                let pinned = v.clamp(working[i].0, working[i].1);
                working[i] = (pinned, pinned);
            }
        }
    }

    let search_ranges = SearchRanges::new(schema, working.clone());
    let choices: Box<dyn Iterator<Item = Vec<i64>> + '_> =
        match spec.valid_choices(problem, &search_ranges) {
            Some(custom) => custom,
            None => Box::new(CartesianChoices::new(&working)),
        };

    let memory_bound = problem.memory_bound();
    let mut best: Option<(Vec<i64>, f64, f64)> = None;
    for values in choices {
        let assignment = Assignment::new(schema, &values);
        if spec.are_parameters_invalid(problem, &assignment) {
            continue;
        }
        let (time, memory) = evaluate(spec, problem, config, &values, None);
        if !time.is_finite() || memory > memory_bound {
            continue;
        }
        if best.as_ref().map_or(true, |(_, t, _)| time < *t) {
            best = Some((values, time, memory));
        }
    }

    match best {
        Some((values, time, memory)) => {
            let mut aux = AuxMap::new();
            let _ = evaluate(spec, problem, config, &values, Some(&mut aux));
            debug!(
                algorithm = spec.name(),
                time, memory, "parameter search finished"
            );
            SearchState::Optimal(Optimum {
                values,
                time,
                memory,
                aux,
            })
        }
        None => {
            debug!(algorithm = spec.name(), "search found no feasible sample");
            SearchState::NoFeasibleSample
        }
    }
}
