//! Algorithm plug-ins and the host that caches their optima.

use crate::config::{AlgorithmConfig, ComplexityType, MemoryAccess};
use crate::error::{ConfigError, Result};
use crate::params::{ParamRanges, SearchRanges, TuningSchema};
use crate::problem::Problem;
use crate::search;
use std::collections::BTreeMap;
use std::rc::Rc;

/// `(time, memory)` in the algorithm's native units, both log₂.
///
/// `time = INFINITY` marks an assignment as infeasible.
#[derive(Debug, Clone, Copy)]
pub struct CostSample {
    pub time: f64,
    pub memory: f64,
}

impl CostSample {
    pub const INFEASIBLE: CostSample = CostSample {
        time: f64::INFINITY,
        memory: f64::INFINITY,
    };

    pub fn new(time: f64, memory: f64) -> Self {
        Self { time, memory }
    }
}

/// Open side-channel for verbose reporting (list sizes, iteration counts).
pub type AuxMap = BTreeMap<String, serde_json::Value>;

/// One full tuning assignment, viewed through the declaring schema.
#[derive(Clone, Copy)]
pub struct Assignment<'a> {
    schema: &'a TuningSchema,
    values: &'a [i64],
}

impl<'a> Assignment<'a> {
    pub fn new(schema: &'a TuningSchema, values: &'a [i64]) -> Self {
        debug_assert_eq!(schema.len(), values.len());
        Self { schema, values }
    }

    /// Value of the named parameter; an unknown name is a programmer error.
    pub fn get(&self, name: &str) -> i64 {
        let idx = self
            .schema
            .index_of(name)
            .unwrap_or_else(|| panic!("`{name}` is not in the schema"));
        self.values[idx]
    }

    pub fn values(&self) -> &[i64] {
        self.values
    }

    pub fn to_map(&self) -> BTreeMap<String, i64> {
        self.schema
            .names()
            .zip(self.values.iter().copied())
            .map(|(n, v)| (n.to_string(), v))
            .collect()
    }
}

/// The capability set one attack algorithm plugs into the framework.
///
/// The cost function is the only place cryptanalytic formulas live. It must
/// be pure, work in log₂ arithmetic and never iterate over tuning
/// parameters itself; searching is the framework's job.
pub trait CostSpec<P: Problem> {
    fn name(&self) -> &'static str;

    /// Declared tuning parameters, independents first.
    fn schema(&self) -> &TuningSchema;

    /// Closed-form optimum of an independent parameter. Returning `None`
    /// demotes the parameter to a joint one for the current search.
    fn optimal_independent(&self, _problem: &P, _name: &str) -> Option<i64> {
        None
    }

    /// Cheap rejection predicate; skipped tuples do not count as samples.
    fn are_parameters_invalid(&self, _problem: &P, _params: &Assignment<'_>) -> bool {
        false
    }

    /// Replaces the default Cartesian enumeration, e.g. to enforce parity
    /// constraints without wasting cost evaluations. Yielded vectors are
    /// full assignments in schema order.
    fn valid_choices<'a>(
        &'a self,
        _problem: &'a P,
        _ranges: &'a SearchRanges<'a>,
    ) -> Option<Box<dyn Iterator<Item = Vec<i64>> + 'a>> {
        None
    }

    /// The pure cost function in native units.
    fn cost(&self, problem: &P, params: &Assignment<'_>, aux: Option<&mut AuxMap>) -> CostSample;

    /// Asymptotic Õ cost with polylog factors stripped; `None` when the
    /// algorithm has no such form.
    fn tilde_o_cost(&self, _problem: &P, _params: &Assignment<'_>) -> Option<CostSample> {
        None
    }

    /// Quantum time complexity; `None` when no quantum variant exists.
    fn quantum_time(&self, _problem: &P, _params: &Assignment<'_>) -> Option<f64> {
        None
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Optimum {
    pub values: Vec<i64>,
    pub time: f64,
    pub memory: f64,
    pub aux: AuxMap,
}

#[derive(Debug, Clone, Default)]
pub(crate) enum SearchState {
    #[default]
    Unevaluated,
    Optimal(Optimum),
    NoFeasibleSample,
}

/// Hosts one plug-in for one problem instance: configuration, live
/// parameter ranges, and the cached optimum.
pub struct Algorithm<P: Problem> {
    spec: Box<dyn CostSpec<P>>,
    problem: Rc<P>,
    config: AlgorithmConfig,
    ranges: ParamRanges,
    state: SearchState,
}

impl<P: Problem> Algorithm<P> {
    pub fn new(spec: Box<dyn CostSpec<P>>, problem: Rc<P>, config: AlgorithmConfig) -> Self {
        let ranges = ParamRanges::new(spec.schema().clone());
        Self {
            spec,
            problem,
            config,
            ranges,
            state: SearchState::Unevaluated,
        }
    }

    pub fn name(&self) -> &'static str {
        self.spec.name()
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn config(&self) -> &AlgorithmConfig {
        &self.config
    }

    pub fn parameter_names(&self) -> Vec<&'static str> {
        self.spec.schema().names().collect()
    }

    /// Clears the cached optimum; ranges and fixed values stay in effect.
    pub fn reset(&mut self) {
        self.invalidate();
    }

    /// Clears all user-fixed values (and the cache); explicit range
    /// narrowing stays in effect.
    pub fn clear_parameters(&mut self) {
        self.ranges.clear_fixed();
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.state = SearchState::Unevaluated;
    }

    pub fn set_complexity_type(&mut self, complexity_type: ComplexityType) {
        if self.config.complexity_type != complexity_type {
            self.invalidate();
            self.config.complexity_type = complexity_type;
        }
    }

    pub fn set_bit_complexities(&mut self, bit_complexities: bool) {
        if self.config.bit_complexities != bit_complexities {
            self.invalidate();
            self.config.bit_complexities = bit_complexities;
        }
    }

    pub fn set_memory_access(&mut self, memory_access: MemoryAccess) {
        self.invalidate();
        self.config.memory_access = memory_access;
    }

    /// Narrows the live box of one tuning parameter.
    pub fn set_parameter_ranges(&mut self, name: &str, min: i64, max: i64) -> Result<()> {
        self.ranges.set_range(name, min, max)?;
        self.invalidate();
        Ok(())
    }

    /// Fixes a subset of the tuning parameters to concrete values. Fixing
    /// every parameter makes the next complexity query evaluate exactly
    /// that assignment.
    pub fn set_parameters(&mut self, parameters: &BTreeMap<String, i64>) -> Result<()> {
        for name in parameters.keys() {
            if self.spec.schema().index_of(name).is_none() {
                return Err(ConfigError::UnknownParameter(name.clone()));
            }
        }
        for (name, &value) in parameters {
            self.ranges.set_value(name, value)?;
        }
        self.invalidate();
        Ok(())
    }

    fn ensure_optimized(&mut self) {
        if !matches!(self.state, SearchState::Unevaluated) {
            return;
        }
        let estimate =
            search::find_optimum(self.spec.as_ref(), &*self.problem, &self.config, &self.ranges);
        self.state = match self.config.complexity_type {
            ComplexityType::Estimate => estimate,
            ComplexityType::TildeO => match estimate {
                SearchState::Optimal(opt) => {
                    let assignment = Assignment::new(self.spec.schema(), &opt.values);
                    match self.spec.tilde_o_cost(&self.problem, &assignment) {
                        Some(sample) => SearchState::Optimal(Optimum {
                            values: opt.values,
                            time: sample.time,
                            memory: sample.memory,
                            aux: AuxMap::new(),
                        }),
                        None => SearchState::NoFeasibleSample,
                    }
                }
                other => other,
            },
        };
    }

    /// Minimised time complexity under the current configuration;
    /// `INFINITY` when the search space is empty or nothing fits the
    /// memory bound.
    pub fn time_complexity(&mut self) -> f64 {
        self.ensure_optimized();
        match &self.state {
            SearchState::Optimal(opt) => opt.time,
            _ => f64::INFINITY,
        }
    }

    /// Memory complexity at the cached optimum.
    pub fn memory_complexity(&mut self) -> f64 {
        self.ensure_optimized();
        match &self.state {
            SearchState::Optimal(opt) => opt.memory,
            _ => f64::INFINITY,
        }
    }

    /// Time complexity of one explicit assignment, without touching the
    /// cache; every declared parameter must be present.
    pub fn time_complexity_for(&self, parameters: &BTreeMap<String, i64>) -> Result<f64> {
        let values = self.full_assignment(parameters)?;
        match self.config.complexity_type {
            ComplexityType::Estimate => {
                Ok(search::evaluate(
                    self.spec.as_ref(),
                    &*self.problem,
                    &self.config,
                    &values,
                    None,
                )
                .0)
            }
            ComplexityType::TildeO => {
                let assignment = Assignment::new(self.spec.schema(), &values);
                Ok(self
                    .spec
                    .tilde_o_cost(&self.problem, &assignment)
                    .map_or(f64::INFINITY, |s| s.time))
            }
        }
    }

    /// Memory complexity of one explicit assignment.
    pub fn memory_complexity_for(&self, parameters: &BTreeMap<String, i64>) -> Result<f64> {
        let values = self.full_assignment(parameters)?;
        match self.config.complexity_type {
            ComplexityType::Estimate => {
                Ok(search::evaluate(
                    self.spec.as_ref(),
                    &*self.problem,
                    &self.config,
                    &values,
                    None,
                )
                .1)
            }
            ComplexityType::TildeO => {
                let assignment = Assignment::new(self.spec.schema(), &values);
                Ok(self
                    .spec
                    .tilde_o_cost(&self.problem, &assignment)
                    .map_or(f64::INFINITY, |s| s.memory))
            }
        }
    }

    fn full_assignment(&self, parameters: &BTreeMap<String, i64>) -> Result<Vec<i64>> {
        for name in parameters.keys() {
            if self.spec.schema().index_of(name).is_none() {
                return Err(ConfigError::UnknownParameter(name.clone()));
            }
        }
        let missing: Vec<String> = self
            .spec
            .schema()
            .names()
            .filter(|n| !parameters.contains_key(*n))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingParameters(missing));
        }
        Ok(self
            .spec
            .schema()
            .names()
            .map(|n| parameters[n])
            .collect())
    }

    /// The minimising assignment, running the search if necessary; empty
    /// when no feasible sample exists.
    pub fn optimal_parameters(&mut self) -> BTreeMap<String, i64> {
        self.ensure_optimized();
        self.optimal_parameters_dict()
    }

    /// Snapshot of the currently cached assignment, possibly empty.
    pub fn optimal_parameters_dict(&self) -> BTreeMap<String, i64> {
        match &self.state {
            SearchState::Optimal(opt) => {
                Assignment::new(self.spec.schema(), &opt.values).to_map()
            }
            _ => BTreeMap::new(),
        }
    }

    /// The aux map preserved from the best sample's recomputation.
    pub fn verbose_information(&mut self) -> AuxMap {
        self.ensure_optimized();
        match &self.state {
            SearchState::Optimal(opt) => opt.aux.clone(),
            _ => AuxMap::new(),
        }
    }

    /// Õ time and memory at the estimate-optimal assignment; `None` when
    /// the plug-in declares no Õ form or nothing is feasible.
    pub fn tilde_o_estimate(&mut self) -> Option<(f64, f64, BTreeMap<String, i64>)> {
        if self.config.complexity_type == ComplexityType::TildeO {
            self.ensure_optimized();
            return match &self.state {
                SearchState::Optimal(opt) => Some((
                    opt.time,
                    opt.memory,
                    Assignment::new(self.spec.schema(), &opt.values).to_map(),
                )),
                _ => None,
            };
        }
        self.ensure_optimized();
        match &self.state {
            SearchState::Optimal(opt) => {
                let assignment = Assignment::new(self.spec.schema(), &opt.values);
                let sample = self.spec.tilde_o_cost(&self.problem, &assignment)?;
                Some((sample.time, sample.memory, assignment.to_map()))
            }
            _ => None,
        }
    }

    /// Quantum time at the cached optimum; `INFINITY` when the plug-in has
    /// no quantum variant.
    pub fn quantum_time_complexity(&mut self) -> f64 {
        self.ensure_optimized();
        match &self.state {
            SearchState::Optimal(opt) => {
                let assignment = Assignment::new(self.spec.schema(), &opt.values);
                self.spec
                    .quantum_time(&self.problem, &assignment)
                    .unwrap_or(f64::INFINITY)
            }
            _ => f64::INFINITY,
        }
    }
}
