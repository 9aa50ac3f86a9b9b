//! Estimator façade: runs every applicable algorithm on one problem.

use crate::algorithm::{Algorithm, AuxMap, CostSpec};
use crate::config::{AlgorithmConfig, ComplexityType, MemoryAccess};
use crate::problem::Problem;
use crate::report::{AlgorithmReport, EstimateBlock, Report};
use std::rc::Rc;
use tracing::debug;

/// Estimator-wide configuration: the cost-model fields propagated to every
/// owned algorithm plus the rendering flags consumed by the report.
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    pub complexity_type: ComplexityType,
    pub bit_complexities: bool,
    pub memory_access: MemoryAccess,
    /// Decimal digits in rendered output.
    pub precision: usize,
    /// Truncate rather than round when rendering.
    pub truncate: bool,
    pub show_all_parameters: bool,
    pub show_tilde_o_time: bool,
    pub show_quantum_complexity: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            complexity_type: ComplexityType::Estimate,
            bit_complexities: true,
            memory_access: MemoryAccess::Constant,
            precision: 1,
            truncate: false,
            show_all_parameters: false,
            show_tilde_o_time: false,
            show_quantum_complexity: false,
        }
    }
}

impl EstimatorConfig {
    fn algorithm_config(&self) -> AlgorithmConfig {
        AlgorithmConfig {
            complexity_type: self.complexity_type,
            bit_complexities: self.bit_complexities,
            memory_access: self.memory_access.clone(),
        }
    }
}

/// Owns one problem instance and one [`Algorithm`] per registered plug-in
/// that applies to it, minus the caller's exclusions.
pub struct Estimator<P: Problem> {
    problem: Rc<P>,
    algorithms: Vec<Algorithm<P>>,
    config: EstimatorConfig,
}

impl<P: Problem> Estimator<P> {
    /// `specs` is the family registry already filtered by applicability;
    /// `excluded_algorithms` filters further by name.
    pub fn new(
        problem: Rc<P>,
        specs: Vec<Box<dyn CostSpec<P>>>,
        excluded_algorithms: &[String],
        config: EstimatorConfig,
    ) -> Self {
        let algorithms = specs
            .into_iter()
            .filter(|s| !excluded_algorithms.iter().any(|e| e == s.name()))
            .map(|s| Algorithm::new(s, Rc::clone(&problem), config.algorithm_config()))
            .collect();
        Self {
            problem,
            algorithms,
            config,
        }
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    pub fn algorithms(&self) -> &[Algorithm<P>] {
        &self.algorithms
    }

    pub fn algorithms_mut(&mut self) -> &mut [Algorithm<P>] {
        &mut self.algorithms
    }

    /// Mutable access to one algorithm, e.g. to fix its tuning parameters.
    pub fn algorithm_mut(&mut self, name: &str) -> Option<&mut Algorithm<P>> {
        self.algorithms.iter_mut().find(|a| a.name() == name)
    }

    pub fn algorithm_names(&self) -> Vec<String> {
        self.algorithms.iter().map(|a| a.name().to_string()).collect()
    }

    pub fn nalgorithms(&self) -> usize {
        self.algorithms.len()
    }

    /// Propagates to every owned algorithm and invalidates their caches.
    pub fn set_complexity_type(&mut self, complexity_type: ComplexityType) {
        self.config.complexity_type = complexity_type;
        for algorithm in &mut self.algorithms {
            algorithm.set_complexity_type(complexity_type);
        }
    }

    /// Propagates to every owned algorithm and invalidates their caches.
    pub fn set_bit_complexities(&mut self, bit_complexities: bool) {
        self.config.bit_complexities = bit_complexities;
        for algorithm in &mut self.algorithms {
            algorithm.set_bit_complexities(bit_complexities);
        }
    }

    /// Propagates to every owned algorithm and invalidates their caches.
    pub fn set_memory_access(&mut self, memory_access: MemoryAccess) {
        self.config.memory_access = memory_access.clone();
        for algorithm in &mut self.algorithms {
            algorithm.set_memory_access(memory_access.clone());
        }
    }

    /// Resets every owned algorithm.
    pub fn reset(&mut self) {
        for algorithm in &mut self.algorithms {
            algorithm.reset();
        }
    }

    /// Computes every algorithm's estimate and packages the report in
    /// registration order.
    pub fn estimate(&mut self) -> Report {
        let total = self.algorithms.len();
        let mut entries = Vec::with_capacity(total);
        for (index, algorithm) in self.algorithms.iter_mut().enumerate() {
            debug!(
                algorithm = algorithm.name(),
                index = index + 1,
                total,
                "processing algorithm"
            );
            let time = algorithm.time_complexity();
            let memory = algorithm.memory_complexity();
            let parameters = algorithm.optimal_parameters_dict();
            let additional_information = if time.is_finite() {
                algorithm.verbose_information()
            } else {
                AuxMap::new()
            };
            let tilde_o_estimate = if self.config.show_tilde_o_time {
                Some(match algorithm.tilde_o_estimate() {
                    Some((t, m, p)) => EstimateBlock {
                        time: t,
                        memory: m,
                        parameters: p,
                    },
                    None => EstimateBlock::infeasible(),
                })
            } else {
                None
            };
            let quantum_estimate = if self.config.show_quantum_complexity {
                Some(algorithm.quantum_time_complexity())
            } else {
                None
            };
            entries.push(AlgorithmReport {
                algorithm: algorithm.name().to_string(),
                estimate: EstimateBlock {
                    time,
                    memory,
                    parameters,
                },
                additional_information,
                tilde_o_estimate,
                quantum_estimate,
            });
        }
        Report {
            entries,
            precision: self.config.precision,
            truncate: self.config.truncate,
            show_all_parameters: self.config.show_all_parameters,
        }
    }

    /// The algorithm with the smallest minimised time; ties go to the
    /// earlier registration. `None` when nothing is applicable.
    pub fn fastest_algorithm(&mut self) -> Option<&Algorithm<P>> {
        let times: Vec<f64> = self
            .algorithms
            .iter_mut()
            .map(|a| a.time_complexity())
            .collect();
        let mut fastest: Option<usize> = None;
        for (i, &t) in times.iter().enumerate() {
            if fastest.map_or(true, |f| t < times[f]) {
                fastest = Some(i);
            }
        }
        match fastest {
            Some(i) => Some(&self.algorithms[i]),
            None => None,
        }
    }
}
