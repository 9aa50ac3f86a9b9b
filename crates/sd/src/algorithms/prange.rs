//! Prange's original information-set decoding.

use crate::algorithms::optimal_r;
use crate::isd::{log2_gaussian_elimination_complexity, mem_matrix};
use crate::problem::SdProblem;
use cryptoforge_core::numerics::log2_binomial;
use cryptoforge_core::{Assignment, AuxMap, CostSample, CostSpec, ParamKind, Problem, TuningSchema};

/// Expected weight distribution:
///
/// ```text
/// +--------------------------------+-------------------------------+
/// | <----------+ n - k +---------> | <----------+ k +------------> |
/// |                w               |              0                |
/// +--------------------------------+-------------------------------+
/// ```
pub struct Prange {
    schema: TuningSchema,
}

impl Prange {
    pub fn new(problem: &SdProblem) -> Self {
        let (n, k, _) = problem.parameters();
        Self {
            schema: TuningSchema::new().declare("r", 0, (n - k) as i64, ParamKind::Independent),
        }
    }
}

impl CostSpec<SdProblem> for Prange {
    fn name(&self) -> &'static str {
        "Prange"
    }

    fn schema(&self) -> &TuningSchema {
        &self.schema
    }

    fn optimal_independent(&self, problem: &SdProblem, name: &str) -> Option<i64> {
        match name {
            "r" => Some(optimal_r(problem)),
            _ => None,
        }
    }

    fn cost(
        &self,
        problem: &SdProblem,
        params: &Assignment<'_>,
        aux: Option<&mut AuxMap>,
    ) -> CostSample {
        let (n, k, w) = problem.parameters();
        let r = params.get("r");

        let memory = mem_matrix(n, k, r).log2();
        let permutations = (log2_binomial(n, w as i64)
            - log2_binomial(n - k, w as i64)
            - problem.nsolutions())
        .max(0.0);
        let gauss = log2_gaussian_elimination_complexity(n, k, r);

        if let Some(aux) = aux {
            aux.insert("permutations".to_string(), serde_json::json!(permutations));
            aux.insert("gauss".to_string(), serde_json::json!(gauss));
        }

        CostSample::new(permutations + gauss, memory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryptoforge_core::{Algorithm, AlgorithmConfig};
    use std::rc::Rc;

    #[test]
    fn test_native_complexities_at_the_analytic_block_size() {
        let problem = Rc::new(SdProblem::new(100, 50, 10).unwrap());
        let config = AlgorithmConfig {
            bit_complexities: false,
            ..AlgorithmConfig::default()
        };
        let mut algorithm = Algorithm::new(
            Box::new(Prange::new(&problem)),
            Rc::clone(&problem),
            config,
        );
        assert!((algorithm.time_complexity() - 21.647918033475467).abs() < 1e-9);
        assert!((algorithm.memory_complexity() - 6.044394119358453).abs() < 1e-9);
        assert_eq!(algorithm.optimal_parameters()["r"], 4);
    }
}
