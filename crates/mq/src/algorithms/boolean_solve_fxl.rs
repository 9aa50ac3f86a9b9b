//! BooleanSolve / FXL guess-and-determine solving.

use crate::algorithms::reduced_parameters;
use crate::problem::MqProblem;
use crate::witness::witness_degree_quadratic;
use cryptoforge_core::numerics::{binomial, log2_binomial};
use cryptoforge_core::{
    Assignment, AuxMap, CostSample, CostSpec, ParamKind, TuningSchema,
};

const LAS_VEGAS: i64 = 0;
const DETERMINISTIC: i64 = 1;

/// Guesses `k` variables and checks consistency of the specialised
/// subsystem, either probabilistically (sparse Las Vegas verification) or
/// by deterministic Macaulay elimination.
pub struct BooleanSolveFxl {
    schema: TuningSchema,
    w: f64,
    h: u64,
}

impl BooleanSolveFxl {
    pub fn new(problem: &MqProblem) -> Self {
        let (n, _, _) = reduced_parameters(problem, 0);
        let k_min = if problem.is_overdefined_system() { 0 } else { 1 };
        Self {
            schema: TuningSchema::new()
                .declare("k", k_min, (n as i64 - 1).max(1), ParamKind::Joint)
                .declare("variant", LAS_VEGAS, DETERMINISTIC, ParamKind::Joint),
            w: 2.0,
            h: 0,
        }
    }

    pub fn with_linear_algebra_constant(mut self, w: f64) -> Self {
        assert!((2.0..=3.0).contains(&w), "w must be in the range 2 <= w <= 3");
        self.w = w;
        self
    }

    pub fn with_hybridization(mut self, h: u64) -> Self {
        self.h = h;
        self
    }

    /// The witness-degree bound needs at least as many equations as
    /// remaining variables, which the reduction guarantees.
    pub fn applies_to(_problem: &MqProblem) -> bool {
        true
    }
}

impl CostSpec<MqProblem> for BooleanSolveFxl {
    fn name(&self) -> &'static str {
        "BooleanSolveFXL"
    }

    fn schema(&self) -> &TuningSchema {
        &self.schema
    }

    fn cost(
        &self,
        problem: &MqProblem,
        params: &Assignment<'_>,
        aux: Option<&mut AuxMap>,
    ) -> CostSample {
        let (n, m, q) = reduced_parameters(problem, self.h);
        let k = params.get("k");
        let variant = params.get("variant");
        let remaining = (n as i64 - k).max(0) as u64;
        let Some(wd) = witness_degree_quadratic(remaining, m, Some(q)) else {
            return CostSample::INFEASIBLE;
        };
        let lq = (q as f64).log2();
        let ncols = log2_binomial(remaining + wd as u64, wd as i64);

        let (time, memory) = match variant {
            LAS_VEGAS => {
                let time = 3f64.log2()
                    + log2_binomial(remaining + 2, 2)
                    + k as f64 * lq
                    + 2.0 * ncols;
                let quadratic_terms = binomial(remaining + 2, 2);
                let dense_rows = binomial(remaining + wd as u64 - 2, wd as i64);
                let ncols_mag = binomial(remaining + wd as u64, wd as i64);
                let memory = (m as f64 * quadratic_terms
                    + (dense_rows * quadratic_terms * ncols_mag.log2()
                        + ncols_mag * (m as f64).log2())
                        / lq)
                    .max((m * n * n) as f64)
                    .log2();
                (time, memory)
            }
            DETERMINISTIC => {
                let time = k as f64 * lq + (m as f64).log2() + self.w * ncols;
                let macaulay = binomial(remaining + wd as u64 - 1, wd as i64);
                let memory = (macaulay * macaulay).max((m * n * n) as f64).log2();
                (time, memory)
            }
            _ => return CostSample::INFEASIBLE,
        };

        if let Some(aux) = aux {
            let label = if variant == LAS_VEGAS {
                "las_vegas"
            } else {
                "deterministic"
            };
            aux.insert("variant".to_string(), serde_json::json!(label));
            aux.insert("witness_degree".to_string(), serde_json::json!(wd));
        }

        CostSample::new(time + self.h as f64 * lq, memory)
    }

    fn tilde_o_cost(&self, problem: &MqProblem, params: &Assignment<'_>) -> Option<CostSample> {
        let (n, m, q) = reduced_parameters(problem, self.h);
        let k = params.get("k");
        let variant = params.get("variant");
        let remaining = (n as i64 - k).max(0) as u64;
        let wd = witness_degree_quadratic(remaining, m, Some(q))?;
        let lq = (q as f64).log2();
        let ncols = log2_binomial(remaining + wd as u64, wd as i64);

        let time = if n == m && q == 2 {
            0.792 * m as f64
        } else if variant == LAS_VEGAS {
            k as f64 * lq + 2.0 * ncols + self.h as f64 * lq
        } else {
            k as f64 * lq + self.w * ncols + self.h as f64 * lq
        };
        let memory = (2.0 * ncols).max(((m * n * n) as f64).log2());
        Some(CostSample::new(time, memory))
    }
}
