//! Hybrid exhaustive-search / F5 trade-off.

use crate::algorithms::f5::{groebner_memory, groebner_tilde_o_time, groebner_time};
use crate::algorithms::reduced_parameters;
use crate::problem::MqProblem;
use cryptoforge_core::{
    Assignment, AuxMap, CostSample, CostSpec, ParamKind, TuningSchema,
};

/// Fixes `k` variables and runs one Groebner-basis computation per each of
/// the `q^k` guesses.
pub struct HybridF5 {
    schema: TuningSchema,
    w: f64,
    h: u64,
}

impl HybridF5 {
    pub fn new(problem: &MqProblem) -> Self {
        let (n, _, _) = reduced_parameters(problem, 0);
        Self {
            schema: TuningSchema::new().declare("k", 0, n as i64 - 1, ParamKind::Joint),
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

    pub fn applies_to(_problem: &MqProblem) -> bool {
        true
    }

    /// Expected solution count of the subsystem after fixing `k` variables.
    fn subsystem_nsolutions(n: u64, m: u64, q: u64, k: i64) -> f64 {
        ((q as f64).log2() * (n as f64 - k as f64 - m as f64)).max(0.0)
    }
}

impl CostSpec<MqProblem> for HybridF5 {
    fn name(&self) -> &'static str {
        "HybridF5"
    }

    fn schema(&self) -> &TuningSchema {
        &self.schema
    }

    fn cost(
        &self,
        problem: &MqProblem,
        params: &Assignment<'_>,
        _aux: Option<&mut AuxMap>,
    ) -> CostSample {
        let (n, m, q) = reduced_parameters(problem, self.h);
        let k = params.get("k");
        let remaining = (n as i64 - k).max(1) as u64;
        let nsolutions = Self::subsystem_nsolutions(n, m, q, k);

        let time = k as f64 * (q as f64).log2()
            + groebner_time(remaining, m, q, self.w, nsolutions, 0)
            + self.h as f64 * (q as f64).log2();
        let memory =
            groebner_memory(remaining, m, q).max(((m * n * n) as f64).log2());
        CostSample::new(time, memory)
    }

    fn tilde_o_cost(&self, problem: &MqProblem, params: &Assignment<'_>) -> Option<CostSample> {
        let (n, m, q) = reduced_parameters(problem, self.h);
        let k = params.get("k");
        let remaining = (n as i64 - k).max(1) as u64;
        let nsolutions = Self::subsystem_nsolutions(n, m, q, k);
        let time = k as f64 * (q as f64).log2()
            + groebner_tilde_o_time(remaining, m, q, self.w, nsolutions, 0)
            + self.h as f64 * (q as f64).log2();
        let memory =
            groebner_memory(remaining, m, q).max(((m * n * n) as f64).log2());
        Some(CostSample::new(time, memory))
    }
}
