//! F5 Groebner-basis computation on a semi-regular system.

use crate::algorithms::{reduced_nsolutions, reduced_parameters};
use crate::problem::MqProblem;
use crate::witness::degree_of_regularity_quadratic;
use cryptoforge_core::numerics::binomial;
use cryptoforge_core::{Assignment, AuxMap, CostSample, CostSpec, TuningSchema};

/// Matrix-F5 cost of one Groebner basis of `m` quadrics in `n` variables,
/// in field multiplications (log₂), including the FGLM order change when
/// the solution count is positive. Shared with the hybrid variant.
pub(crate) fn groebner_time(n: u64, m: u64, q: u64, w: f64, nsolutions: f64, h: u64) -> f64 {
    let Some(dreg) = degree_of_regularity_quadratic(n, m, Some(q)) else {
        return f64::INFINITY;
    };
    // Macaulay matrix up to the degree of regularity.
    let ncols = binomial(n + dreg as u64, dreg as i64).max(1.0);
    let basis = w * ncols.log2() + (m as f64).log2();
    basis.max(fglm_time(n, nsolutions)) + h as f64 * (q as f64).log2()
}

/// FGLM on a zero-dimensional ideal with `2^nsolutions` solutions.
fn fglm_time(n: u64, nsolutions: f64) -> f64 {
    (n as f64).log2() + 3.0 * nsolutions
}

/// Dense rows at the degree of regularity dominate the storage.
pub(crate) fn groebner_memory(n: u64, m: u64, q: u64) -> f64 {
    let Some(dreg) = degree_of_regularity_quadratic(n, m, Some(q)) else {
        return f64::INFINITY;
    };
    let ncols = binomial(n + dreg as u64 - 1, dreg as i64).max(1.0);
    (2.0 * ncols.log2()).max(((m * n * n) as f64).log2())
}

pub(crate) fn groebner_tilde_o_time(n: u64, m: u64, q: u64, w: f64, nsolutions: f64, h: u64) -> f64 {
    let Some(dreg) = degree_of_regularity_quadratic(n, m, Some(q)) else {
        return f64::INFINITY;
    };
    let ncols = binomial(n + dreg as u64, dreg as i64).max(1.0);
    (w * ncols.log2()).max(3.0 * nsolutions) + h as f64 * (q as f64).log2()
}

pub struct F5 {
    schema: TuningSchema,
    w: f64,
    h: u64,
}

impl F5 {
    pub fn new(_problem: &MqProblem) -> Self {
        Self {
            schema: TuningSchema::new(),
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

    /// The reduction leaves at least as many equations as variables, so
    /// the degree of regularity is always defined.
    pub fn applies_to(_problem: &MqProblem) -> bool {
        true
    }
}

impl CostSpec<MqProblem> for F5 {
    fn name(&self) -> &'static str {
        "F5"
    }

    fn schema(&self) -> &TuningSchema {
        &self.schema
    }

    fn cost(
        &self,
        problem: &MqProblem,
        _params: &Assignment<'_>,
        _aux: Option<&mut AuxMap>,
    ) -> CostSample {
        let (n, m, q) = reduced_parameters(problem, self.h);
        let nsolutions = reduced_nsolutions(problem);
        CostSample::new(
            groebner_time(n, m, q, self.w, nsolutions, self.h),
            groebner_memory(n, m, q),
        )
    }

    fn tilde_o_cost(&self, problem: &MqProblem, _params: &Assignment<'_>) -> Option<CostSample> {
        let (n, m, q) = reduced_parameters(problem, self.h);
        let nsolutions = reduced_nsolutions(problem);
        let Some(dreg) = degree_of_regularity_quadratic(n, m, Some(q)) else {
            return Some(CostSample::INFEASIBLE);
        };
        let ncols = binomial(n + dreg as u64 - 1, dreg as i64).max(1.0);
        Some(CostSample::new(
            groebner_tilde_o_time(n, m, q, self.w, nsolutions, self.h),
            2.0 * ncols.log2(),
        ))
    }
}
