//! Lokshtanov et al.'s probabilistic polynomial-method solver.

use crate::algorithms::reduced_parameters;
use crate::problem::MqProblem;
use crate::series::NMonomialSeries;
use cryptoforge_core::{
    Assignment, AuxMap, CostSample, CostSpec, ParamKind, TuningSchema,
};

/// Splits off `l = delta * n` variables and tests consistency of the
/// remaining system via a probabilistic polynomial evaluation. The tuning
/// parameter is the integer numerator `l`; the fraction `delta = l / n` is
/// reported in the verbose channel.
pub struct Lokshtanov {
    schema: TuningSchema,
    h: u64,
}

impl Lokshtanov {
    pub fn new(problem: &MqProblem) -> Self {
        let (n, _, _) = reduced_parameters(problem, 0);
        Self {
            schema: TuningSchema::new().declare("l", 1, (n as i64 - 1).max(1), ParamKind::Joint),
            h: 0,
        }
    }

    pub fn with_hybridization(mut self, h: u64) -> Self {
        self.h = h;
        self
    }

    /// The consistency tables blow up in the field order.
    pub fn applies_to(problem: &MqProblem) -> bool {
        problem.order_of_the_field() <= 1024
    }

    /// One consistency-check pass on `nn` variables.
    fn consistency_cost(nn: u64, delta: f64, q: u64) -> f64 {
        let split = (delta * nn as f64).floor() as u64;
        let resulting_degree = 2 * (q - 1) * (split + 2);
        let monomials = monomials_up_to(nn - split, q, resulting_degree);
        let qf = q as f64;
        let nf = nn as f64;
        nf * (qf.powi((nn - split) as i32)
            + monomials * qf.powi(split as i32) * nf.powi((6 * q) as i32))
    }
}

/// Monomials of degree at most `degree` in `vars` variables over F_q; past
/// the maximal total degree `(q - 1) * vars` the count is `q^vars`.
fn monomials_up_to(vars: u64, q: u64, degree: u64) -> f64 {
    if degree >= (q - 1) * vars {
        return (q as f64).powi(vars as i32);
    }
    NMonomialSeries::new(vars, Some(q), degree as usize + 1)
        .nmonomials_up_to_degree(degree as usize)
}

impl CostSpec<MqProblem> for Lokshtanov {
    fn name(&self) -> &'static str {
        "Lokshtanov"
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
        let (n, _, q) = reduced_parameters(problem, self.h);
        let l = params.get("l");
        let delta = l as f64 / n as f64;
        let qf = q as f64;

        let mut passes = 0.0;
        for i in 1..n {
            passes += Self::consistency_cost(n - i, delta, q);
        }
        let time = (100.0 * qf.log2() * (qf - 1.0) * passes).log2()
            + self.h as f64 * qf.log2();

        let split = (delta * n as f64).floor() as u64;
        let resulting_degree = 2 * (q - 1) * (split + 2);
        let monomials = monomials_up_to(n - split, q, resulting_degree);
        let memory =
            (monomials + (n as f64).log2() * qf.powi((n - split) as i32)).log2();

        if let Some(aux) = aux {
            aux.insert("delta".to_string(), serde_json::json!(delta));
        }
        CostSample::new(time, memory)
    }
}
