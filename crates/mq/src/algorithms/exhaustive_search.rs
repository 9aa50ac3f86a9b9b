//! Exhaustive evaluation of all assignments.

use crate::algorithms::{reduced_nsolutions, reduced_parameters};
use crate::problem::MqProblem;
use cryptoforge_core::{Assignment, AuxMap, CostSample, CostSpec, TuningSchema};

/// Fast enumeration over F_q^n with early aborts, generalising the
/// Bouillaguet et al. bitsliced bound to arbitrary fields.
pub struct ExhaustiveSearch {
    schema: TuningSchema,
    h: u64,
}

impl ExhaustiveSearch {
    pub fn new(_problem: &MqProblem) -> Self {
        Self {
            schema: TuningSchema::new(),
            h: 0,
        }
    }

    pub fn with_hybridization(mut self, h: u64) -> Self {
        self.h = h;
        self
    }

    pub fn applies_to(_problem: &MqProblem) -> bool {
        true
    }
}

impl CostSpec<MqProblem> for ExhaustiveSearch {
    fn name(&self) -> &'static str {
        "ExhaustiveSearch"
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
        let (nf, qf) = (n as f64, q as f64);
        let nsolutions = 2f64.powf(reduced_nsolutions(problem));

        let mut time = nf * qf.log2();
        if q == 2 {
            time += (4.0 * nf.log2()).log2();
        } else {
            time += (nf.ln() / qf.ln()).log2();
        }
        time -= (nsolutions + 1.0).log2();
        time += self.h as f64 * qf.log2();

        let memory = ((m * n * n) as f64).log2();
        CostSample::new(time, memory)
    }

    fn tilde_o_cost(&self, problem: &MqProblem, _params: &Assignment<'_>) -> Option<CostSample> {
        let (n, _, q) = reduced_parameters(problem, self.h);
        Some(CostSample::new(n as f64 * (q as f64).log2(), 0.0))
    }
}
