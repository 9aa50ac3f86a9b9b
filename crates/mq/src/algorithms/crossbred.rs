//! Crossbred preprocessing-plus-linearization solving.

use crate::algorithms::reduced_parameters;
use crate::problem::MqProblem;
use crate::series::{HilbertSeries, NMonomialSeries};
use cryptoforge_core::numerics::binomial;
use cryptoforge_core::{
    Assignment, AuxMap, CostSample, CostSpec, ParamKind, SearchRanges, TuningSchema,
};

/// Finds degree-`D` combinations whose specialisations in the last `k`
/// variables have degree at most `d`, then linearises the specialised
/// systems. The admissibility of `(k, D, d)` follows the dimension count
/// over the Hilbert and monomial series.
pub struct Crossbred {
    schema: TuningSchema,
    w: f64,
    h: u64,
    max_d: i64,
}

impl Crossbred {
    pub fn new(problem: &MqProblem) -> Self {
        let (n_full, m_full, _) = problem.parameters();
        let max_d = 30.min(n_full.min(m_full)) as i64;
        let (n, _, _) = reduced_parameters(problem, 0);
        Self {
            schema: TuningSchema::new()
                .declare("k", 1, n as i64, ParamKind::Joint)
                .declare("D", 2, max_d, ParamKind::Joint)
                .declare("d", 1, n as i64, ParamKind::Joint),
            // Strassen-range elimination on the dense Macaulay blocks.
            w: 2.81,
            h: 0,
            max_d,
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

    /// The preprocessing degree needs room between the quadratic input
    /// and the linearised output.
    pub fn applies_to(problem: &MqProblem) -> bool {
        problem.nvariables().min(problem.npolynomials()) >= 2
    }

    /// Columns eliminated in the preprocessing step: monomials of degree
    /// above `d` in the kept variables times anything in the rest.
    fn ncols_in_preprocessing_step(&self, problem: &MqProblem, k: i64, big_d: i64, d: i64) -> f64 {
        let (n, _, q) = reduced_parameters(problem, self.h);
        let kept = NMonomialSeries::new(k as u64, Some(q), big_d as usize + 1);
        let rest = NMonomialSeries::new(n - k as u64, Some(q), big_d as usize + 1);
        let mut ncols = 0.0;
        for dk in (d + 1)..=big_d {
            ncols += kept.nmonomials_of_degree(dk as usize)
                * rest.nmonomials_up_to_degree((big_d - dk) as usize);
        }
        ncols
    }

    /// Columns of the linearised specialised system.
    fn ncols_in_linearization_step(&self, problem: &MqProblem, k: i64, d: i64) -> f64 {
        let (_, _, q) = reduced_parameters(problem, self.h);
        NMonomialSeries::new(k as u64, Some(q), d as usize + 1)
            .nmonomials_up_to_degree(d as usize)
    }
}

impl CostSpec<MqProblem> for Crossbred {
    fn name(&self) -> &'static str {
        "Crossbred"
    }

    fn schema(&self) -> &TuningSchema {
        &self.schema
    }

    /// Admissible `(k, D, d)` triples: the dimension count of degree-`D`
    /// combinations surviving the specialisation must be non-negative.
    fn valid_choices<'a>(
        &'a self,
        problem: &'a MqProblem,
        ranges: &'a SearchRanges<'a>,
    ) -> Option<Box<dyn Iterator<Item = Vec<i64>> + 'a>> {
        let (n, m, q) = reduced_parameters(problem, self.h);
        let (k_min, k_max) = ranges.get("k");
        let (d_cap_min, d_cap_max) = ranges.get("D");
        let (d_min, d_max) = ranges.get("d");
        let full = HilbertSeries::new(n, &vec![2; m as usize], Some(q));

        let iter = (k_min..=k_max).flat_map(move |k| {
            let kept = HilbertSeries::new(k as u64, &vec![2; m as usize], Some(q));
            let dreg_kept = kept
                .first_nonpositive()
                .unwrap_or_else(|| kept.precision());
            let rest =
                NMonomialSeries::new(n - k as u64, Some(q), self.max_d as usize + 1);
            let mut admissible = Vec::new();
            for big_d in 2..=self.max_d {
                for d in 1..(dreg_kept as i64).min(big_d) {
                    let mut count: i128 = 0;
                    for i in 0..=d {
                        count = count.saturating_add(
                            kept.coefficient(i as usize).saturating_mul(
                                rest.nmonomials_up_to_degree_exact((big_d - i) as usize),
                            ),
                        );
                    }
                    let surviving = count
                        - full.coefficient_up_to(big_d as usize)
                        - kept.coefficient_up_to(d as usize);
                    if surviving >= 0
                        && (d_cap_min..=d_cap_max).contains(&big_d)
                        && (d_min..=d_max).contains(&d)
                    {
                        admissible.push(vec![k, big_d, d]);
                    }
                }
            }
            admissible
        });
        Some(Box::new(iter))
    }

    fn cost(
        &self,
        problem: &MqProblem,
        params: &Assignment<'_>,
        aux: Option<&mut AuxMap>,
    ) -> CostSample {
        let (n, m, q) = reduced_parameters(problem, self.h);
        let k = params.get("k");
        let big_d = params.get("D");
        let d = params.get("d");
        if d >= big_d {
            return CostSample::INFEASIBLE;
        }
        let np = self.ncols_in_preprocessing_step(problem, k, big_d, d);
        let nl = self.ncols_in_linearization_step(problem, k, d);
        if np <= 2.0 {
            return CostSample::INFEASIBLE;
        }
        let qf = q as f64;
        let wiedemann =
            3.0 * binomial((k + d) as u64, d) * binomial(n + 2, 2) * np * np;
        let gaussian = np.powf(self.w);
        let preprocessing = wiedemann.min(gaussian);
        let linearization = m as f64 * qf.powi((n - k as u64) as i32) * nl.powf(self.w);
        let time = (preprocessing + linearization).log2() + self.h as f64 * qf.log2();
        let memory = (np * np + nl * nl).log2();

        if let Some(aux) = aux {
            aux.insert(
                "preprocessing_columns".to_string(),
                serde_json::json!(np.log2()),
            );
            aux.insert(
                "linearization_columns".to_string(),
                serde_json::json!(nl.log2()),
            );
        }
        CostSample::new(time, memory)
    }

    fn tilde_o_cost(&self, problem: &MqProblem, params: &Assignment<'_>) -> Option<CostSample> {
        let (n, _, q) = reduced_parameters(problem, self.h);
        let k = params.get("k");
        let big_d = params.get("D");
        let d = params.get("d");
        if d >= big_d {
            return Some(CostSample::INFEASIBLE);
        }
        let np = self.ncols_in_preprocessing_step(problem, k, big_d, d);
        let nl = self.ncols_in_linearization_step(problem, k, d);
        let qf = q as f64;
        let time = (np * np + qf.powi((n - k as u64) as i32) * nl.powf(self.w)).log2()
            + self.h as f64 * qf.log2();
        let memory = (np * np + nl * nl).log2();
        Some(CostSample::new(time, memory))
    }
}
