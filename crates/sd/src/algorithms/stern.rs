//! Stern's collision decoding.

use crate::algorithms::optimal_r;
use crate::isd::{gaussian_elimination_complexity, list_merge_complexity, mem_matrix};
use crate::problem::SdProblem;
use cryptoforge_core::numerics::{binomial, log2_binomial};
use cryptoforge_core::{
    Assignment, AuxMap, CostSample, CostSpec, ParamKind, Problem, SearchRanges, TuningSchema,
};

/// Window width of the `l` search around `log2` of the base-list size.
const L_SEARCH_RADIUS: i64 = 10;

/// Expected weight distribution:
///
/// ```text
/// +-------------------------+---------+-------------+-------------+
/// | <----+ n - k - l +----> |<-- l -->|<--+ k/2 +-->|<--+ k/2 +-->|
/// |          w - 2p         |    0    |      p      |      p      |
/// +-------------------------+---------+-------------+-------------+
/// ```
pub struct Stern {
    schema: TuningSchema,
    hmap: bool,
}

impl Stern {
    pub fn new(problem: &SdProblem) -> Self {
        let (n, k, w) = problem.parameters();
        Self {
            schema: TuningSchema::new()
                .declare("r", 0, (n - k) as i64, ParamKind::Independent)
                .declare("l", 0, ((n - k) as i64).min(400), ParamKind::Joint)
                .declare("p", 0, ((w / 2) as i64).min(20), ParamKind::Joint),
            hmap: true,
        }
    }

    pub fn with_hmap(mut self, hmap: bool) -> Self {
        self.hmap = hmap;
        self
    }
}

impl CostSpec<SdProblem> for Stern {
    fn name(&self) -> &'static str {
        "Stern"
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

    fn are_parameters_invalid(&self, problem: &SdProblem, params: &Assignment<'_>) -> bool {
        let (n, k, w) = problem.parameters();
        let (n, k, w) = (n as i64, k as i64, w as i64);
        let p = params.get("p");
        let l = params.get("l");
        let k1 = k / 2;
        p > w / 2 || k1 < p || n - k - l < w - 2 * p
    }

    /// Searches even `p` only, and `l` in a window around the point where
    /// the merge balances, which is where the optimum always lies.
    fn valid_choices<'a>(
        &'a self,
        problem: &'a SdProblem,
        ranges: &'a SearchRanges<'a>,
    ) -> Option<Box<dyn Iterator<Item = Vec<i64>> + 'a>> {
        let (_, k, _) = problem.parameters();
        let k1 = (k / 2) as i64;
        let (p_min, p_max) = ranges.get("p");
        let (l_min, l_max) = ranges.get("l");
        let (r_val, _) = ranges.get("r");
        let iter = (p_min..=p_max.min(k1))
            .step_by(2)
            .flat_map(move |p| {
                let base_list = binomial(k1 as u64, p);
                let l_mid = if base_list >= 1.0 {
                    base_list.log2() as i64
                } else {
                    0
                };
                let lo = l_min.max(l_mid - L_SEARCH_RADIUS);
                let hi = l_max.min(l_mid + L_SEARCH_RADIUS);
                (lo..=hi).map(move |l| vec![r_val, l, p])
            });
        Some(Box::new(iter))
    }

    fn cost(
        &self,
        problem: &SdProblem,
        params: &Assignment<'_>,
        aux: Option<&mut AuxMap>,
    ) -> CostSample {
        let (n, k, w) = problem.parameters();
        let r = params.get("r");
        let p = params.get("p");
        let l = params.get("l");
        let k1 = k / 2;

        let base_list = binomial(k1, p);
        let memory = (2.0 * base_list + mem_matrix(n, k, r)).log2();
        if memory > problem.memory_bound() {
            return CostSample::INFEASIBLE;
        }

        let permutations = (log2_binomial(n, w as i64)
            - log2_binomial(n - k, w as i64 - 2 * p)
            - 2.0 * log2_binomial(k1, p)
            - problem.nsolutions())
        .max(0.0);

        // Projections needed by the Indyk-Motwani style matching on l bits,
        // reduced when several solutions with the right weight split exist.
        let remaining_solutions = ((binomial(n - k, w as i64 - 2 * p)
            * base_list
            * base_list
            * binomial(n, w as i64)
            / 2f64.powi((n - k) as i32))
        .floor()
            / binomial(n, w as i64))
        .floor();
        let l_window = ((n - k) as i64 - l).max(0) as u64;
        let mut l_part_iterations =
            (binomial(n - k, w as i64 - 2 * p) / binomial(l_window, w as i64 - 2 * p)).floor();
        if remaining_solutions > 0.0 {
            l_part_iterations = (l_part_iterations / remaining_solutions.max(1.0)).floor();
            l_part_iterations = l_part_iterations.max(1.0);
        }

        let gauss = gaussian_elimination_complexity(n, k, r);
        let time = permutations
            + (gauss + list_merge_complexity(base_list, l, self.hmap) * l_part_iterations).log2();

        if let Some(aux) = aux {
            aux.insert("permutations".to_string(), serde_json::json!(permutations));
            aux.insert("gauss".to_string(), serde_json::json!(gauss.log2()));
            aux.insert(
                "lists".to_string(),
                serde_json::json!([base_list.log2(), 2.0 * base_list.log2() - l as f64]),
            );
        }

        CostSample::new(time, memory)
    }
}
