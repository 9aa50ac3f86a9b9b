//! Ball-collision decoding.

use crate::algorithms::optimal_r;
use crate::isd::{gaussian_elimination_complexity, list_merge_complexity, mem_matrix};
use crate::problem::SdProblem;
use cryptoforge_core::numerics::{binomial, log2_binomial};
use cryptoforge_core::{
    Assignment, AuxMap, CostSample, CostSpec, ParamKind, Problem, SearchRanges, TuningSchema,
};

/// Expected weight distribution:
///
/// ```text
/// +------------------+---------+---------+-------------+-------------+
/// | <-+ n - k - l +->|<- l/2 ->|<- l/2 ->|<--+ k/2 +-->|<--+ k/2 +-->|
/// |    w - 2p - 2pl  |   pl    |   pl    |      p      |      p      |
/// +------------------+---------+---------+-------------+-------------+
/// ```
pub struct BallCollision {
    schema: TuningSchema,
    hmap: bool,
}

impl BallCollision {
    pub fn new(problem: &SdProblem) -> Self {
        let (n, k, w) = problem.parameters();
        Self {
            schema: TuningSchema::new()
                .declare("r", 0, (n - k) as i64, ParamKind::Independent)
                .declare("l", 0, ((n - k) as i64).min(300), ParamKind::Joint)
                .declare("p", 0, (w / 2) as i64, ParamKind::Joint)
                .declare("pl", 0, (w as i64).min(10), ParamKind::Joint),
            hmap: true,
        }
    }

    pub fn with_hmap(mut self, hmap: bool) -> Self {
        self.hmap = hmap;
        self
    }
}

impl CostSpec<SdProblem> for BallCollision {
    fn name(&self) -> &'static str {
        "BallCollision"
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
        let pl = params.get("pl");
        let k1 = k / 2;
        p > w / 2
            || k1 < p
            || pl > l / 2
            || n - k - l < w - 2 * p - 2 * pl
            || w < 2 * p + 2 * pl
    }

    fn valid_choices<'a>(
        &'a self,
        problem: &'a SdProblem,
        ranges: &'a SearchRanges<'a>,
    ) -> Option<Box<dyn Iterator<Item = Vec<i64>> + 'a>> {
        let (n, k, w) = problem.parameters();
        let (n, k, w) = (n as i64, k as i64, w as i64);
        let (p_min, p_max) = ranges.get("p");
        let (l_min, l_max) = ranges.get("l");
        let (pl_min, pl_max) = ranges.get("pl");
        let (r_val, _) = ranges.get("r");
        let start_p = p_min + p_min % 2;
        let iter = (start_p..=p_max.min(w / 2)).step_by(2).flat_map(move |p| {
            let l_hi = l_max.min(n - k - (w - 2 * p));
            (l_min..=l_hi).flat_map(move |l| {
                let pl_hi = pl_max.min(l / 2).min((w - 2 * p) / 2);
                (pl_min..=pl_hi).map(move |pl| vec![r_val, l, p, pl])
            })
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
        let pl = params.get("pl");
        let k1 = k / 2;

        let base_list = binomial(k1, p) * binomial((l / 2).max(0) as u64, pl).max(1.0);
        let memory = (2.0 * base_list + mem_matrix(n, k, r)).log2();
        if memory > problem.memory_bound() {
            return CostSample::INFEASIBLE;
        }

        let l_window = ((n - k) as i64 - l).max(0) as u64;
        let permutations = (log2_binomial(n, w as i64)
            - log2_binomial(l_window, w as i64 - 2 * p - 2 * pl)
            - 2.0 * log2_binomial(k1, p)
            - 2.0 * log2_binomial((l / 2).max(0) as u64, pl)
            - problem.nsolutions())
        .max(0.0);

        let gauss = gaussian_elimination_complexity(n, k, r);
        let time =
            permutations + (gauss + list_merge_complexity(base_list, l, self.hmap)).log2();

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
