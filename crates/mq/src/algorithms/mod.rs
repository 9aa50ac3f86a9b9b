//! Algebraic MQ-solving algorithm plug-ins.

pub mod boolean_solve_fxl;
pub mod crossbred;
pub mod exhaustive_search;
pub mod f5;
pub mod hybrid_f5;
pub mod lokshtanov;

pub use boolean_solve_fxl::BooleanSolveFxl;
pub use crossbred::Crossbred;
pub use exhaustive_search::ExhaustiveSearch;
pub use f5::F5;
pub use hybrid_f5::HybridF5;
pub use lokshtanov::Lokshtanov;

use crate::problem::MqProblem;
use cryptoforge_core::Problem;

/// `(n, m, q)` after the Thomae-Wolf reduction of underdefined systems and
/// `h` rounds of external hybridization. The reduction leaves a square
/// system, so hybridization shrinks both counts.
pub(crate) fn reduced_parameters(problem: &MqProblem, h: u64) -> (u64, u64, u64) {
    let (n, m, q) = problem.parameters();
    if n > m {
        let alpha = n / m;
        let reduced = if m as i64 - alpha as i64 + 1 > 1 {
            m - alpha + 1
        } else {
            m
        };
        (reduced - h, reduced - h, q)
    } else {
        (n - h, m, q)
    }
}

/// Underdefined systems lose their solution surplus in the reduction.
pub(crate) fn reduced_nsolutions(problem: &MqProblem) -> f64 {
    if problem.is_underdefined_system() {
        0.0
    } else {
        problem.nsolutions()
    }
}
