//! Information-set-decoding algorithm plug-ins.

pub mod ball_collision;
pub mod dumer;
pub mod prange;
pub mod stern;

pub use ball_collision::BallCollision;
pub use dumer::Dumer;
pub use prange::Prange;
pub use stern::Stern;

use crate::isd::optimize_m4ri;
use crate::problem::SdProblem;
use cryptoforge_core::Problem;

/// Shared closed-form optimum of the Gaussian-elimination block size `r`.
pub(crate) fn optimal_r(problem: &SdProblem) -> i64 {
    let (n, k, _) = problem.parameters();
    optimize_m4ri(n, k, problem.memory_bound() - ((n - k) as f64).log2())
}
