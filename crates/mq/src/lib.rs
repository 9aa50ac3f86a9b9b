//! Multivariate quadratic systems over F_q: problem family and algebraic
//! solving algorithm plug-ins.

pub mod algorithms;
pub mod problem;
pub mod registry;
pub mod series;
pub mod witness;

pub use problem::MqProblem;
pub use registry::{default_specs, mq_estimator};
