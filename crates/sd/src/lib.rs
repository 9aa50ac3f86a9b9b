//! Syndrome decoding over F₂: problem family and information-set-decoding
//! algorithm plug-ins.

pub mod algorithms;
pub mod isd;
pub mod problem;
pub mod registry;

pub use problem::SdProblem;
pub use registry::{default_specs, sd_estimator};
