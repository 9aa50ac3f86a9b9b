//! Bit-complexity estimation framework for hard cryptographic problems.
//!
//! The core idea: a problem family declares its instance parameters and unit
//! conversions, attack algorithms plug in as pure cost functions over integer
//! tuning parameters, and a deterministic search loop minimises the
//! transformed time cost under a memory bound.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌───────────────┐
//! │  Estimator   │────▶│  Algorithm    │────▶│  Search loop  │
//! │  (façade)    │     │  (host+cache) │     │  (optimize)   │
//! └──────────────┘     └───────────────┘     └───────────────┘
//!                             │                      │
//!                      ┌──────┴──────┐        ┌──────┴──────┐
//!                      │ CostSpec    │        │ ParamRanges │
//!                      │ (plug-in)   │        │ (boxes)     │
//!                      └─────────────┘        └─────────────┘
//! ```
//!
//! # Key components
//!
//! - [`numerics`]: log₂-space combinatorics shared by all cost functions
//! - [`params::TuningSchema`]: declared tuning parameters of one algorithm
//! - [`algorithm::CostSpec`]: the plug-in capability set (schema, cost,
//!   validity, enumerator overrides)
//! - [`algorithm::Algorithm`]: hosts one plug-in, caches its optimum and
//!   applies the cost-model transforms
//! - [`estimator::Estimator`]: runs every applicable algorithm on one
//!   problem and packages a [`report::Report`]

pub mod algorithm;
pub mod config;
pub mod error;
pub mod estimator;
pub mod numerics;
pub mod params;
pub mod problem;
pub mod report;
mod search;

pub use algorithm::{Algorithm, Assignment, AuxMap, CostSample, CostSpec};
pub use config::{AlgorithmConfig, ComplexityType, MemoryAccess};
pub use error::{ConfigError, Result};
pub use estimator::{Estimator, EstimatorConfig};
pub use params::{ParamKind, ParamRanges, SearchRanges, TuningSchema};
pub use problem::Problem;
pub use report::{AlgorithmReport, EstimateBlock, Report};
