//! Cost-model configuration shared by algorithms and estimators.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Which cost transform the framework applies around the pure cost function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplexityType {
    /// Concrete operation counts with polynomial factors.
    Estimate,
    /// Asymptotic Õ cost with polylog factors stripped.
    TildeO,
}

/// Additive time penalty as a function of the (log₂) memory complexity.
#[derive(Clone, Default)]
pub enum MemoryAccess {
    #[default]
    Constant,
    Logarithmic,
    SquareRoot,
    CubeRoot,
    /// User-supplied penalty taking the log₂ of the total memory usage.
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl MemoryAccess {
    /// Penalty added to the log₂ time for `memory` (a log₂ quantity).
    pub fn cost(&self, memory: f64) -> f64 {
        match self {
            MemoryAccess::Constant => 0.0,
            MemoryAccess::Logarithmic => {
                if memory > 0.0 {
                    memory.log2()
                } else {
                    0.0
                }
            }
            MemoryAccess::SquareRoot => memory / 2.0,
            MemoryAccess::CubeRoot => memory / 3.0,
            MemoryAccess::Custom(f) => f(memory),
        }
    }
}

impl fmt::Debug for MemoryAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryAccess::Constant => write!(f, "Constant"),
            MemoryAccess::Logarithmic => write!(f, "Logarithmic"),
            MemoryAccess::SquareRoot => write!(f, "SquareRoot"),
            MemoryAccess::CubeRoot => write!(f, "CubeRoot"),
            MemoryAccess::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Per-algorithm configuration block.
#[derive(Debug, Clone)]
pub struct AlgorithmConfig {
    pub complexity_type: ComplexityType,
    /// Route complexities through the problem's unit conversions into bits.
    pub bit_complexities: bool,
    pub memory_access: MemoryAccess,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            complexity_type: ComplexityType::Estimate,
            bit_complexities: true,
            memory_access: MemoryAccess::Constant,
        }
    }
}
