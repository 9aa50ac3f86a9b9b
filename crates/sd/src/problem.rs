//! The binary syndrome decoding problem.

use cryptoforge_core::numerics::log2_binomial;
use cryptoforge_core::{ConfigError, Problem};

/// A syndrome decoding instance over F₂: code length `n`, dimension `k`,
/// error weight `w`.
///
/// The native time unit is one vector addition on `n` coordinates, so a
/// basic operation costs `n` bit operations; basic elements are `n`-bit
/// vectors as well, making both unit conversions `x + log2(n)`.
#[derive(Debug, Clone)]
pub struct SdProblem {
    n: u64,
    k: u64,
    w: u64,
    nsolutions: f64,
    memory_bound: f64,
}

impl SdProblem {
    pub fn new(n: u64, k: u64, w: u64) -> Result<Self, ConfigError> {
        if k > n {
            return Err(ConfigError::InvalidProblem(
                "k must be smaller or equal to n".to_string(),
            ));
        }
        if w > n - k {
            return Err(ConfigError::InvalidProblem(
                "w must be smaller or equal to n-k".to_string(),
            ));
        }
        if w == 0 || k == 0 {
            return Err(ConfigError::InvalidProblem(
                "w and k must be at least 1".to_string(),
            ));
        }
        let mut problem = Self {
            n,
            k,
            w,
            nsolutions: 0.0,
            memory_bound: f64::INFINITY,
        };
        problem.nsolutions = problem.expected_number_solutions().max(0.0);
        Ok(problem)
    }

    pub fn with_memory_bound(mut self, memory_bound: f64) -> Self {
        self.memory_bound = memory_bound;
        self
    }

    pub fn with_nsolutions(mut self, nsolutions: f64) -> Self {
        self.nsolutions = nsolutions;
        self
    }

    pub fn parameters(&self) -> (u64, u64, u64) {
        (self.n, self.k, self.w)
    }

    /// log₂ of the expected number of solutions, `log2(C(n, w)) - (n - k)`.
    pub fn expected_number_solutions(&self) -> f64 {
        log2_binomial(self.n, self.w as i64) - (self.n - self.k) as f64
    }
}

impl Problem for SdProblem {
    fn memory_bound(&self) -> f64 {
        self.memory_bound
    }

    fn nsolutions(&self) -> f64 {
        self.nsolutions
    }

    fn to_bitcomplexity_time(&self, basic_operations: f64) -> f64 {
        basic_operations + (self.n as f64).log2()
    }

    fn to_bitcomplexity_memory(&self, elements_to_store: f64) -> f64 {
        self.to_bitcomplexity_time(elements_to_store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_inconsistent_parameters() {
        assert!(SdProblem::new(100, 101, 10).is_err());
        assert!(SdProblem::new(100, 50, 51).is_err());
        assert!(SdProblem::new(100, 0, 10).is_err());
        assert!(SdProblem::new(100, 50, 0).is_err());
    }

    #[test]
    fn test_nsolutions_clamped_at_zero() {
        let problem = SdProblem::new(100, 50, 10).unwrap();
        // log2(C(100,10)) ~ 43.98 < 50, so no solutions are expected.
        assert_eq!(problem.nsolutions(), 0.0);
        let dense = SdProblem::new(100, 90, 10).unwrap();
        assert!(dense.nsolutions() > 0.0);
    }

    #[test]
    fn test_unit_conversion_adds_log_n() {
        let problem = SdProblem::new(1024, 512, 50).unwrap();
        assert!((problem.to_bitcomplexity_time(20.0) - 30.0).abs() < 1e-12);
        assert!((problem.to_bitcomplexity_memory(20.0) - 30.0).abs() < 1e-12);
    }
}
