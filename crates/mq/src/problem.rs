//! The multivariate quadratic problem over a finite field.

use cryptoforge_core::numerics::is_prime_power;
use cryptoforge_core::{ConfigError, Problem};

/// An MQ instance: `m` quadratic polynomials in `n` variables over F_q.
///
/// The native time unit is one field multiplication. With the conversion
/// exponent `theta` set, a multiplication costs `log2(q)^theta` binary
/// operations; with `theta = None` it costs `2 log2(q)^2 + log2(q)` (the
/// schoolbook circuit). Elements store `ceil(log2 q)` bits.
#[derive(Debug, Clone)]
pub struct MqProblem {
    n: u64,
    m: u64,
    q: u64,
    theta: Option<f64>,
    nsolutions: f64,
    memory_bound: f64,
}

impl MqProblem {
    pub fn new(n: u64, m: u64, q: u64) -> Result<Self, ConfigError> {
        if n < 1 {
            return Err(ConfigError::InvalidProblem("n must be >= 1".to_string()));
        }
        if m < 1 {
            return Err(ConfigError::InvalidProblem("m must be >= 1".to_string()));
        }
        if !is_prime_power(q) {
            return Err(ConfigError::InvalidProblem(
                "q must be a prime power".to_string(),
            ));
        }
        let mut problem = Self {
            n,
            m,
            q,
            theta: Some(2.0),
            nsolutions: 0.0,
            memory_bound: f64::INFINITY,
        };
        problem.nsolutions = problem.expected_number_solutions();
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

    /// Sets the conversion exponent; `None` selects the schoolbook circuit.
    pub fn with_theta(mut self, theta: Option<f64>) -> Result<Self, ConfigError> {
        if let Some(t) = theta {
            if !(0.0..=2.0).contains(&t) {
                return Err(ConfigError::InvalidProblem(
                    "theta must be either None or in the range 0 <= theta <= 2".to_string(),
                ));
            }
        }
        self.theta = theta;
        Ok(self)
    }

    pub fn parameters(&self) -> (u64, u64, u64) {
        (self.n, self.m, self.q)
    }

    pub fn nvariables(&self) -> u64 {
        self.n
    }

    pub fn npolynomials(&self) -> u64 {
        self.m
    }

    pub fn order_of_the_field(&self) -> u64 {
        self.q
    }

    pub fn is_overdefined_system(&self) -> bool {
        self.m > self.n
    }

    pub fn is_underdefined_system(&self) -> bool {
        self.n > self.m
    }

    pub fn is_square_system(&self) -> bool {
        self.n == self.m
    }

    /// `max(0, log2(q) * (n - m))`.
    pub fn expected_number_solutions(&self) -> f64 {
        ((self.q as f64).log2() * (self.n as f64 - self.m as f64)).max(0.0)
    }
}

impl Problem for MqProblem {
    fn memory_bound(&self) -> f64 {
        self.memory_bound
    }

    fn nsolutions(&self) -> f64 {
        self.nsolutions
    }

    fn to_bitcomplexity_time(&self, basic_operations: f64) -> f64 {
        let lq = (self.q as f64).log2();
        match self.theta {
            Some(theta) => basic_operations + theta * lq.log2(),
            None => basic_operations + (2.0 * lq * lq + lq).log2(),
        }
    }

    fn to_bitcomplexity_memory(&self, elements_to_store: f64) -> f64 {
        elements_to_store + (self.q as f64).log2().ceil().log2()
    }
}
