//! The problem-family capability set.

/// One concrete instance of a hard problem (fixed parameters, memory bound,
/// expected solution count) together with its unit conversions.
///
/// All quantities are base-2 logarithms. The conversions map an
/// algorithm's native units ("basic operations" for time, "basic elements"
/// for memory) into bit operations and stored bits; both must be pure.
pub trait Problem {
    /// Ceiling on the memory complexity accepted during the search.
    fn memory_bound(&self) -> f64 {
        f64::INFINITY
    }

    /// log₂ of the expected number of solutions.
    fn nsolutions(&self) -> f64;

    /// Bit operations per `basic_operations` basic operations (both log₂).
    fn to_bitcomplexity_time(&self, basic_operations: f64) -> f64;

    /// Stored bits per `elements_to_store` basic elements (both log₂).
    fn to_bitcomplexity_memory(&self, elements_to_store: f64) -> f64;
}
