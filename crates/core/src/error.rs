use thiserror::Error;

/// Errors raised synchronously by the declarative layer (problem
/// construction, range setting, parameter fixing).
///
/// Infeasible or not-implemented cost results are never errors; they
/// surface as `f64::INFINITY` in complexities and reports.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid problem parameter: {0}")]
    InvalidProblem(String),

    #[error("`{0}` is not a tuning parameter of this algorithm")]
    UnknownParameter(String),

    #[error("empty range for `{name}`: {min} > {max}")]
    EmptyRange { name: String, min: i64, max: i64 },

    #[error("values for the parameters {0:?} must be provided")]
    MissingParameters(Vec<String>),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
