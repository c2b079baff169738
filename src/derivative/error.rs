use thiserror::Error;

/// Errors that can occur when estimating a derivative.
///
/// The type is generic over the error of the caller-supplied
/// [`ScalarFunction`](super::ScalarFunction): evaluation failures are
/// carried as a source without interpretation.
#[derive(Debug, Error)]
pub enum Error<E> {
    /// The step size was zero, NaN, or infinite.
    #[error("step size must be finite and nonzero, got {dx}")]
    InvalidStepSize { dx: f64 },

    /// The function failed at one of the sample points.
    #[error("function evaluation failed")]
    Function(#[source] E),
}
