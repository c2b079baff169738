//! Finite-difference estimation of the derivative of a scalar function.
//!
//! All three schemes share one algorithmic shape: the difference of two
//! function evaluations divided by the span between the sample points.
//! [`estimate`] dispatches on the [`DifferenceScheme`] tag to select the
//! sample points and the span, so the error handling and accuracy contract
//! live in a single routine.

mod error;
mod scheme;

pub use error::Error;
pub use scheme::DifferenceScheme;

use std::convert::Infallible;

/// A scalar function of one real variable.
///
/// Any closure or function pointer with signature `Fn(f64) -> f64` is a
/// `ScalarFunction` with `Error = Infallible`.
/// Implement the trait directly for functions that can fail, such as those
/// with a restricted domain; their errors propagate unmodified through
/// [`estimate`] as [`Error::Function`].
pub trait ScalarFunction {
    /// The error type returned if evaluation fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at `x`.
    fn eval(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> ScalarFunction for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn eval(&self, x: f64) -> Result<f64, Infallible> {
        Ok(self(x))
    }
}

/// Estimates the derivative of `g` at `x0` using a finite difference.
///
/// The scheme determines which two points are sampled and the accuracy
/// order of the result:
///
/// ```text
///   Forward:  (g(x0 + dx) - g(x0)) / dx
///   Backward: (g(x0) - g(x0 - dx)) / dx
///   Central:  (g(x0 + dx) - g(x0 - dx)) / (2 * dx)
/// ```
///
/// The central scheme samples symmetrically around `x0`, which cancels the
/// leading truncation term and yields second-order accuracy.
///
/// # Errors
///
/// - [`Error::InvalidStepSize`] if `dx` is zero, NaN, or infinite.
/// - [`Error::Function`] if `g` fails at either sample point.
pub fn estimate<G>(
    g: &G,
    x0: f64,
    dx: f64,
    scheme: DifferenceScheme,
) -> Result<f64, Error<G::Error>>
where
    G: ScalarFunction,
{
    if dx == 0.0 || !dx.is_finite() {
        return Err(Error::InvalidStepSize { dx });
    }

    let (upper, lower, span) = match scheme {
        DifferenceScheme::Forward => (x0 + dx, x0, dx),
        DifferenceScheme::Backward => (x0, x0 - dx, dx),
        DifferenceScheme::Central => (x0 + dx, x0 - dx, 2.0 * dx),
    };

    let high = g.eval(upper).map_err(Error::Function)?;
    let low = g.eval(lower).map_err(Error::Function)?;

    Ok((high - low) / span)
}

/// Estimates the derivative of `g` at each point in `xs`.
///
/// Applies the scalar rule independently and elementwise, preserving the
/// order and length of the input.
/// Stops at the first failing evaluation.
///
/// # Errors
///
/// Same conditions as [`estimate`].
pub fn estimate_over_range<G>(
    g: &G,
    xs: &[f64],
    dx: f64,
    scheme: DifferenceScheme,
) -> Result<Vec<f64>, Error<G::Error>>
where
    G: ScalarFunction,
{
    xs.iter().map(|&x0| estimate(g, x0, dx, scheme)).collect()
}
