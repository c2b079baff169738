use thiserror::Error;

/// Errors that can occur during fixed-step integration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// A precondition on the inputs failed: non-positive or non-finite time
    /// step, non-finite ODE coefficient, zero step count, or a physical
    /// parameter without meaning (non-positive density, radius, or
    /// viscosity).
    #[error("invalid parameters: {reason}")]
    InvalidParameters { reason: &'static str },

    /// The integrator configuration failed validation.
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    /// The implicit update is undefined: the denominator `1 - dt·a` is zero
    /// or within the configured tolerance of zero.
    #[error("implicit update is singular: denominator {denominator} is within {tolerance} of zero")]
    SingularStep { denominator: f64, tolerance: f64 },
}
