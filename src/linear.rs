//! Fixed-step time integration of the scalar linear ODE `dv/dt = a·v + b`.
//!
//! Two update rules are provided, selected by [`StepMode`]:
//!
//! ```text
//!   Explicit (forward Euler):  v_next = v + dt * (a * v + b)
//!   Implicit (backward Euler): v_next = (v + dt * b) / (1 - dt * a)
//! ```
//!
//! The explicit rule evaluates the right-hand side at the known time level
//! and is only non-amplifying while `|1 + dt·a| <= 1`; with a larger step
//! it oscillates or diverges.
//! That behavior is a property of the scheme, not a defect, and is covered
//! by tests rather than suppressed.
//! The implicit rule evaluates the right-hand side at the unknown time
//! level and solves for it algebraically, which for this linear equation
//! reduces to a single division.

mod config;
mod error;
mod series;

pub use config::Config;
pub use error::Error;
pub use series::TimeSeries;

/// Coefficients of the scalar linear ODE `dv/dt = a·v + b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearOde {
    pub a: f64,
    pub b: f64,
}

impl LinearOde {
    /// Creates the ODE `dv/dt = a·v + b`.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Validates that both coefficients are finite.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending coefficient.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.a.is_finite() {
            return Err("coefficient a must be finite");
        }
        if !self.b.is_finite() {
            return Err("coefficient b must be finite");
        }
        Ok(())
    }

    /// The value of `v` at which `dv/dt = 0`, or `None` when `a` is zero.
    #[must_use]
    pub fn equilibrium(&self) -> Option<f64> {
        (self.a != 0.0).then(|| -self.b / self.a)
    }

    /// The largest time step for which the explicit update does not amplify
    /// deviations from equilibrium, from the bound `|1 + dt·a| <= 1`.
    ///
    /// Returns `None` when `a >= 0`, where no finite step satisfies the
    /// bound.
    #[must_use]
    pub fn explicit_stability_limit(&self) -> Option<f64> {
        (self.a < 0.0).then(|| -2.0 / self.a)
    }
}

/// Selects which time level the right-hand side is evaluated at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    /// Forward Euler: the right-hand side uses the known value `v(t)`.
    ///
    /// First-order accurate and conditionally stable; see
    /// [`LinearOde::explicit_stability_limit`].
    Explicit,

    /// Backward Euler: the right-hand side uses the unknown value
    /// `v(t + dt)`, solved for algebraically.
    ///
    /// First-order accurate and unconditionally stable for decaying
    /// problems (`a < 0`), at the cost of a division that is singular when
    /// `1 - dt·a` vanishes.
    Implicit,
}

/// Advances `v_prev` by one time step of size `dt`.
///
/// # Errors
///
/// - [`Error::InvalidConfig`] if the config fails validation.
/// - [`Error::InvalidParameters`] if `dt` is non-positive or non-finite, or
///   an ODE coefficient is non-finite.
/// - [`Error::SingularStep`] if the implicit denominator `1 - dt·a` is
///   within `config.singular_tol` of zero.
pub fn step(
    v_prev: f64,
    dt: f64,
    ode: &LinearOde,
    mode: StepMode,
    config: &Config,
) -> Result<f64, Error> {
    validate_inputs(dt, ode, config)?;
    advance(v_prev, dt, ode, mode, config)
}

/// Integrates the ODE over a uniform time grid starting at `t = 0`.
///
/// The result holds exactly `steps` samples at times
/// `[0, dt, …, (steps - 1)·dt]`, with index 0 holding the initial
/// condition `v0`.
/// Each later value is produced by applying the selected update rule to
/// its immediate predecessor, so the recurrence is purely sequential and
/// deterministic.
///
/// # Errors
///
/// Same conditions as [`step`], plus [`Error::InvalidParameters`] when
/// `steps` is zero.
pub fn simulate(
    v0: f64,
    dt: f64,
    steps: usize,
    ode: &LinearOde,
    mode: StepMode,
    config: &Config,
) -> Result<TimeSeries, Error> {
    validate_inputs(dt, ode, config)?;
    if steps == 0 {
        return Err(Error::InvalidParameters {
            reason: "step count must be at least 1",
        });
    }

    let mut series = TimeSeries::with_capacity(steps);
    series.push(0.0, v0);

    let mut v = v0;
    for i in 1..steps {
        v = advance(v, dt, ode, mode, config)?;
        // Times come from multiplication, not accumulation, so the grid is
        // exactly reproducible and free of additive rounding drift.
        series.push(i as f64 * dt, v);
    }

    Ok(series)
}

fn validate_inputs(dt: f64, ode: &LinearOde, config: &Config) -> Result<(), Error> {
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;
    if !dt.is_finite() || dt <= 0.0 {
        return Err(Error::InvalidParameters {
            reason: "time step must be positive and finite",
        });
    }
    ode.validate()
        .map_err(|reason| Error::InvalidParameters { reason })?;
    Ok(())
}

/// The unchecked update kernel; inputs are validated by the callers.
fn advance(
    v_prev: f64,
    dt: f64,
    ode: &LinearOde,
    mode: StepMode,
    config: &Config,
) -> Result<f64, Error> {
    let LinearOde { a, b } = *ode;

    match mode {
        StepMode::Explicit => Ok(v_prev + dt * (a * v_prev + b)),
        StepMode::Implicit => {
            let denominator = 1.0 - dt * a;
            if denominator.abs() <= config.singular_tol {
                return Err(Error::SingularStep {
                    denominator,
                    tolerance: config.singular_tol,
                });
            }
            Ok((v_prev + dt * b) / denominator)
        }
    }
}
