//! Settling of a rigid sphere through a viscous fluid under Stokes drag.
//!
//! In the Stokes regime the velocity of a small sinking sphere obeys the
//! scalar linear ODE `dv/dt = A·v + B`, where the decay rate `A` comes from
//! viscous drag and the forcing `B` from the density difference between
//! sphere and fluid.
//! This module holds the unit-safe parameter layer and thin wrappers over
//! the [`linear`](crate::linear) kernels; all arithmetic happens on SI
//! values.

mod parameters;

pub use parameters::SphereParameters;

use uom::si::{
    f64::{Time, Velocity},
    time::second,
    velocity::meter_per_second,
};

use crate::linear::{self, Config, Error, StepMode, TimeSeries};

/// Advances the sphere's velocity by one time step of size `dt`.
///
/// # Errors
///
/// [`Error::InvalidParameters`] if the physical parameters fail
/// [validation](SphereParameters::validate), plus every failure mode of
/// [`linear::step`].
pub fn step(
    v_prev: Velocity,
    dt: Time,
    params: &SphereParameters,
    mode: StepMode,
    config: &Config,
) -> Result<Velocity, Error> {
    params
        .validate()
        .map_err(|reason| Error::InvalidParameters { reason })?;

    let next = linear::step(v_prev.value, dt.value, &params.ode(), mode, config)?;
    Ok(Velocity::new::<meter_per_second>(next))
}

/// Integrates the sphere's velocity over a uniform time grid from `t = 0`.
///
/// The trajectory holds exactly `steps` samples at times
/// `[0, dt, …, (steps - 1)·dt]`, with index 0 holding `v0`.
///
/// # Errors
///
/// Same conditions as [`step`], plus [`Error::InvalidParameters`] when
/// `steps` is zero.
pub fn simulate(
    v0: Velocity,
    dt: Time,
    steps: usize,
    params: &SphereParameters,
    mode: StepMode,
    config: &Config,
) -> Result<Trajectory, Error> {
    params
        .validate()
        .map_err(|reason| Error::InvalidParameters { reason })?;

    let series = linear::simulate(v0.value, dt.value, steps, &params.ode(), mode, config)?;
    Ok(Trajectory::from_series(&series))
}

/// A unit-safe view of a simulated settling history.
///
/// Times and velocities are indexed in lock-step, exactly as in
/// [`TimeSeries`].
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    times: Vec<Time>,
    velocities: Vec<Velocity>,
}

impl Trajectory {
    fn from_series(series: &TimeSeries) -> Self {
        Self {
            times: series.times().iter().map(|&t| Time::new::<second>(t)).collect(),
            velocities: series
                .values()
                .iter()
                .map(|&v| Velocity::new::<meter_per_second>(v))
                .collect(),
        }
    }

    /// The number of samples, including the initial condition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the trajectory holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// The sample times, starting at zero.
    #[must_use]
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// The sampled velocities, in lock-step with [`times`](Self::times).
    #[must_use]
    pub fn velocities(&self) -> &[Velocity] {
        &self.velocities
    }

    /// The final velocity sample, or `None` if the trajectory is empty.
    #[must_use]
    pub fn last_velocity(&self) -> Option<Velocity> {
        self.velocities.last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        acceleration::meter_per_second_squared,
        f64::{Acceleration, DynamicViscosity, Length, MassDensity},
        dynamic_viscosity::pascal_second,
        length::meter,
        mass_density::kilogram_per_cubic_meter,
    };

    fn reference_params() -> SphereParameters {
        SphereParameters {
            sphere_density: MassDensity::new::<kilogram_per_cubic_meter>(2800.0),
            fluid_density: MassDensity::new::<kilogram_per_cubic_meter>(1300.0),
            radius: Length::new::<meter>(0.02),
            viscosity: DynamicViscosity::new::<pascal_second>(250.0),
            gravity: Acceleration::new::<meter_per_second_squared>(9.81),
        }
    }

    #[test]
    fn step_agrees_with_the_linear_kernel() {
        let params = reference_params();
        let dt = Time::new::<second>(1e-4);
        let v0 = Velocity::new::<meter_per_second>(0.0);

        let typed = step(v0, dt, &params, StepMode::Explicit, &Config::default()).unwrap();
        let raw = linear::step(0.0, 1e-4, &params.ode(), StepMode::Explicit, &Config::default())
            .unwrap();

        assert_eq!(typed.value.to_bits(), raw.to_bits());
    }

    #[test]
    fn simulate_starts_from_rest_at_time_zero() {
        let params = reference_params();
        let trajectory = simulate(
            Velocity::new::<meter_per_second>(0.0),
            Time::new::<second>(1e-4),
            10,
            &params,
            StepMode::Implicit,
            &Config::default(),
        )
        .unwrap();

        assert_eq!(trajectory.len(), 10);
        assert!(!trajectory.is_empty());
        assert_relative_eq!(trajectory.times()[0].value, 0.0);
        assert_relative_eq!(trajectory.velocities()[0].value, 0.0);
        assert_relative_eq!(trajectory.times()[9].value, 9e-4, max_relative = 1e-12);

        // Velocity grows monotonically toward terminal from rest.
        let velocities = trajectory.velocities();
        for pair in velocities.windows(2) {
            assert!(pair[1].value > pair[0].value);
        }
        assert!(trajectory.last_velocity().unwrap().value < params.terminal_velocity().value);
    }

    #[test]
    fn invalid_parameters_are_rejected_before_stepping() {
        let mut params = reference_params();
        params.radius = Length::new::<meter>(0.0);

        let result = step(
            Velocity::new::<meter_per_second>(0.0),
            Time::new::<second>(1e-4),
            &params,
            StepMode::Explicit,
            &Config::default(),
        );
        assert!(matches!(result, Err(Error::InvalidParameters { .. })));
    }
}
