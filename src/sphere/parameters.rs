use uom::si::f64::{Acceleration, DynamicViscosity, Frequency, Length, MassDensity, Time, Velocity};

use crate::linear::LinearOde;

/// Physical description of a rigid sphere sinking through a viscous fluid.
///
/// The parameters are created once per simulation run and never mutated.
/// They map onto the linear ODE `dv/dt = A·v + B` through
/// [`decay_rate`](Self::decay_rate) and [`forcing`](Self::forcing):
///
/// ```text
///   A = -9·μ / (2·ρ_s·r²)
///   B = (ρ_s - ρ_f)·g / ρ_s
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereParameters {
    /// Density of the sphere material, `ρ_s`.
    pub sphere_density: MassDensity,
    /// Density of the surrounding fluid, `ρ_f`.
    pub fluid_density: MassDensity,
    /// Radius of the sphere, `r`.
    pub radius: Length,
    /// Dynamic viscosity of the fluid, `μ`.
    pub viscosity: DynamicViscosity,
    /// Gravitational acceleration, `g`.
    pub gravity: Acceleration,
}

impl SphereParameters {
    /// Validates that the parameters are physically meaningful.
    ///
    /// Non-positive densities, radius, or viscosity would silently produce
    /// NaN or infinite results downstream, so they are rejected here.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending parameter.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(self.sphere_density.value > 0.0) || !self.sphere_density.value.is_finite() {
            return Err("sphere density must be positive and finite");
        }
        if !(self.fluid_density.value > 0.0) || !self.fluid_density.value.is_finite() {
            return Err("fluid density must be positive and finite");
        }
        if !(self.radius.value > 0.0) || !self.radius.value.is_finite() {
            return Err("radius must be positive and finite");
        }
        if !(self.viscosity.value > 0.0) || !self.viscosity.value.is_finite() {
            return Err("viscosity must be positive and finite");
        }
        if !self.gravity.value.is_finite() {
            return Err("gravity must be finite");
        }
        Ok(())
    }

    /// The decay-rate coefficient `A = -9·μ / (2·ρ_s·r²)`.
    ///
    /// Always negative for valid parameters: drag opposes motion.
    #[must_use]
    pub fn decay_rate(&self) -> Frequency {
        -9.0 * self.viscosity / (2.0 * self.sphere_density * self.radius * self.radius)
    }

    /// The forcing coefficient `B = (ρ_s - ρ_f)·g / ρ_s`.
    ///
    /// Positive when the sphere is denser than the fluid, with downward
    /// velocity taken as positive.
    #[must_use]
    pub fn forcing(&self) -> Acceleration {
        (self.sphere_density - self.fluid_density) * self.gravity / self.sphere_density
    }

    /// The equivalent [`LinearOde`] in SI units (`A` in 1/s, `B` in m/s²).
    #[must_use]
    pub fn ode(&self) -> LinearOde {
        LinearOde::new(self.decay_rate().value, self.forcing().value)
    }

    /// The steady-state settling velocity `-B/A`, where drag balances the
    /// buoyant weight and the acceleration vanishes.
    ///
    /// Equal to the classic Stokes result `(2/9)·(ρ_s - ρ_f)·r²·g / μ`.
    #[must_use]
    pub fn terminal_velocity(&self) -> Velocity {
        -(self.forcing() / self.decay_rate())
    }

    /// The relaxation time `2·ρ_s·r² / (9·μ)`, the e-folding time of the
    /// approach to terminal velocity.
    ///
    /// Explicit stepping becomes unstable once `dt` exceeds twice this
    /// value; see
    /// [`LinearOde::explicit_stability_limit`].
    #[must_use]
    pub fn relaxation_time(&self) -> Time {
        2.0 * self.sphere_density * self.radius * self.radius / (9.0 * self.viscosity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        acceleration::meter_per_second_squared,
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
    fn reference_parameters_are_valid() {
        assert!(reference_params().validate().is_ok());
    }

    #[test]
    fn coefficients_match_hand_calculation() {
        let params = reference_params();

        // A = -9 * 250 / (2 * 2800 * 0.02^2) = -2250 / 2.24
        assert_relative_eq!(
            params.decay_rate().value,
            -2250.0 / 2.24,
            max_relative = 1e-12
        );

        // B = (2800 - 1300) * 9.81 / 2800
        assert_relative_eq!(
            params.forcing().value,
            1500.0 * 9.81 / 2800.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn terminal_velocity_matches_stokes_formula() {
        let params = reference_params();

        // (2/9) * (2800 - 1300) * 0.02^2 * 9.81 / 250 = 0.005232 m/s
        let expected = 2.0 / 9.0 * 1500.0 * 0.02 * 0.02 * 9.81 / 250.0;
        assert_relative_eq!(
            params.terminal_velocity().value,
            expected,
            max_relative = 1e-12
        );

        // And -B/A agrees with the closed form by construction.
        let ode = params.ode();
        assert_relative_eq!(
            params.terminal_velocity().value,
            ode.equilibrium().unwrap(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn relaxation_time_is_the_inverse_decay_rate() {
        let params = reference_params();
        assert_relative_eq!(
            params.relaxation_time().value * -params.decay_rate().value,
            1.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn non_positive_parameters_are_rejected() {
        let mut params = reference_params();
        params.radius = Length::new::<meter>(-0.01);
        assert!(params.validate().is_err());

        let mut params = reference_params();
        params.viscosity = DynamicViscosity::new::<pascal_second>(0.0);
        assert!(params.validate().is_err());

        let mut params = reference_params();
        params.sphere_density = MassDensity::new::<kilogram_per_cubic_meter>(0.0);
        assert!(params.validate().is_err());

        let mut params = reference_params();
        params.fluid_density = MassDensity::new::<kilogram_per_cubic_meter>(f64::NAN);
        assert!(params.validate().is_err());
    }
}
