//! Finite-difference derivative estimation and fixed-step time integration
//! for Stokes settling dynamics.
//!
//! The crate is organized in three layers:
//!
//! - [`derivative`] estimates the derivative of a caller-supplied scalar
//!   function using forward, backward, or central finite differences.
//! - [`linear`] advances the scalar linear ODE `dv/dt = a·v + b` with a
//!   fixed time step, using either the explicit (forward Euler) or implicit
//!   (backward Euler) update rule.
//! - [`sphere`] maps the physics of a rigid sphere settling through a
//!   viscous fluid onto that linear ODE using unit-safe [`uom`] quantities.
//!
//! All operations are pure: identical inputs yield bit-identical results,
//! and there is no shared or global state.

pub mod derivative;
pub mod linear;
pub mod sphere;

pub use derivative::DifferenceScheme;
pub use linear::StepMode;
