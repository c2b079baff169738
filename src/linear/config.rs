/// Configuration for the fixed-step integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// The implicit denominator `1 - dt·a` is treated as singular when its
    /// magnitude is at or below this tolerance.
    pub singular_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            singular_tol: 1e-12,
        }
    }
}

impl Config {
    /// Validates that the tolerance is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.singular_tol.is_finite() || self.singular_tol < 0.0 {
            return Err("singular_tol must be finite and non-negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn negative_or_non_finite_tolerance_is_rejected() {
        assert!(Config { singular_tol: -1.0 }.validate().is_err());
        assert!(Config {
            singular_tol: f64::NAN
        }
        .validate()
        .is_err());
    }
}
