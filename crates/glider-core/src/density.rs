//! Population density for random reseeding.

use crate::error::CommandError;
use std::fmt;

/// Probability in `[0, 1]` that a cell comes up alive when the grid is
/// randomly (re)populated.
///
/// Validated at construction so a [`crate::Command::Populate`] can never
/// carry an out-of-range or non-finite value. Exactly `1.0` is treated
/// as "every cell alive" without consulting the sampler, so a populate
/// at full density is immune to floating-point edge effects at the
/// boundary of the uniform range.
///
/// # Examples
///
/// ```
/// use glider_core::Density;
///
/// let d = Density::new(0.25).unwrap();
/// assert_eq!(d.value(), 0.25);
///
/// // UI sliders usually speak percent.
/// let p = Density::from_percent(40.0).unwrap();
/// assert_eq!(p.value(), 0.4);
///
/// assert!(Density::new(1.5).is_err());
/// assert!(Density::new(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Density(f64);

impl Density {
    /// Every cell dead.
    pub const ZERO: Density = Density(0.0);
    /// Every cell alive.
    pub const ONE: Density = Density(1.0);

    /// Creates a density, rejecting values outside `[0, 1]` (NaN
    /// included).
    pub fn new(value: f64) -> Result<Self, CommandError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(CommandError::InvalidDensity { value })
        }
    }

    /// Creates a density from the collaborator's 0-100 percent scale.
    ///
    /// The error, if any, reports the already-normalized value.
    pub fn from_percent(percent: f64) -> Result<Self, CommandError> {
        Self::new(percent / 100.0)
    }

    /// The probability as a plain `f64` in `[0, 1]`.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
