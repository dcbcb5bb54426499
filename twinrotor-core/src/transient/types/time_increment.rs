use std::{
    fmt,
    ops::{Add, Deref},
};

use thiserror::Error;
use uom::{
    si::{f64::Time, time},
    Conversion,
};

/// A unit-safe, strictly positive duration used to advance simulation time.
///
/// `TimeIncrement` wraps a [`Time`] value while enforcing that the duration
/// is strictly greater than zero, so a [`Simulation`] can assume every step
/// moves forward. Construct one from a concrete unit:
///
/// ```
/// use twinrotor_core::transient::TimeIncrement;
/// use uom::si::time::millisecond;
///
/// let dt = TimeIncrement::new::<millisecond>(5.0).unwrap();
/// ```
///
/// or fallibly from an existing [`Time`] via [`TryFrom`]. Zero, negative, and
/// non-finite values are rejected with [`TimeIncrementError::NotPositive`].
///
/// [`Simulation`]: crate::transient::Simulation
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeIncrement(Time);

/// Error type returned when constructing an invalid [`TimeIncrement`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimeIncrementError {
    #[error("time increment must be greater than zero, got {0} s")]
    NotPositive(f64),
}

impl TimeIncrement {
    /// Constructs a `TimeIncrement` from a numeric value and a
    /// [`uom::si::time`] unit.
    ///
    /// # Errors
    ///
    /// Returns [`TimeIncrementError::NotPositive`] if `value` is not strictly
    /// positive.
    pub fn new<U>(value: f64) -> Result<Self, TimeIncrementError>
    where
        U: time::Unit + Conversion<f64, T = f64>,
    {
        Self::from_time(Time::new::<U>(value))
    }

    /// Constructs a `TimeIncrement` from an existing [`Time`] value.
    ///
    /// # Errors
    ///
    /// Returns [`TimeIncrementError::NotPositive`] if the time is not
    /// strictly positive.
    pub fn from_time(time: Time) -> Result<Self, TimeIncrementError> {
        let seconds = time.get::<time::second>();
        if seconds > 0.0 {
            Ok(Self(time))
        } else {
            Err(TimeIncrementError::NotPositive(seconds))
        }
    }

    /// Consumes the `TimeIncrement` and returns the underlying [`Time`].
    #[must_use]
    pub fn into_inner(self) -> Time {
        self.0
    }
}

impl TryFrom<Time> for TimeIncrement {
    type Error = TimeIncrementError;

    fn try_from(t: Time) -> Result<Self, Self::Error> {
        Self::from_time(t)
    }
}

/// Dereferences to the inner [`Time`] value, so a `TimeIncrement` can be used
/// wherever a `Time` reference is expected.
impl Deref for TimeIncrement {
    type Target = Time;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Advances a [`Time`] by a `TimeIncrement`.
impl Add<TimeIncrement> for Time {
    type Output = Time;

    fn add(self, rhs: TimeIncrement) -> Self::Output {
        self + rhs.0
    }
}

impl fmt::Display for TimeIncrement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0.get::<time::second>();
        write!(f, "{s} s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::time::{millisecond, second};

    #[test]
    fn advances_a_time() {
        let t = Time::new::<second>(5.0);
        let dt = TimeIncrement::new::<millisecond>(250.0).unwrap();
        assert_relative_eq!((t + dt).get::<second>(), 5.25);
    }

    #[test]
    fn zero_increment_fails() {
        assert_eq!(
            TimeIncrement::new::<second>(0.0),
            Err(TimeIncrementError::NotPositive(0.0))
        );
    }

    #[test]
    fn negative_increment_fails() {
        assert!(TimeIncrement::new::<second>(-0.005).is_err());
    }

    #[test]
    fn nan_increment_fails() {
        assert!(TimeIncrement::new::<second>(f64::NAN).is_err());
    }

    #[test]
    fn displays_in_seconds() {
        let dt = TimeIncrement::new::<millisecond>(5.0).unwrap();
        assert_eq!(dt.to_string(), "0.005 s");
    }
}
