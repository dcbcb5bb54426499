use std::{convert::Infallible, ops::Mul};

use uom::si::{f64::Time, time::second};

use crate::{
    transient::{Commanded, HasTimeDerivative, StatefulComponent, Temporal},
    Component,
};

/// A test component modeling a turntable that spins at whatever rate it is
/// commanded to.
///
/// First-order system with a known analytic solution:
///
/// ```text
///   angle_{k+1} = angle_k + drive_k * dt
/// ```
#[derive(Clone, Copy, Debug)]
pub(crate) struct Turntable;

/// Input to the [`Turntable`] component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TurntableInput {
    /// Platter angle, in radians.
    pub(crate) angle: f64,
    /// Commanded spin rate, in rad/s.
    pub(crate) drive: f64,
    pub(crate) time: Time,
}

/// Output from the [`Turntable`] component: the realized spin rate in rad/s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinRate(pub(crate) f64);

impl Component for Turntable {
    type Input = TurntableInput;
    type Output = SpinRate;
    type Error = Infallible;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(SpinRate(input.drive))
    }
}

impl Temporal for TurntableInput {
    fn get_time(&self) -> Time {
        self.time
    }

    fn with_time(self, time: Time) -> Self {
        Self { time, ..self }
    }
}

impl Commanded for TurntableInput {
    type Command = f64;

    fn with_command(self, command: Self::Command) -> Self {
        Self {
            drive: command,
            ..self
        }
    }
}

impl HasTimeDerivative for f64 {
    type TimeDerivative = SpinRate;
}

impl Mul<Time> for SpinRate {
    type Output = f64;

    fn mul(self, dt: Time) -> Self::Output {
        self.0 * dt.get::<second>()
    }
}

impl StatefulComponent for Turntable {
    type State = f64;

    fn extract_state(input: &Self::Input) -> Self::State {
        input.angle
    }

    fn extract_derivative(output: &Self::Output) -> SpinRate {
        *output
    }

    fn apply_state(input: &Self::Input, state: Self::State) -> Self::Input {
        Self::Input {
            angle: state,
            ..*input
        }
    }
}
