use std::ops::{Add, Mul};

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};
use twinrotor_core::transient::{Commanded, HasTimeDerivative, Temporal};
use uom::si::{f64::Time, time::second};

/// The plant state: pitch and yaw angles and their rates.
///
/// Array conversions preserve the ordering
/// `[pitch, pitch_rate, yaw, yaw_rate]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct State {
    /// Pitch angle (rad).
    pub pitch: f64,
    /// Pitch rate (rad/s).
    pub pitch_rate: f64,
    /// Yaw angle (rad).
    pub yaw: f64,
    /// Yaw rate (rad/s).
    pub yaw_rate: f64,
}

/// The time derivative of [`State`], as reported by the plant.
///
/// The angle derivatives are the kinematic identities (the rates carried
/// over from the state); the rate derivatives are the accelerations produced
/// by drift and control influence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateDerivative {
    /// d(pitch)/dt (rad/s).
    pub pitch_rate: f64,
    /// d(pitch rate)/dt (rad/s²).
    pub pitch_accel: f64,
    /// d(yaw)/dt (rad/s).
    pub yaw_rate: f64,
    /// d(yaw rate)/dt (rad/s²).
    pub yaw_accel: f64,
}

/// The two externally supplied rotor commands.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Control {
    /// Pitch command.
    pub pitch: f64,
    /// Yaw command.
    pub yaw: f64,
}

/// Diagnostic terms from one evaluation of the dynamics.
///
/// `f1`/`f2` are the drift accelerations; `g11`..`g22` are the nonzero
/// entries of the control-influence matrix. Array conversions preserve the
/// ordering `[f1, f2, g11, g12, g21, g22]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Terms {
    pub f1: f64,
    pub f2: f64,
    pub g11: f64,
    pub g12: f64,
    pub g21: f64,
    pub g22: f64,
}

/// Input to the plant at one simulation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    pub state: State,
    pub control: Control,
    pub time: Time,
}

/// Output from the plant at one simulation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Output {
    pub derivative: StateDerivative,
    pub terms: Terms,
}

impl State {
    #[must_use]
    pub fn as_array(self) -> [f64; 4] {
        [self.pitch, self.pitch_rate, self.yaw, self.yaw_rate]
    }
}

impl From<[f64; 4]> for State {
    fn from([pitch, pitch_rate, yaw, yaw_rate]: [f64; 4]) -> Self {
        Self {
            pitch,
            pitch_rate,
            yaw,
            yaw_rate,
        }
    }
}

impl From<State> for [f64; 4] {
    fn from(state: State) -> Self {
        state.as_array()
    }
}

impl Add for State {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            pitch: self.pitch + rhs.pitch,
            pitch_rate: self.pitch_rate + rhs.pitch_rate,
            yaw: self.yaw + rhs.yaw,
            yaw_rate: self.yaw_rate + rhs.yaw_rate,
        }
    }
}

impl HasTimeDerivative for State {
    type TimeDerivative = StateDerivative;
}

impl StateDerivative {
    #[must_use]
    pub fn as_array(self) -> [f64; 4] {
        [self.pitch_rate, self.pitch_accel, self.yaw_rate, self.yaw_accel]
    }

    pub(crate) fn is_finite(self) -> bool {
        self.as_array().iter().all(|v| v.is_finite())
    }
}

/// Scales the derivative into the state delta accumulated over `dt`.
impl Mul<Time> for StateDerivative {
    type Output = State;

    fn mul(self, dt: Time) -> Self::Output {
        let dt = dt.get::<second>();
        State {
            pitch: self.pitch_rate * dt,
            pitch_rate: self.pitch_accel * dt,
            yaw: self.yaw_rate * dt,
            yaw_rate: self.yaw_accel * dt,
        }
    }
}

impl Terms {
    #[must_use]
    pub fn as_array(self) -> [f64; 6] {
        [self.f1, self.f2, self.g11, self.g12, self.g21, self.g22]
    }

    pub(crate) fn is_finite(self) -> bool {
        self.as_array().iter().all(|v| v.is_finite())
    }
}

impl Temporal for Input {
    fn get_time(&self) -> Time {
        self.time
    }

    fn with_time(self, time: Time) -> Self {
        Self { time, ..self }
    }
}

impl Commanded for Input {
    type Command = Control;

    fn with_command(self, command: Self::Command) -> Self {
        Self {
            control: command,
            ..self
        }
    }
}
