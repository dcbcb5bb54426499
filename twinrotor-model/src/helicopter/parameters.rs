#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// Physical parameters of the helicopter, fixed for the lifetime of a run.
///
/// All values are in SI units. The gains relate the dimensionless rotor
/// commands to the torque each produces about the pitch and yaw axes; the
/// cross gains capture how much each rotor bleeds into the other axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Parameters {
    /// Body mass (kg).
    pub mass: f64,
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
    /// Distance from the pivot to the center of mass (m).
    pub arm_length: f64,
    /// Viscous damping about the pitch axis (N·m·s).
    pub pitch_damping: f64,
    /// Viscous damping about the yaw axis (N·m·s).
    pub yaw_damping: f64,
    /// Body moment of inertia about the pitch axis (kg·m²).
    pub pitch_inertia: f64,
    /// Body moment of inertia about the yaw axis (kg·m²).
    pub yaw_inertia: f64,
    /// Pitch torque per unit pitch command (N·m).
    pub pitch_thrust_gain: f64,
    /// Yaw torque per unit yaw command (N·m).
    pub yaw_thrust_gain: f64,
    /// Yaw torque per unit pitch command (N·m).
    pub yaw_cross_gain: f64,
    /// Pitch torque per unit yaw command (N·m).
    pub pitch_cross_gain: f64,
}

impl Default for Parameters {
    /// The reference bench helicopter.
    fn default() -> Self {
        Self {
            mass: 1.3872,
            gravity: 9.81,
            arm_length: 0.186,
            pitch_damping: 0.8,
            yaw_damping: 0.318,
            pitch_inertia: 0.0384,
            yaw_inertia: 0.0432,
            pitch_thrust_gain: 0.204,
            yaw_thrust_gain: 0.072,
            yaw_cross_gain: 0.0219,
            pitch_cross_gain: 0.0068,
        }
    }
}
