//! The two-degree-of-freedom helicopter plant.
//!
//! The body pivots about a fixed point: `pitch` raises the nose against
//! gravity, `yaw` swings it about the vertical. Two rotor commands drive the
//! axes through a state-dependent influence matrix, giving the affine-in-
//! control form
//!
//! ```text
//!   xdot = f(x) + g(x) * u
//! ```
//!
//! where `f` is the uncontrolled drift (damping, rate coupling, gravity) and
//! `g` maps the commands into angular accelerations.

mod parameters;
mod types;

use thiserror::Error;
use twinrotor_core::{transient::StatefulComponent, Component};
use uom::si::time::second;

pub use parameters::Parameters;
pub use types::{Control, Input, Output, State, StateDerivative, Terms};

/// The nonlinear dynamics evaluator.
///
/// A pure [`Component`]: given the current state and rotor commands it
/// reports the state derivative and the diagnostic [`Terms`] behind it,
/// without mutating anything. Parameters are fixed at construction.
///
/// As the arm pitches toward vertical the yaw-axis effective inertia shrinks
/// toward its floor of `yaw_inertia`, which stays positive, so the evaluator
/// is defined for every pitch angle. Extreme pitch is a domain-validity
/// boundary of the underlying bench model rather than a numerical hazard,
/// and is not checked here.
#[derive(Debug, Clone, Copy)]
pub struct Helicopter2Dof {
    parameters: Parameters,
}

/// Error type returned when the dynamics cannot be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ModelError {
    /// The state derivative or a diagnostic term came out non-finite.
    ///
    /// The model is deterministic, so this is never transient: it indicates
    /// a configuration or domain violation, and the run it occurs in is
    /// abandoned rather than retried.
    #[error("dynamics produced a non-finite value at t = {time} s (pitch = {pitch} rad)")]
    NumericInstability { time: f64, pitch: f64 },
}

impl Helicopter2Dof {
    /// Creates a plant with the given physical parameters.
    pub fn new(parameters: Parameters) -> Self {
        Self { parameters }
    }

    /// Returns the plant's physical parameters.
    pub fn parameters(&self) -> Parameters {
        self.parameters
    }
}

impl Component for Helicopter2Dof {
    type Input = Input;
    type Output = Output;
    type Error = ModelError;

    /// Evaluates the dynamics at one point in state and command space.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NumericInstability`] if any derivative component
    /// or diagnostic term is NaN or infinite.
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let Parameters {
            mass,
            gravity,
            arm_length,
            pitch_damping,
            yaw_damping,
            pitch_inertia,
            yaw_inertia,
            pitch_thrust_gain,
            yaw_thrust_gain,
            yaw_cross_gain,
            pitch_cross_gain,
        } = self.parameters;

        let State {
            pitch,
            pitch_rate,
            yaw: _,
            yaw_rate,
        } = input.state;

        let (sin_pitch, cos_pitch) = pitch.sin_cos();

        // Effective inertias about each axis. The yaw term depends on how far
        // the arm has pitched away from horizontal.
        let pitch_axis_inertia = pitch_inertia + mass * arm_length * arm_length;
        let yaw_axis_inertia = yaw_inertia + mass * (arm_length * cos_pitch).powi(2);

        // Uncontrolled drift: damping, rate coupling, and gravity.
        let f1 = -(pitch_damping * pitch_rate
            + (mass * pitch_rate * arm_length).powi(2) * sin_pitch * cos_pitch
            + mass * gravity * arm_length * cos_pitch)
            / pitch_axis_inertia;
        let f2 = -(yaw_damping * yaw_rate
            + 2.0 * mass * sin_pitch * cos_pitch * pitch_rate * yaw_rate * arm_length * arm_length)
            / yaw_axis_inertia;

        // Control influence.
        let g11 = pitch_thrust_gain / pitch_axis_inertia;
        let g12 = pitch_cross_gain / pitch_axis_inertia;
        let g21 = yaw_cross_gain / yaw_axis_inertia;
        let g22 = yaw_thrust_gain / yaw_axis_inertia;

        let Control {
            pitch: pitch_cmd,
            yaw: yaw_cmd,
        } = input.control;

        let derivative = StateDerivative {
            pitch_rate,
            pitch_accel: f1 + g11 * pitch_cmd + g12 * yaw_cmd,
            yaw_rate,
            yaw_accel: f2 + g21 * pitch_cmd + g22 * yaw_cmd,
        };

        let terms = Terms {
            f1,
            f2,
            g11,
            g12,
            g21,
            g22,
        };

        if !derivative.is_finite() || !terms.is_finite() {
            return Err(ModelError::NumericInstability {
                time: input.time.get::<second>(),
                pitch,
            });
        }

        Ok(Output { derivative, terms })
    }
}

impl StatefulComponent for Helicopter2Dof {
    type State = State;

    fn extract_state(input: &Self::Input) -> Self::State {
        input.state
    }

    fn extract_derivative(output: &Self::Output) -> StateDerivative {
        output.derivative
    }

    fn apply_state(input: &Self::Input, state: Self::State) -> Self::Input {
        Input { state, ..*input }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::f64::Time;

    fn reference_plant() -> Helicopter2Dof {
        Helicopter2Dof::new(Parameters::default())
    }

    fn input_at(state: State, control: Control) -> Input {
        Input {
            state,
            control,
            time: Time::new::<second>(0.0),
        }
    }

    #[test]
    fn reference_point_matches_hand_computed_values() {
        // Nose 0.7 rad below horizontal, at rest, yaw command of 5.
        let input = input_at(
            State::from([-0.7, 0.0, 0.0, 0.0]),
            Control {
                pitch: 0.0,
                yaw: 5.0,
            },
        );

        let Output { derivative, terms } = reference_plant().call(input).unwrap();

        assert_relative_eq!(terms.f1, -22.4089, epsilon = 1e-3);
        assert_eq!(terms.f2, 0.0, "no drift about yaw while at rest");
        assert_relative_eq!(terms.g11, 2.36134, epsilon = 1e-3);
        assert_relative_eq!(terms.g12, 0.0787113, epsilon = 1e-3);
        assert_relative_eq!(terms.g21, 0.307264, epsilon = 1e-3);
        assert_relative_eq!(terms.g22, 1.010182, epsilon = 1e-3);

        assert_eq!(derivative.pitch_rate, 0.0);
        assert_eq!(derivative.yaw_rate, 0.0);
        assert_relative_eq!(derivative.pitch_accel, -22.01539, epsilon = 1e-3);
        assert_relative_eq!(derivative.yaw_accel, 5.050912, epsilon = 1e-3);
    }

    #[test]
    fn level_hover_drifts_nose_down() {
        let input = input_at(State::default(), Control::default());

        let Output { derivative, terms } = reference_plant().call(input).unwrap();

        // Gravity is the only drift at rest: f1 = -m*g*l / (Jp + m*l²).
        assert_relative_eq!(terms.f1, -29.29879, epsilon = 1e-3);
        assert_eq!(terms.f2, 0.0);
        assert_eq!(
            derivative.pitch_accel, terms.f1,
            "zero command leaves only the drift"
        );
        assert_eq!(derivative.yaw_accel, 0.0);
    }

    #[test]
    fn angle_derivatives_are_kinematic_identities() {
        let input = input_at(
            State::from([0.2, -0.4, 1.0, 0.8]),
            Control {
                pitch: 3.0,
                yaw: -1.0,
            },
        );

        let Output { derivative, .. } = reference_plant().call(input).unwrap();

        assert_eq!(derivative.pitch_rate, -0.4);
        assert_eq!(derivative.yaw_rate, 0.8);
    }

    #[test]
    fn yaw_angle_does_not_enter_the_dynamics() {
        let control = Control {
            pitch: 2.0,
            yaw: 1.0,
        };
        let near = input_at(State::from([0.3, 0.5, 0.0, -0.2]), control);
        let far = input_at(State::from([0.3, 0.5, 4.0, -0.2]), control);

        let near_out = reference_plant().call(near).unwrap();
        let far_out = reference_plant().call(far).unwrap();

        assert_eq!(near_out.terms, far_out.terms);
        assert_eq!(near_out.derivative.pitch_accel, far_out.derivative.pitch_accel);
        assert_eq!(near_out.derivative.yaw_accel, far_out.derivative.yaw_accel);
    }

    #[test]
    fn non_finite_state_is_reported() {
        let input = input_at(
            State::from([f64::NAN, 0.0, 0.0, 0.0]),
            Control::default(),
        );

        let result = reference_plant().call(input);
        assert!(matches!(
            result,
            Err(ModelError::NumericInstability { .. })
        ));
    }

    #[test]
    fn non_finite_command_is_reported() {
        let input = input_at(
            State::default(),
            Control {
                pitch: f64::INFINITY,
                yaw: 0.0,
            },
        );

        let result = reference_plant().call(input);
        assert!(matches!(
            result,
            Err(ModelError::NumericInstability { .. })
        ));
    }
}
