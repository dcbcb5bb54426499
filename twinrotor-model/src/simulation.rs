//! Run-level façade over the simulation framework.
//!
//! Wires the [`Helicopter2Dof`] plant to the forward Euler integrator and an
//! open-loop command schedule, turning a [`Config`] into a completed
//! [`History`]. The schedule stays a collaborator supplied by the caller:
//! any `Fn(Time) -> Control` will do, and it sees only time, never state.

use thiserror::Error;
use twinrotor_core::transient::{
    controllers::OpenLoop, integrators::ForwardEuler, Simulation, StepError, Stepping,
    SteppingError, TimeIncrement, TimeIncrementError, TimeStep,
};
use uom::si::{f64::Time, time::second};

use crate::helicopter::{Control, Helicopter2Dof, Input, ModelError, Parameters, State, Terms};

/// Construction-time configuration for an open-loop run.
///
/// `samples = round(duration / period)` states are recorded, starting from
/// `initial_state` at `t = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub initial_state: State,
    /// Simulated span (s); must be positive.
    pub duration: Time,
    /// Integration step (s); must be positive.
    pub period: Time,
    pub parameters: Parameters,
}

impl Config {
    /// Creates a configuration using the reference bench parameters.
    pub fn new(initial_state: State, duration: Time, period: Time) -> Self {
        Self {
            initial_state,
            duration,
            period,
            parameters: Parameters::default(),
        }
    }

    /// Replaces the physical parameters.
    #[must_use]
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }
}

/// Error type for a run that could not be completed.
///
/// Every variant is fatal: the model is deterministic, so a failure reflects
/// a configuration or domain violation rather than a transient condition,
/// and no partial history is returned.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid integration period: {0}")]
    Period(#[from] TimeIncrementError),
    #[error("invalid run schedule: {0}")]
    Schedule(#[from] SteppingError),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// One recorded sample: the instant, the state, and the command applied
/// at that instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: Time,
    pub state: State,
    pub control: Control,
}

/// The completed record of a run.
///
/// Holds one [`Sample`] per recorded state and one [`Terms`] row per step
/// taken. The final sample's evaluation never advances the state, so its
/// diagnostics are not retained; a single-sample run therefore has no terms
/// at all. `samples()[0]` is always exactly the configured initial state.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    samples: Vec<Sample>,
    terms: Vec<Terms>,
}

impl History {
    fn from_steps(steps: &[TimeStep<Helicopter2Dof>]) -> Self {
        let samples = steps
            .iter()
            .map(|step| Sample {
                time: step.input.time,
                state: step.input.state,
                control: step.input.control,
            })
            .collect();

        let terms = steps[..steps.len() - 1]
            .iter()
            .map(|step| step.output.terms)
            .collect();

        Self { samples, terms }
    }

    /// Returns the recorded samples, in step order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the diagnostic terms, one row per step taken.
    pub fn terms(&self) -> &[Terms] {
        &self.terms
    }

    /// Returns the state trajectory as `samples × 4` rows of
    /// `[pitch, pitch_rate, yaw, yaw_rate]`.
    #[must_use]
    pub fn state_matrix(&self) -> Vec<[f64; 4]> {
        self.samples
            .iter()
            .map(|sample| sample.state.as_array())
            .collect()
    }

    /// Returns the diagnostic terms as rows of
    /// `[f1, f2, g11, g12, g21, g22]`.
    #[must_use]
    pub fn terms_matrix(&self) -> Vec<[f64; 6]> {
        self.terms.iter().map(|terms| terms.as_array()).collect()
    }

    /// Returns the number of recorded samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// A completed history always holds at least the initial sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Runs the plant open-loop from `config.initial_state` under the given
/// command schedule and returns the completed history.
///
/// The schedule is evaluated once per recorded sample, at that sample's
/// instant; `commands(0)` is applied to the initial state. Identical
/// configurations and schedules produce bit-identical histories.
///
/// # Errors
///
/// Returns a [`RunError`] if the configuration is invalid or the dynamics
/// produce a non-finite value. A failed run discards every step already
/// taken; no partial history escapes.
pub fn run<F>(config: Config, commands: F) -> Result<History, RunError>
where
    F: Fn(Time) -> Control,
{
    let period = TimeIncrement::from_time(config.period)?;
    let plant = Helicopter2Dof::new(config.parameters);

    let start = Time::new::<second>(0.0);
    let initial_input = Input {
        state: config.initial_state,
        control: commands(start),
        time: start,
    };

    let sim = Simulation::new(plant, initial_input)?
        .advance(
            Stepping::Span {
                dt: period,
                duration: config.duration,
            },
            &ForwardEuler,
            &OpenLoop::new(commands),
        )
        .map_err(|err| match err {
            StepError::Component(e) => RunError::Model(e),
            StepError::Stepping(e) => RunError::Schedule(e),
            StepError::Integrator(infallible) => match infallible {},
            StepError::Controller(infallible) => match infallible {},
        })?;

    Ok(History::from_steps(sim.history()))
}
