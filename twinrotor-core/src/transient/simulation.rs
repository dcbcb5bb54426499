use thiserror::Error;
use uom::si::{f64::Time, time::second};

use crate::Component;

use super::{Controller, Integrator, Temporal, TimeIncrement, TimeStep};

/// Manages the simulation of a dynamic [`Component`] over time.
///
/// A `Simulation` owns a component and the history of [`TimeStep`]s recording
/// its evolution. At each step it uses an [`Integrator`] to propose the next
/// input and a [`Controller`] to adjust it before evaluation. The history is
/// written strictly forward, one slot per step; given the same initial input,
/// time increments, and controller behavior, two simulations produce
/// bit-identical histories.
pub struct Simulation<C>
where
    C: Component,
    C::Input: Temporal,
{
    component: C,
    history: Vec<TimeStep<C>>,
}

/// Error type for failures that can occur while stepping a simulation.
///
/// Groups failures from every stage of the step process: resolving the
/// stepping policy, proposing an input, adjusting it, and evaluating the
/// component. All are fatal to the run.
#[derive(Debug, Error)]
pub enum StepError<C, I, K>
where
    C: Component,
    C::Input: Temporal,
    I: Integrator<C>,
    K: Controller<C>,
{
    #[error("component failed: {0}")]
    Component(C::Error),
    #[error("controller failed: {0}")]
    Controller(K::Error),
    #[error("integrator failed: {0}")]
    Integrator(I::Error),
    #[error("invalid stepping policy: {0}")]
    Stepping(#[from] SteppingError),
}

/// Error type returned when a [`Stepping`] policy cannot be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SteppingError {
    #[error("number of steps cannot be zero")]
    ZeroSteps,
    #[error("span duration must be positive, got {0} s")]
    NonPositiveDuration(f64),
    #[error("a span of {duration} s records no samples at dt = {dt} s")]
    EmptySpan { duration: f64, dt: f64 },
}

/// Defines how [`Simulation::advance`] progresses through time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stepping {
    /// Advance by a fixed `dt` for `num_steps`.
    FixedSteps { dt: TimeIncrement, num_steps: usize },

    /// Record `round(duration / dt)` samples at a fixed `dt`.
    ///
    /// A span covers the half-open interval `[start, start + duration)`: with
    /// `samples` recorded states the simulation takes `samples - 1` steps, so
    /// the final sample sits one `dt` short of the requested duration. A span
    /// that rounds to a single sample records the initial state and takes no
    /// steps at all.
    Span { dt: TimeIncrement, duration: Time },
}

impl Stepping {
    /// Resolves the policy into a concrete `(dt, num_steps)` pair.
    fn resolve(self) -> Result<(TimeIncrement, usize), SteppingError> {
        match self {
            Self::FixedSteps { dt, num_steps } => {
                if num_steps == 0 {
                    return Err(SteppingError::ZeroSteps);
                }
                Ok((dt, num_steps))
            }

            Self::Span { dt, duration } => {
                let duration_s = duration.get::<second>();
                let dt_s = dt.get::<second>();
                if !(duration_s > 0.0) {
                    return Err(SteppingError::NonPositiveDuration(duration_s));
                }

                let samples = (duration_s / dt_s).round();
                if samples < 1.0 {
                    return Err(SteppingError::EmptySpan {
                        duration: duration_s,
                        dt: dt_s,
                    });
                }

                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let samples = samples as usize;
                Ok((dt, samples - 1))
            }
        }
    }
}

impl<C> Simulation<C>
where
    C: Component,
    C::Input: Temporal,
{
    /// Creates a new simulation from a component and an initial input.
    ///
    /// Evaluates the component once with the initial input, storing the
    /// result as the seed [`TimeStep`]. The seed input is recorded exactly as
    /// supplied.
    ///
    /// # Errors
    ///
    /// Returns `Err(C::Error)` if the component fails on the initial input.
    pub fn new(component: C, initial_input: C::Input) -> Result<Self, C::Error>
    where
        C::Input: Clone,
    {
        let output = component.call(initial_input.clone())?;
        Ok(Self {
            component,
            history: vec![TimeStep::new(initial_input, output)],
        })
    }

    /// Advances the simulation by a single time increment.
    ///
    /// Performs one full step:
    ///
    /// 1. Proposes the next input using the [`Integrator`].
    /// 2. Adjusts the proposed input via the [`Controller`].
    /// 3. Evaluates the [`Component`] with the adjusted input.
    /// 4. Appends the result as a new [`TimeStep`].
    ///
    /// # Errors
    ///
    /// Returns a [`StepError`] if any part of the step process fails.
    pub fn step<I, K>(
        &mut self,
        dt: TimeIncrement,
        integrator: &I,
        controller: &K,
    ) -> Result<(), StepError<C, I, K>>
    where
        C::Input: Clone,
        I: Integrator<C>,
        K: Controller<C>,
    {
        let proposed = integrator
            .propose_input(self, dt)
            .map_err(StepError::Integrator)?;

        let input = controller
            .adjust_input(self, proposed)
            .map_err(StepError::Controller)?;

        let output = self
            .component
            .call(input.clone())
            .map_err(StepError::Component)?;

        self.history.push(TimeStep::new(input, output));

        Ok(())
    }

    /// Advances the simulation to completion under a [`Stepping`] policy.
    ///
    /// Consumes the simulation and returns it only once every step has
    /// succeeded, so a failed run discards its partially written history
    /// rather than exposing it.
    ///
    /// # Errors
    ///
    /// Returns a [`StepError`] if the policy is invalid or any step fails.
    pub fn advance<I, K>(
        mut self,
        stepping: Stepping,
        integrator: &I,
        controller: &K,
    ) -> Result<Self, StepError<C, I, K>>
    where
        C::Input: Clone,
        I: Integrator<C>,
        K: Controller<C>,
    {
        let (dt, num_steps) = stepping.resolve()?;

        for _ in 0..num_steps {
            self.step(dt, integrator, controller)?;
        }

        Ok(self)
    }

    /// Evaluates the component at a given input without touching the history.
    ///
    /// Useful for previewing behavior or reconstructing a recorded step.
    ///
    /// # Errors
    ///
    /// Returns `Err(C::Error)` if the component fails to evaluate the input.
    pub fn call_component(&self, input: C::Input) -> Result<C::Output, C::Error> {
        self.component.call(input)
    }

    /// Returns the most recent step in the simulation.
    #[allow(clippy::missing_panics_doc)]
    pub fn current_step(&self) -> &TimeStep<C> {
        self.history
            .last()
            .expect("Simulation history is never empty")
    }

    /// Returns the simulation time of the most recent step.
    pub fn current_time(&self) -> Time {
        self.current_step().input.get_time()
    }

    /// Returns a reference to the simulation's component.
    pub fn component(&self) -> &C {
        &self.component
    }

    /// Returns a slice of all recorded simulation steps.
    pub fn history(&self) -> &[TimeStep<C>] {
        &self.history
    }

    /// Returns an iterator over all recorded simulation steps.
    pub fn iter_history(&self) -> impl Iterator<Item = &TimeStep<C>> {
        self.history.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::time::second;

    use crate::transient::{
        controllers::{OpenLoop, PassThrough},
        integrators::ForwardEuler,
        test_utils::{Turntable, TurntableInput},
    };

    fn spinning_at(drive: f64) -> TurntableInput {
        TurntableInput {
            angle: 0.0,
            drive,
            time: Time::new::<second>(0.0),
        }
    }

    #[test]
    fn starts_with_the_seed_step() {
        let sim = Simulation::new(Turntable, spinning_at(2.0)).unwrap();

        assert_eq!(sim.history().len(), 1);
        assert_eq!(sim.current_time(), Time::new::<second>(0.0));
        assert_eq!(sim.current_step().input.angle, 0.0);
    }

    #[test]
    fn takes_a_single_step() {
        let mut sim = Simulation::new(Turntable, spinning_at(2.0)).unwrap();

        let dt = TimeIncrement::new::<second>(0.5).unwrap();
        sim.step(dt, &ForwardEuler, &PassThrough).unwrap();

        let history = sim.history();
        assert_eq!(history.len(), 2);
        assert_relative_eq!(history[1].input.angle, 1.0);
        assert_relative_eq!(history[1].input.time.get::<second>(), 0.5);
    }

    #[test]
    fn advances_with_fixed_steps() {
        let dt = TimeIncrement::new::<second>(1.0).unwrap();
        let sim = Simulation::new(Turntable, spinning_at(0.25))
            .unwrap()
            .advance(
                Stepping::FixedSteps { dt, num_steps: 4 },
                &ForwardEuler,
                &PassThrough,
            )
            .unwrap();

        assert_eq!(sim.history().len(), 5, "1 seed + 4 steps");
        assert_relative_eq!(sim.current_step().input.angle, 1.0);
        assert_relative_eq!(sim.current_time().get::<second>(), 4.0);
    }

    #[test]
    fn span_records_the_rounded_sample_count() {
        let dt = TimeIncrement::new::<second>(0.5).unwrap();
        let sim = Simulation::new(Turntable, spinning_at(1.0))
            .unwrap()
            .advance(
                Stepping::Span {
                    dt,
                    duration: Time::new::<second>(2.0),
                },
                &ForwardEuler,
                &PassThrough,
            )
            .unwrap();

        // round(2.0 / 0.5) = 4 samples, i.e. 3 steps covering [0, 2).
        assert_eq!(sim.history().len(), 4);
        assert_relative_eq!(sim.current_time().get::<second>(), 1.5);
    }

    #[test]
    fn span_rounds_to_the_nearest_sample() {
        let dt = TimeIncrement::new::<second>(0.4).unwrap();
        let sim = Simulation::new(Turntable, spinning_at(1.0))
            .unwrap()
            .advance(
                Stepping::Span {
                    dt,
                    duration: Time::new::<second>(1.0),
                },
                &ForwardEuler,
                &PassThrough,
            )
            .unwrap();

        // 1.0 / 0.4 = 2.5 rounds away from zero to 3 samples.
        assert_eq!(sim.history().len(), 3);
    }

    #[test]
    fn single_sample_span_takes_no_steps() {
        let dt = TimeIncrement::new::<second>(0.005).unwrap();
        let sim = Simulation::new(Turntable, spinning_at(1.0))
            .unwrap()
            .advance(
                Stepping::Span {
                    dt,
                    duration: Time::new::<second>(0.005),
                },
                &ForwardEuler,
                &PassThrough,
            )
            .unwrap();

        assert_eq!(sim.history().len(), 1);
        assert_eq!(sim.current_time(), Time::new::<second>(0.0));
    }

    #[test]
    fn zero_fixed_steps_is_an_error() {
        let dt = TimeIncrement::new::<second>(1.0).unwrap();
        let result = Simulation::new(Turntable, spinning_at(1.0))
            .unwrap()
            .advance(
                Stepping::FixedSteps { dt, num_steps: 0 },
                &ForwardEuler,
                &PassThrough,
            );

        assert!(matches!(
            result,
            Err(StepError::Stepping(SteppingError::ZeroSteps))
        ));
    }

    #[test]
    fn non_positive_span_duration_is_an_error() {
        let dt = TimeIncrement::new::<second>(0.5).unwrap();
        let result = Simulation::new(Turntable, spinning_at(1.0))
            .unwrap()
            .advance(
                Stepping::Span {
                    dt,
                    duration: Time::new::<second>(-1.0),
                },
                &ForwardEuler,
                &PassThrough,
            );

        assert!(matches!(
            result,
            Err(StepError::Stepping(SteppingError::NonPositiveDuration(s))) if s == -1.0
        ));
    }

    #[test]
    fn span_shorter_than_half_a_step_is_an_error() {
        let dt = TimeIncrement::new::<second>(0.5).unwrap();
        let result = Simulation::new(Turntable, spinning_at(1.0))
            .unwrap()
            .advance(
                Stepping::Span {
                    dt,
                    duration: Time::new::<second>(0.1),
                },
                &ForwardEuler,
                &PassThrough,
            );

        assert!(matches!(
            result,
            Err(StepError::Stepping(SteppingError::EmptySpan { .. }))
        ));
    }

    #[test]
    fn open_loop_schedule_drives_each_step() {
        let dt = TimeIncrement::new::<second>(1.0).unwrap();

        // Spin at 1 rad/s for the first two seconds, then stop.
        let schedule = |t: Time| {
            if t.get::<second>() < 2.0 {
                1.0
            } else {
                0.0
            }
        };

        let sim = Simulation::new(Turntable, spinning_at(schedule(Time::new::<second>(0.0))))
            .unwrap()
            .advance(
                Stepping::FixedSteps { dt, num_steps: 4 },
                &ForwardEuler,
                &OpenLoop::new(schedule),
            )
            .unwrap();

        let angles: Vec<f64> = sim.iter_history().map(|step| step.input.angle).collect();
        assert_eq!(angles, vec![0.0, 1.0, 2.0, 2.0, 2.0]);
    }
}
