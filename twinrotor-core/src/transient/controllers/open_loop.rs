use std::convert::Infallible;
use std::fmt;

use uom::si::f64::Time;

use crate::{
    transient::{Commanded, Controller, Simulation, Temporal},
    Component,
};

/// A [`Controller`] that applies a pre-planned, time-indexed command schedule.
///
/// At each step the integrator proposes an input whose timestamp already
/// reflects the step about to be evaluated; `OpenLoop` looks that time up in
/// its schedule and stamps the resulting command onto the input. The schedule
/// is any `Fn(Time) -> Command`, so the command source stays a collaborator
/// outside the simulation loop.
///
/// There is no feedback path: the schedule sees only time, never the state.
pub struct OpenLoop<F> {
    schedule: F,
}

// A command schedule is typically a closure, which never implements `Debug`,
// so deriving `Debug` (which would bound `F: Debug`) makes `OpenLoop` unusable
// in contexts that require `Debug`. Implement it manually without bounding `F`.
impl<F> fmt::Debug for OpenLoop<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenLoop").finish_non_exhaustive()
    }
}

impl<F> OpenLoop<F> {
    /// Creates an open-loop controller from a command schedule.
    pub fn new(schedule: F) -> Self {
        Self { schedule }
    }
}

impl<C, F> Controller<C> for OpenLoop<F>
where
    C: Component,
    C::Input: Temporal + Commanded,
    F: Fn(Time) -> <C::Input as Commanded>::Command,
{
    type Error = Infallible;

    fn adjust_input(
        &self,
        _simulation: &Simulation<C>,
        input: C::Input,
    ) -> Result<C::Input, Self::Error> {
        let command = (self.schedule)(input.get_time());
        Ok(input.with_command(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::time::second;

    use crate::transient::test_utils::{Turntable, TurntableInput};

    #[test]
    fn stamps_the_scheduled_command() {
        let input = TurntableInput {
            angle: 0.0,
            drive: 0.0,
            time: Time::new::<second>(3.0),
        };
        let sim = Simulation::new(Turntable, input).unwrap();

        // Drive proportional to time: 0.5 rad/s per second.
        let controller = OpenLoop::new(|t: Time| 0.5 * t.get::<second>());

        let adjusted = controller.adjust_input(&sim, input).unwrap();
        assert_eq!(adjusted.drive, 1.5);
        assert_eq!(adjusted.angle, 0.0);
    }
}
