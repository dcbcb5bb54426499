use std::{
    convert::Infallible,
    ops::{Add, Mul},
};

use uom::si::f64::Time;

use crate::transient::{
    HasTimeDerivative, Integrator, Simulation, StatefulComponent, Temporal, TimeIncrement,
};

/// A first-order explicit integrator using the forward Euler method.
///
/// Applies the update rule:
///
/// ```text
///   state_{k+1} = state_k + derivative_k * dt
///   time_{k+1}  = time_k  + dt
/// ```
///
/// The local truncation error is O(dt²), accumulating to O(dt) over a run.
/// That trade-off is deliberate for a reference plant: the scheme is simple
/// enough to reproduce by hand, and callers needing higher fidelity shrink
/// `dt` rather than switching solvers.
#[derive(Debug)]
pub struct ForwardEuler;

impl<C> Integrator<C> for ForwardEuler
where
    C: StatefulComponent,
    C::Input: Temporal,
    C::State: Add<Output = C::State>,
    <C::State as HasTimeDerivative>::TimeDerivative: Mul<Time, Output = C::State>,
{
    type Error = Infallible;

    /// Computes the next input by applying a time-scaled derivative increment
    /// to the current state.
    fn propose_input(
        &self,
        simulation: &Simulation<C>,
        dt: TimeIncrement,
    ) -> Result<C::Input, Self::Error> {
        let current = simulation.current_step();

        let new_time = current.input.get_time() + dt;
        let new_state =
            C::extract_state(&current.input) + C::extract_derivative(&current.output) * dt.into_inner();

        Ok(C::apply_state(&current.input, new_state).with_time(new_time))
    }
}
