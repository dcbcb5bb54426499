use crate::{
    transient::{Simulation, Temporal, TimeIncrement},
    Component,
};

/// A trait for proposing the next input in a simulation step.
///
/// An `Integrator` generates a new input for a [`Component`] from the current
/// simulation history and a time increment. The proposed input estimates the
/// system at the next point in time and is passed to a
/// [`Controller`](crate::transient::Controller) before evaluation, so that
/// externally scheduled commands can be applied on top of the integrated
/// state.
///
/// Implement this trait to define how the simulation advances from one time
/// step to the next. The only scheme shipped here is
/// [`ForwardEuler`](crate::transient::integrators::ForwardEuler); a fixed-step
/// explicit method is all a reference plant needs, and callers wanting more
/// accuracy shrink the step rather than switching schemes.
pub trait Integrator<C>
where
    C: Component,
    C::Input: Temporal,
{
    /// The error type returned if integration fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Proposes the next component input based on the current simulation state.
    ///
    /// # Parameters
    ///
    /// - `simulation`: The current simulation, including input/output history.
    /// - `dt`: The time step to advance by.
    ///
    /// # Errors
    ///
    /// Returns `Err(Self::Error)` if integration fails.
    fn propose_input(
        &self,
        simulation: &Simulation<C>,
        dt: TimeIncrement,
    ) -> Result<C::Input, Self::Error>;
}
