use crate::{
    transient::{Simulation, Temporal},
    Component,
};

/// A trait for adjusting a proposed input before component evaluation.
///
/// At each step the [`Integrator`](crate::transient::Integrator) predicts the
/// next input from the recorded history; a `Controller` then applies whatever
/// logic sits outside the integrated dynamics. In an open-loop fixture that
/// is command injection (see
/// [`OpenLoop`](crate::transient::controllers::OpenLoop)); closed-loop
/// strategies or constraint enforcement would slot in the same way.
pub trait Controller<C>
where
    C: Component,
    C::Input: Temporal,
{
    /// The error type returned if control logic fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Adjusts the proposed input before the component is evaluated.
    ///
    /// # Errors
    ///
    /// Returns `Err(Self::Error)` if the input is invalid or control logic
    /// fails.
    fn adjust_input(
        &self,
        simulation: &Simulation<C>,
        input: C::Input,
    ) -> Result<C::Input, Self::Error>;
}
