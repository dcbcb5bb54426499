use std::convert::Infallible;

use crate::{
    transient::{Controller, Simulation, Temporal},
    Component,
};

/// A no-op [`Controller`] that passes inputs through unchanged.
///
/// Use `PassThrough` when no control logic is needed, such as when simulating
/// a system's uncontrolled drift or when the input already carries the right
/// command.
#[derive(Debug)]
pub struct PassThrough;

impl<C> Controller<C> for PassThrough
where
    C: Component,
    C::Input: Temporal,
{
    type Error = Infallible;

    fn adjust_input(
        &self,
        _simulation: &Simulation<C>,
        input: C::Input,
    ) -> Result<C::Input, Self::Error> {
        Ok(input)
    }
}
