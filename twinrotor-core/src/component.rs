/// The core abstraction for models in this workspace.
///
/// A `Component` maps an input to an output through a pure [`call()`] method.
/// Components must be deterministic: the same input always produces the same
/// result, with no mutation and no I/O.
///
/// Simulation machinery in [`crate::transient`] builds on this contract to
/// evolve components over time without knowing anything about their internals.
///
/// [`call()`]: Component::call
pub trait Component {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the component with the given input.
    ///
    /// # Errors
    ///
    /// Each component defines its own `Error` type, allowing it to decide
    /// what constitutes a failure within its domain.
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;

    struct Gain {
        factor: f64,
    }

    impl Component for Gain {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
            Ok(input * self.factor)
        }
    }

    #[test]
    fn call_is_pure_and_deterministic() {
        let double = Gain { factor: 2.0 };
        assert_eq!(double.call(3.0), Ok(6.0));
        assert_eq!(double.call(3.0), Ok(6.0));

        let attenuate = Gain { factor: 0.5 };
        assert_eq!(attenuate.call(10.0), Ok(5.0));
    }
}
