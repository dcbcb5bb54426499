use crate::Component;

/// A trait indicating that a type has a time derivative.
///
/// This trait names the type representing the rate of change of `Self` with
/// respect to time. State types implement it so that integrators can relate
/// a state to the derivative a component reports for it. For a plant whose
/// state is a vector of angles and rates, the derivative is the
/// corresponding vector of rates and accelerations.
pub trait HasTimeDerivative {
    /// The rate of change of `Self` with respect to time.
    type TimeDerivative;
}

/// A trait for components with time-evolving internal state.
///
/// A `StatefulComponent` is a specialized [`Component`] whose input encodes
/// dynamic system state and whose output provides the corresponding time
/// derivative. Three operations separate state handling from evaluation:
///
/// 1. [`extract_state`] retrieves the current state from the input.
/// 2. [`extract_derivative`] retrieves the state's time derivative from the
///    output.
/// 3. [`apply_state`] injects an evolved state into a previous input,
///    producing the next input while preserving everything else it carries.
///
/// Together these form the minimal interface an [`Integrator`] needs to
/// advance the system, without the integrator knowing the state's layout.
///
/// [`extract_state`]: StatefulComponent::extract_state
/// [`extract_derivative`]: StatefulComponent::extract_derivative
/// [`apply_state`]: StatefulComponent::apply_state
/// [`Integrator`]: crate::transient::Integrator
pub trait StatefulComponent: Component {
    /// The component's time-evolving internal state.
    type State: HasTimeDerivative;

    /// Extracts the current state from the component's input.
    fn extract_state(input: &Self::Input) -> Self::State;

    /// Extracts the time derivative of the state from the component's output.
    fn extract_derivative(
        output: &Self::Output,
    ) -> <Self::State as HasTimeDerivative>::TimeDerivative;

    /// Applies an evolved state to a previous input, producing the next input.
    fn apply_state(input: &Self::Input, state: Self::State) -> Self::Input;
}
