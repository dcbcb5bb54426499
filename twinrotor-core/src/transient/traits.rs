mod commanded;
mod controller;
mod integrator;
mod stateful;
mod temporal;

pub use commanded::Commanded;
pub use controller::Controller;
pub use integrator::Integrator;
pub use stateful::{HasTimeDerivative, StatefulComponent};
pub use temporal::Temporal;
