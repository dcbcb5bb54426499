mod forward_euler;

pub use forward_euler::ForwardEuler;
