/// A trait for inputs that carry an externally supplied command.
///
/// Open-loop plants do not generate their own excitation: each step's command
/// arrives from outside the simulation loop. `Commanded` gives controllers a
/// uniform way to stamp that command onto a proposed input, mirroring how
/// [`Temporal`] exposes the timestamp.
///
/// [`Temporal`]: crate::transient::Temporal
pub trait Commanded: Sized {
    /// The command the input carries.
    type Command;

    /// Returns a new instance with the specified command applied.
    #[must_use]
    fn with_command(self, command: Self::Command) -> Self;
}
