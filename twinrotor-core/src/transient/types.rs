mod time_increment;

pub use time_increment::{TimeIncrement, TimeIncrementError};
