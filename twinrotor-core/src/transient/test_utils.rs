mod turntable;

pub(crate) use turntable::{Turntable, TurntableInput};
