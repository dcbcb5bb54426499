//! The `twinrotor` reference plant.
//!
//! This crate models a bench-mounted two-degree-of-freedom helicopter: a
//! rigid body free to pitch and yaw, driven by two rotor commands whose
//! thrust couples into both axes. The model is a deterministic fixture for
//! validating nonlinear control-design code against known dynamics, not a
//! flight-certified simulation.
//!
//! [`helicopter`] holds the plant itself; [`simulation`] wires it to the
//! framework in `twinrotor-core` behind a small [`Config`] → [`History`]
//! façade.
//!
//! [`Config`]: simulation::Config
//! [`History`]: simulation::History

pub mod helicopter;
pub mod simulation;
