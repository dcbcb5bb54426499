//! Runnable demos for the `twinrotor` workspace.
//!
//! See the `examples/` directory; each example is a self-contained program:
//!
//! ```sh
//! cargo run --example open_loop
//! ```
