//! # Open-Loop Helicopter Run
//!
//! This example drives the two-degree-of-freedom helicopter plant with the
//! reference sinusoidal commands and plots what comes back:
//!
//! - the pitch and yaw commands themselves,
//! - the resulting pitch and yaw angles,
//! - the drift terms `f1`/`f2`, and
//! - the control-influence terms `g11`/`g12`/`g21`/`g22`.
//!
//! The run starts with the nose 0.7 rad below horizontal and covers 5
//! seconds at a 5 ms step.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example open_loop
//! ```

use twinrotor_model::{
    helicopter::{Control, State},
    simulation::{run, Config, History},
};
use twinrotor_plot::PlotApp;
use uom::si::{f64::Time, time::second};

/// The reference excitation: `u1 = 10·sin(2t)`, `u2 = 5·cos(4t)`.
fn commands(t: Time) -> Control {
    let t = t.get::<second>();
    Control {
        pitch: 10.0 * (2.0 * t).sin(),
        yaw: 5.0 * (4.0 * t).cos(),
    }
}

/// Time series extracted from a completed history, formatted for plotting.
///
/// Every series holds `(time, value)` pairs with time in seconds.
#[derive(Debug, Default)]
struct Traces {
    pitch_cmd: Vec<[f64; 2]>,
    yaw_cmd: Vec<[f64; 2]>,
    pitch: Vec<[f64; 2]>,
    yaw: Vec<[f64; 2]>,
    f1: Vec<[f64; 2]>,
    f2: Vec<[f64; 2]>,
    g11: Vec<[f64; 2]>,
    g12: Vec<[f64; 2]>,
    g21: Vec<[f64; 2]>,
    g22: Vec<[f64; 2]>,
}

impl Traces {
    fn collect(history: &History) -> Self {
        let mut traces = Self::default();

        for sample in history.samples() {
            let t = sample.time.get::<second>();
            traces.pitch_cmd.push([t, sample.control.pitch]);
            traces.yaw_cmd.push([t, sample.control.yaw]);
            traces.pitch.push([t, sample.state.pitch]);
            traces.yaw.push([t, sample.state.yaw]);
        }

        for (sample, terms) in history.samples().iter().zip(history.terms()) {
            let t = sample.time.get::<second>();
            traces.f1.push([t, terms.f1]);
            traces.f2.push([t, terms.f2]);
            traces.g11.push([t, terms.g11]);
            traces.g12.push([t, terms.g12]);
            traces.g21.push([t, terms.g21]);
            traces.g22.push([t, terms.g22]);
        }

        traces
    }
}

/// Runs the reference scenario and displays the traces.
fn main() {
    let config = Config::new(
        State::from([-0.7, 0.0, 0.0, 0.0]),
        Time::new::<second>(5.0),
        Time::new::<second>(0.005),
    );

    let history = run(config, commands).expect("the reference run should complete");
    let traces = Traces::collect(&history);

    let app = PlotApp::new()
        .panel("Control signals")
        .add_series("pitch command", &traces.pitch_cmd)
        .add_series("yaw command", &traces.yaw_cmd)
        .panel("Positions [rad]")
        .add_series("pitch", &traces.pitch)
        .add_series("yaw", &traces.yaw)
        .panel("Drift f(x)")
        .add_series("f1", &traces.f1)
        .add_series("f2", &traces.f2)
        .panel("Influence g(x)")
        .add_series("g11", &traces.g11)
        .add_series("g12", &traces.g12)
        .add_series("g21", &traces.g21)
        .add_series("g22", &traces.g22);

    app.run("Helicopter 2-DOF Open-Loop Run").unwrap();
}
