//! Predicts a cannon shot and prints its impact point and convergence path.
//!
//! Run with `cargo run -p plumb-trajectory --example cannon`.

use plumb_core::Observer;
use plumb_observers::History;
use plumb_solvers::equation::newton::{self, Action, Config, Event, Method};
use plumb_trajectory::{DragModel, Flight, Launch, Predictor, PredictorConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = PredictorConfig {
        show_band: true,
        ..PredictorConfig::default()
    };
    let predictor = Predictor::new(&config)?;
    let launch = Launch::new([0.0, 12.0, 0.0], [0.8, 0.6, 0.0], 70.0)?;

    let prediction = predictor.predict(&launch)?;
    println!(
        "duration {:.4} s, step {:.5} s, {} samples",
        prediction.duration,
        prediction.step,
        prediction.nominal.len()
    );
    if let Some(last) = prediction.nominal.last() {
        println!("nominal ends at ({:.2}, {:.2}, {:.2})", last[0], last[1], last[2]);
    }
    if let Some(band) = &prediction.band {
        if let (Some(near), Some(far)) = (band.near.last(), band.far.last()) {
            println!("band reach {:.2} to {:.2}", near[0], far[0]);
        }
    }

    let model = DragModel::new(config.drag, config.gravity)?;
    let [_, vy, _] = launch.velocity();
    let flight = Flight::new(model, vy, launch.origin()[1] + config.ground_offset);

    let height = |t| flight.height(t);
    let velocity = |t| flight.vertical_velocity(t);
    let acceleration = |t| flight.vertical_acceleration(t);

    let mut history = History::new();
    let solution = newton::solve(
        &height,
        flight.frictionless_guess(),
        Method::halley(&velocity, &acceleration),
        &Config::default(),
        |event: &Event| -> Option<Action> { history.observe(event) },
    )?;

    println!(
        "impact at t = {:.6} s ({:?} after {} iterations)",
        solution.x, solution.status, solution.iters
    );
    for (x, residual) in history.points() {
        println!("  t = {x:.8}, height = {residual:+.3e}");
    }

    Ok(())
}
