/*
 * Boid & Ideal Gas Simulation
 *
 * This application hosts two interactive simulations in one window:
 * 1. Boids: prey flock by separation, alignment and cohesion, flee predators
 *    and steer around obstacles, while predators chase and catch the prey
 * 2. Ideal gas: hard discs of several masses collide elastically inside a tank,
 *    with a live speed histogram per particle type
 *
 * Set RUST_LOG (for example `RUST_LOG=boidsim=debug`) to see simulation logs.
 */

use boidsim::app;
use tracing_subscriber::EnvFilter;

fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    nannou::app(app::model)
        .update(app::update)
        .run();

    Ok(())
}
