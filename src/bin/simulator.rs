use kiss3d::light::Light;
use kiss3d::window::Window;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rust_solar::config::{TICK_RATE, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use rust_solar::gui::Simulation;
use rust_solar::log_utils::start_logger;
use rust_solar::model::SolarSystem;

fn main() -> anyhow::Result<()> {
    let _logger = start_logger()?;

    let mut rng = StdRng::from_entropy();
    let system = SolarSystem::new(&mut rng)?;

    let mut window = Window::new_with_size(WINDOW_TITLE, WINDOW_WIDTH, WINDOW_HEIGHT);
    window.set_light(Light::StickToCamera);
    window.set_background_color(0.0, 0.0, 0.0);
    window.set_framerate_limit(Some(TICK_RATE));

    log::info!(
        "Starting {} at {} ticks per second",
        if cfg!(feature = "realistic-scale") {
            "realistic scale"
        } else {
            "visual scale"
        },
        TICK_RATE
    );
    let simulation = Simulation::new(system, rng, &mut window);
    window.render_loop(simulation);

    log::info!("Window closed");
    Ok(())
}
