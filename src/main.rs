use std::path::PathBuf;

use clap::Parser;
use kiss3d::light::Light;
use kiss3d::window::Window;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use solar_orrery::gui::Simulation;
use solar_orrery::model::planets;

#[derive(Debug, Parser)]
struct Args {
    /// Seed for the initial orbit phases and the belt scatter. Every run
    /// gets a fresh layout unless this is set.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of points in the asteroid belt.
    #[arg(long, default_value_t = planets::ASTEROID_COUNT)]
    asteroids: usize,

    /// Directory holding the texture images.
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let orrery = planets::build_solar_system(args.asteroids, &mut rng)
        .expect("planet table holds invalid parameters");
    info!(
        "built solar system: {} bodies, {} belt points",
        orrery.bodies().count(),
        args.asteroids
    );

    let mut window = Window::new("Solar System");
    window.set_framerate_limit(Some(60));
    window.set_light(Light::StickToCamera);
    window.set_background_color(0.01, 0.01, 0.02);

    let simulation = Simulation::new(orrery, &mut window, args.assets);
    window.render_loop(simulation);
}
