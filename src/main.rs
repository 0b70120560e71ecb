use bounce2d::{AsciiCanvas, ConfigError, FrameDriver, SimulationConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process;
use std::thread;
use std::time::Duration;

fn main() {
    env_logger::init();
    log::info!("Starting bounce2d");

    let config = match SimulationConfig::load() {
        Ok(config) => config,
        Err(e @ ConfigError::Invalid(_)) => {
            log::error!("{}", e);
            process::exit(1);
        }
        Err(e) => {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            SimulationConfig::default()
        }
    };

    let mut rng = match config.run.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let world = config.build_world(&mut rng);
    log::info!(
        "World of {} x {} with {} bodies",
        world.width(),
        world.height(),
        world.len()
    );

    let canvas = AsciiCanvas::new(config.run.columns, config.run.rows, world.width(), world.height());
    let mut driver = FrameDriver::new(world, canvas);
    let interval = Duration::from_millis(config.run.frame_interval_ms);

    let mut collisions = 0;
    for _ in 0..config.run.frames {
        collisions += driver.tick().collision_count();
        // move the cursor home before drawing the next frame
        print!("\x1b[H{}", driver.sink());
        println!("frame {:>5}  total collisions {:>6}", driver.frame(), collisions);
        thread::sleep(interval);
    }

    log::info!("Simulated {} frames, {} collisions", driver.frame(), collisions);
}
