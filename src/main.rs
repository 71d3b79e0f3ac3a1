//! Brickfall headless demo
//!
//! Runs the engine in idle/demo mode at a phone-sized play area and prints
//! the final snapshot as JSON. Usage: `brickfall [config.json] [frames]`.

#[cfg(not(target_arch = "wasm32"))]
use brickfall::{Engine, GameConfig, PlayArea, SafeAreaInsets, TickDriver};

/// Frames simulated when none are given (one minute at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FRAMES: u32 = 3600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brickfall (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };
    let frames = args
        .next()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_FRAMES);

    // Typical notched phone in portrait
    let insets = SafeAreaInsets {
        top: 47.0,
        bottom: 34.0,
        ..Default::default()
    };
    let area = PlayArea::from_display(390.0, 844.0, insets);

    let mut engine = match Engine::new(config, area) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    engine.set_idle_mode(true);
    engine.start_session();

    let mut driver = TickDriver::new();
    driver.start();
    for _ in 0..frames {
        if driver.on_frame(&mut engine).is_none() {
            break;
        }
    }
    driver.stop();

    let snapshot = engine.snapshot();
    log::info!(
        "Finished: level {}, score {}, {} bricks standing",
        snapshot.level,
        snapshot.score,
        snapshot.bricks.iter().filter(|b| !b.destroyed).count()
    );
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config(path: &str) -> Result<GameConfig, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(GameConfig::from_json(&json)?)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly; there is no standalone web binary
}
