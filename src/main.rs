//! Linked Dots entry point
//!
//! Native builds run the simulation headless in real time and print a JSON
//! summary. The browser build is driven through the exported `LinkedDots` type.
//!
//! Usage: `linked-dots [config.json] [--frames N] [--dump]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> Result<(), Box<dyn std::error::Error>> {
    use linked_dots::platform::native::run_for;
    use linked_dots::{CommandBuffer, SimulationClock, SimulationConfig};

    let mut config_path = None;
    let mut frames: u64 = 120;
    let mut dump = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--frames" => {
                let value = args.next().ok_or("--frames needs a value")?;
                frames = value.parse()?;
            }
            "--dump" => dump = true,
            _ => config_path = Some(arg),
        }
    }

    let config = match config_path {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    log::info!("Linked Dots (native) starting...");
    let mut clock = SimulationClock::new(&config)?;
    let mut renderer = CommandBuffer::new();

    let summary = run_for(&mut clock, &mut renderer, frames);
    clock.stop();

    println!("{}", serde_json::to_string_pretty(&summary)?);
    if dump {
        println!("{}", serde_json::to_string_pretty(&renderer.commands)?);
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser entry point is the exported `LinkedDots` type
}
