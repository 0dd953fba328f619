//! Wheel of Names entry point
//!
//! On the web the library's `WheelHandle` drives everything. Natively this
//! spins once over the names given on the command line and prints the winner.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};
    use wheel_of_names::{Settings, SpinRequest, WheelSession};

    env_logger::init();
    log::info!("Wheel of Names (native) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let names: Vec<String> = if args.is_empty() {
        ["Alice", "Bob", "Carol", "Dave"].map(String::from).to_vec()
    } else {
        args
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    log::info!("Using seed: {}", seed);

    let settings = Settings::load();
    let mut session = WheelSession::from_settings(&settings, seed);
    for name in &names {
        if let Err(e) = session.add_name(name) {
            eprintln!("Skipping {:?}: {}", name, e);
        }
    }

    let target = match session.spin() {
        Ok(SpinRequest::Started { target }) => target,
        Ok(SpinRequest::Ignored) => return,
        Err(e) => {
            eprintln!("Cannot spin: {}", e);
            std::process::exit(1);
        }
    };
    println!("Spinning {} names to {:.1}°...", session.roster().len(), target);

    // Step the settle timer at ~60 Hz, as a frame loop would
    const FRAME_MS: u32 = 16;
    loop {
        match session.advance(FRAME_MS) {
            Ok(Some(winner)) => {
                println!("Winner: {} (#{})", winner.label, winner.index + 1);
                break;
            }
            Ok(None) => {}
            Err(e) => {
                eprintln!("Could not resolve winner: {}", e);
                std::process::exit(1);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::start, this is just to satisfy the compiler
}
