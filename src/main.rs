//! Strider entry point
//!
//! Initializes logging, loads settings, and runs the window loop.
//! Exits 0 on a normal quit, 1 on a fatal startup failure.

use strider::{Settings, app};

fn main() {
    env_logger::init();
    log::info!("Strider starting...");

    let settings = Settings::load();

    if let Err(e) = app::run(settings) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
