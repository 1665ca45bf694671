//! Headless replay entry point.

use sketchboard_app::{Replay, ReplayError, load_script};
use sketchboard_core::BoardConfig;
use std::process::ExitCode;

const USAGE: &str = "usage: sketchboard <script.json> [config.json]";

fn run(script_path: &str, config_path: Option<&str>) -> Result<(), ReplayError> {
    let config = match config_path {
        Some(path) => BoardConfig::load(path)?,
        None => BoardConfig::default(),
    };
    let steps = load_script(script_path)?;

    let mut replay = Replay::new(config);
    replay.run(&steps);
    println!("{}", replay.render_json()?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting Sketchboard replay");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(script_path) = args.first() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match run(script_path, args.get(1).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Replay failed: {}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
