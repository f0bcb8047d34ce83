// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use file_metadata::{app, cli, logging};

fn main() -> ExitCode {
    let config = match cli::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(&config) {
        eprintln!("[warn] logging disabled: {e:#}");
    }

    match app::run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
