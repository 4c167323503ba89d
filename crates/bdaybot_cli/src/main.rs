//! CLI smoke and ops entry point.
//!
//! # Responsibility
//! - Verify `bdaybot_core` linkage with a deterministic version probe.
//! - Run the one-time store initialization embedders must perform before
//!   first use.

use bdaybot_core::RecordStore;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None => {
            println!("bdaybot_core version={}", bdaybot_core::core_version());
            println!("usage: bdaybot_cli init [store-path]");
            ExitCode::SUCCESS
        }
        Some("init") => {
            let path = args
                .get(1)
                .map(String::as_str)
                .unwrap_or(bdaybot_core::DEFAULT_STORE_FILE);
            init_store(path)
        }
        Some(other) => {
            eprintln!("unknown command `{other}`; expected `init`");
            ExitCode::FAILURE
        }
    }
}

fn init_store(path: &str) -> ExitCode {
    let store = RecordStore::new(path);

    match store.is_initialized() {
        Ok(true) => {
            eprintln!("store at {path} is already initialized");
            return ExitCode::FAILURE;
        }
        Ok(false) => {}
        Err(err) => {
            eprintln!("failed to inspect store at {path}: {err}");
            return ExitCode::FAILURE;
        }
    }

    match store.initialize() {
        Ok(()) => {
            println!("initialized store at {path}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to initialize store at {path}: {err}");
            ExitCode::FAILURE
        }
    }
}
