use std::panic;
use std::process;

use zoo_companion::commands::{build_cli, handle_config, handle_state};
use zoo_companion::config::load_config;
use zoo_companion::error::ZooResult;
use zoo_companion::interactive::{restore_terminal, run_interactive_mode};
use zoo_companion::logging::{get_log_file_path, init_logging, log_error, log_panic_info};

async fn run() -> ZooResult<()> {
    if let Err(e) = init_logging() {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        log_panic_info(info);
        if let Some(path) = get_log_file_path() {
            eprintln!("Crash details written to {}", path.display());
        }
        default_hook(info);
    }));

    run_interactive_mode(load_config()).await
}

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("state", sub_matches)) => handle_state(sub_matches),
        Some(("config", sub_matches)) => handle_config(sub_matches),
        Some(("run", _)) | None => run().await,
        _ => {
            eprintln!("Unknown command. Use 'zoo --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&e.to_string());
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
