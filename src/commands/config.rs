use clap::ArgMatches;
use colored::*;

use crate::config::{config_path, load_config, save_config, Config};
use crate::error::ZooResult;
use crate::logging::log_info;

pub fn handle_config(matches: &ArgMatches) -> ZooResult<()> {
    let mut config = load_config();

    if apply_overrides(&mut config, matches) {
        let path = save_config(&config)?;
        log_info(&format!("Saved config to {}", path.display()));
        println!("{} {}", "✓ Saved".green(), path.display());
        print_config(&config);
    } else if matches.get_flag("show") {
        print_config(&config);
    } else {
        println!("Usage: zoo config --show or zoo config [--splash-delay MS] [--tick-rate MS] [--seed N] [--skip-splash BOOL]");
    }
    Ok(())
}

/// Copy any flags given on the command line into `config`. Returns whether
/// anything changed.
pub fn apply_overrides(config: &mut Config, matches: &ArgMatches) -> bool {
    let mut changed = false;

    if let Some(delay) = matches.get_one::<u64>("splash-delay") {
        config.splash_delay_ms = *delay;
        changed = true;
    }
    if let Some(rate) = matches.get_one::<u64>("tick-rate") {
        config.tick_rate_ms = *rate;
        changed = true;
    }
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.scan_seed = Some(*seed);
        changed = true;
    }
    if let Some(skip) = matches.get_one::<bool>("skip-splash") {
        config.skip_splash = *skip;
        changed = true;
    }
    changed
}

fn print_config(config: &Config) {
    if let Some(path) = config_path() {
        println!("{} {}", "Config file:".bold(), path.display());
    }
    println!("  splash delay  {} ms", config.splash_delay_ms);
    println!("  tick rate     {} ms", config.tick_rate_ms);
    println!("  skip splash   {}", config.skip_splash);
    match config.scan_seed {
        Some(seed) => println!("  scan seed     {}", seed),
        None => println!("  scan seed     {}", "default".dimmed()),
    }
    println!("  effective     {}", config.effective_scan_seed());
}
