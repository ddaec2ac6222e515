use clap::ArgMatches;

use crate::error::ZooResult;
use crate::formatting::format_state;
use crate::store::Store;
use crate::zoo_error;

/// Print the state a fresh session starts from.
pub fn handle_state(matches: &ArgMatches) -> ZooResult<()> {
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");

    println!("{}", render_state(format)?);
    Ok(())
}

pub fn render_state(format: &str) -> ZooResult<String> {
    if !matches!(format, "text" | "json") {
        return Err(zoo_error!(
            InvalidInput,
            "Unknown format '{}', expected 'text' or 'json'",
            format
        ));
    }
    format_state(Store::new().state(), format)
}
