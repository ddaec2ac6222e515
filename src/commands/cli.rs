use clap::{value_parser, Arg, ArgAction, Command};

/// The `zoo` command line.
pub fn build_cli() -> Command {
    Command::new("zoo")
        .about("Zoo Companion - plan, explore and remember your zoo visit from the terminal")
        .version("1.0.0")
        .subcommand(Command::new("run").about("Start the interactive companion (default)"))
        .subcommand(
            Command::new("state")
                .about("Print the state a fresh session starts with")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: text or json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Show or change settings")
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the current configuration")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("splash-delay")
                        .long("splash-delay")
                        .value_name("MS")
                        .help("How long the splash screen stays up")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("tick-rate")
                        .long("tick-rate")
                        .value_name("MS")
                        .help("Event poll interval, at least 1")
                        .value_parser(value_parser!(u64).range(1..)),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_name("N")
                        .help("Seed for the animal scanner")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("skip-splash")
                        .long("skip-splash")
                        .value_name("BOOL")
                        .help("Start on the welcome slides")
                        .value_parser(value_parser!(bool)),
                ),
        )
}
