//! Write one message through a leveled logger from the command line.
//! Config comes from the environment and a dotenv file; flags override it.

use std::process::ExitCode;

use mts_logger::args::{self, Args, USAGE};
use mts_logger::{Config, Error, LevelLogger};

fn run(args: &Args, loaded: Config) -> Result<(), Error> {
    let cfg = args.overlay(loaded);
    let logger = LevelLogger::from_config(&cfg);
    match args.level {
        Some(level) => logger.write(level, &args.message),
        None => logger.log(&args.message),
    }
}

fn main() -> ExitCode {
    let args = match args::parse_cli_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("mtslog: {}", e);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    match run(&args, Config::load(args.config_path.clone())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mtslog: {}", e);
            ExitCode::from(if e.is_io() { 1 } else { 2 })
        }
    }
}
