use std::process::ExitCode;

use slack_dump::cli::run;
use slack_dump::error::ConfigError;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {:#}", err);
            if err.downcast_ref::<ConfigError>().is_some() {
                eprintln!();
                eprintln!("Use --help for usage information");
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
