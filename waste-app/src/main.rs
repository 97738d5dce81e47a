use std::process::ExitCode;

use clap::Parser;

use waste_app::cli::Cli;
use waste_app::{report, shell, util};
use waste_core::Config;

fn main() -> ExitCode {
    util::init_tracing();

    let cli = Cli::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            report::init_error(&Config::default().title, &e);
            return ExitCode::from(e.exit_code());
        }
    };

    let title = config.title.clone();
    match shell::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report::init_error(&title, &e);
            ExitCode::from(e.exit_code())
        }
    }
}
