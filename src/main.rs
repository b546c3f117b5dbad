use anyhow::Context;
use hello_greeter::core::app;
use hello_greeter::utils::logger;
use hello_greeter::CliConfig;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::from_args(std::env::args_os());

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting hello-greeter");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let result = app::run(&config, &mut io::stdout().lock())
        .context("could not print greeting to stdout");

    // A closed stdout is not a failure of the program itself.
    if let Err(e) = result {
        tracing::warn!("{:#}", e);
    }

    ExitCode::SUCCESS
}
