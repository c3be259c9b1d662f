mod cli;

use clap::Parser;
use githubipranges::{CheckResult, Classifier, ClientBuilder, Result};
use log::{debug, info};
use std::process::ExitCode;

/*-------------------------------------------------------------------------------------------------
  Exit Codes
-------------------------------------------------------------------------------------------------*/

const EXIT_GITHUB_ADDRESS: u8 = 0;
const EXIT_NOT_GITHUB_ADDRESS: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn exit_code(outcome: &Result<CheckResult>) -> u8 {
    match outcome {
        Ok(result) if result.is_member => EXIT_GITHUB_ADDRESS,
        Ok(_) => EXIT_NOT_GITHUB_ADDRESS,
        Err(_) => EXIT_ERROR,
    }
}

/*-------------------------------------------------------------------------------------------------
  Logging
-------------------------------------------------------------------------------------------------*/

fn init_logging(args: &cli::Args) -> std::result::Result<(), log::SetLoggerError> {
    stderrlog::new()
        .module(module_path!())
        .quiet(args.silent || args.verbose.is_silent())
        .verbosity(args.verbose.log_level_filter())
        .init()
}

/*-------------------------------------------------------------------------------------------------
  Main CLI Function
-------------------------------------------------------------------------------------------------*/

fn main() -> ExitCode {
    let args = cli::Args::parse();

    if let Err(error) = init_logging(&args) {
        if !args.silent {
            eprintln!("Warning: logging disabled: {error}");
        }
    }

    debug!("{:?}", args);

    // Command-line options take precedence over environment variables
    let mut client_builder = ClientBuilder::new();
    if let Some(url) = &args.url {
        client_builder.url(url);
    }
    if let Some(timeout) = args.timeout {
        client_builder.timeout(timeout);
    }
    let client = client_builder.build();
    info!("GitHub meta URL: {}", client.url());

    let classifier = Classifier::new(client);
    let outcome = classifier.check(&args.ip_address);

    if !args.silent {
        match &outcome {
            Ok(result) => cli::output::check_result(&args.ip_address, result, args.output),
            Err(error) => eprintln!("Error: {error}"),
        }
    }

    ExitCode::from(exit_code(&outcome))
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
