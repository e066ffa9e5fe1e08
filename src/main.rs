/*!
 * Command-line interface for dirclip
 */

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing::debug;

use dirclip::config::{Args, Config};
use dirclip::{init_logging, SystemClipboard, CONFIRMATION};

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(shell) = args.generate {
        generate(shell, &mut Args::command(), "dirclip", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    init_logging(args.verbose);

    let result = Config::from_args(&args)
        .and_then(|config| dirclip::run(&config, &SystemClipboard::detect()));

    match result {
        Ok(_) => {
            println!("{}", CONFIRMATION);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
