use std::process::ExitCode;

use starship::cli::args;
use starship::io::TerminalIO;
use starship::services::fleet;
use starship::ShipError;

fn main() -> ExitCode {
    let args = args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    let mut output = TerminalIO::new();
    fleet::run(&args, &mut output);

    match output.finish().map_err(ShipError::from) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
