use clap::Parser;
use clap::error::ErrorKind;
use mockf::{Mockf, USAGE};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize tracing based on RUST_LOG env var, keeping stdout for generated code
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Mockf::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument => {
                eprint!("{USAGE}");
                return ExitCode::from(2);
            }
            _ => err.exit(),
        },
    };

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(2)
        }
    }
}
