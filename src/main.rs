use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use rodcut::{Args, Problem, RodCutError, read_catalog, render};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version are not failures
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), RodCutError> {
    let limits = args.limits();
    let rod_length = limits.validate_rod_length(args.rod_length)?;

    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    let input = String::from_utf8_lossy(&buf);
    let ingested = read_catalog(&input, &limits);
    if ingested.truncated {
        log::debug!(
            "solving with the first {} pieces only",
            ingested.catalog.len()
        );
    }

    let solution = Problem::new(rod_length, ingested.catalog).solve()?;
    print!("{}", render(&solution, args.format)?);
    Ok(())
}
