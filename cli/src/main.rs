mod util;

use std::{
    fmt::Display,
    fs::File,
    io::{self, BufWriter, Write},
};

use clap::Parser;
use colored::Colorize;
use rand::{rngs::StdRng, SeedableRng};
use sparse_matrix::{driver, loader, random_matrix, Options};
use util::{log_level, run_benchmark, setup_logger, Args, Commands};

/// Unwraps a result or reports the error and exits with status 1.
#[macro_export]
macro_rules! attempt {
    ($e:expr) => {
        match $e {
            Ok(value) => value,
            Err(e) => $crate::exit_with_error(e),
        }
    };
}

pub(crate) fn exit_with_error(error: impl Display) -> ! {
    eprintln!("{} {}", "Error:".red().bold(), error);
    std::process::exit(1);
}

fn main() {
    let args = Args::parse();
    setup_logger(log_level(&args));

    let options = Options {
        multiply_method: args.multiply_method,
        output: args
            .output
            .clone()
            .unwrap_or_else(|| Options::default().output),
    };

    match args.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let output = options.output.clone();
            let succeeded = attempt!(driver::run_session(
                stdin.lock(),
                &mut stdout,
                || File::create(&output),
                &options
            ));
            if !succeeded {
                std::process::exit(1);
            }
            log::info!("Wrote result to {}", options.output.display());
        }
        Commands::Compute {
            operation,
            left,
            right,
            json,
        } => {
            let result = attempt!(driver::perform_operation(operation, left, right, &options));
            println!("Result:");
            println!("{}", result);
            if json {
                let json_str = attempt!(serde_json::to_string_pretty(&result));
                attempt!(std::fs::write(&options.output, json_str));
            } else {
                attempt!(loader::save(&result, &options.output));
            }
            log::info!("Wrote result to {}", options.output.display());
        }
        Commands::Batch { cases } => {
            let cases = attempt!(driver::load_cases(cases));
            let file = attempt!(File::create(&options.output));
            let mut report = BufWriter::new(file);
            let failures = attempt!(driver::run_batch(&cases, &mut report, &options));
            println!(
                "Ran {} cases, {} failed. Report written to {}.",
                cases.len(),
                failures,
                options.output.display()
            );
        }
        Commands::Random {
            rows,
            cols,
            density,
            min,
            max,
            seed,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let matrix = attempt!(random_matrix(&mut rng, rows, cols, density, (min, max)));
            match &args.output {
                Some(path) => attempt!(loader::save(&matrix, path)),
                None => attempt!(loader::write_to(&matrix, &mut io::stdout().lock())),
            }
        }
        Commands::Benchmark {
            left,
            right,
            iterations,
        } => {
            let left = attempt!(loader::from_file(left));
            let right = attempt!(loader::from_file(right));
            run_benchmark(&left, &right, iterations);
        }
        Commands::Show { file } => {
            let matrix = attempt!(loader::from_file(&file));
            println!(
                "{} ({}, {} entries):",
                file.display(),
                matrix.shape(),
                matrix.nnz()
            );
            println!("{}", matrix.dense());
        }
    }
    attempt!(io::stdout().flush());
}
