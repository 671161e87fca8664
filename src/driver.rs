//! Sequencing of load, compute and report steps, for interactive and batch use.
//!
//! Results are only handed to an output sink once the whole operation succeeded, so a failed
//! run never leaves partial output behind.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    loader,
    matrix::SparseMatrix,
    options::{Operation, Options},
    util::{MatrixError, Result},
};

/// Loads both matrices from their files and applies `operation` to them.
pub fn perform_operation<P, Q>(
    operation: Operation,
    left: P,
    right: Q,
    options: &Options,
) -> Result<SparseMatrix>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let left = loader::from_file(left)?;
    let right = loader::from_file(right)?;
    log::info!(
        "Computing {} of a {} and a {} matrix.",
        operation.noun(),
        left.shape(),
        right.shape()
    );
    operation.apply(&left, &right, options)
}

/// Runs one interactive session: asks for an operation and two file paths on `terminal`,
/// reading the answers from `input`.
///
/// On success the result is printed and written to the sink returned by `open_sink`. On failure
/// a single `Error: ...` line is printed and the sink is never opened. Returns whether the
/// session succeeded; only errors of the terminal itself are returned as `Err`.
pub fn run_session<R, T, W, F>(
    mut input: R,
    terminal: &mut T,
    open_sink: F,
    options: &Options,
) -> io::Result<bool>
where
    R: BufRead,
    T: Write,
    W: Write,
    F: FnOnce() -> io::Result<W>,
{
    let operation = prompt(
        &mut input,
        terminal,
        "Enter operation (add, subtract, multiply): ",
    )?;
    let left = prompt(&mut input, terminal, "Enter first matrix file path: ")?;
    let right = prompt(&mut input, terminal, "Enter second matrix file path: ")?;

    let outcome = operation
        .parse::<Operation>()
        .and_then(|operation| perform_operation(operation, &left, &right, options))
        .map(|result| result.to_text());

    match outcome {
        Ok(text) => {
            writeln!(terminal, "Result:")?;
            writeln!(terminal, "{}", text)?;
            match deliver(&text, open_sink) {
                Ok(()) => Ok(true),
                Err(e) => report_error(terminal, e),
            }
        }
        Err(e) => report_error(terminal, e),
    }
}

/// One case of a batch run. Relative paths are resolved against the case file's directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchCase {
    pub description: String,
    pub operation: String,
    pub left: PathBuf,
    pub right: PathBuf,
}

/// Reads a JSON array of [`BatchCase`]s.
pub fn load_cases<P: AsRef<Path>>(path: P) -> Result<Vec<BatchCase>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| MatrixError::InputError {
        path: path.display().to_string(),
        source,
    })?;
    let reader = BufReader::new(file);

    log::debug!("Deserializing batch cases from {}", path.display());
    let mut cases: Vec<BatchCase> = serde_json::from_reader(reader)?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    for case in &mut cases {
        case.left = base.join(&case.left);
        case.right = base.join(&case.right);
    }
    Ok(cases)
}

/// Runs every case, writing a report section per case to `report`. Returns the number of cases
/// that failed. Only failures to write the report abort the run.
pub fn run_batch<W: Write>(cases: &[BatchCase], report: &mut W, options: &Options) -> Result<usize> {
    let mut failures = 0;
    for case in cases {
        log::info!("Running case \"{}\".", case.description);

        let outcome = case
            .operation
            .parse::<Operation>()
            .and_then(|operation| perform_operation(operation, &case.left, &case.right, options));
        if let Err(e) = &outcome {
            log::warn!("Case \"{}\" failed: {}", case.description, e);
            failures += 1;
        }
        write_section(report, &case.description, &outcome).map_err(MatrixError::OutputError)?;
    }
    report.flush().map_err(MatrixError::OutputError)?;

    log::info!("{} of {} cases failed.", failures, cases.len());
    Ok(failures)
}

fn write_section<W: Write>(
    report: &mut W,
    description: &str,
    outcome: &Result<SparseMatrix>,
) -> io::Result<()> {
    writeln!(report, "{}", description)?;
    match outcome {
        Ok(result) => {
            writeln!(report, "Result:")?;
            writeln!(report, "{}", result)?;
        }
        Err(e) => {
            writeln!(report, "Error: {}", e)?;
            writeln!(report)?;
        }
    }
    writeln!(report, "{}", "=".repeat(40))
}

fn prompt<R: BufRead, T: Write>(input: &mut R, terminal: &mut T, question: &str) -> io::Result<String> {
    write!(terminal, "{}", question)?;
    terminal.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().to_owned())
}

fn deliver<W: Write, F: FnOnce() -> io::Result<W>>(text: &str, open_sink: F) -> Result<()> {
    open_sink()
        .and_then(|mut sink| {
            sink.write_all(text.as_bytes())?;
            sink.flush()
        })
        .map_err(MatrixError::OutputError)
}

fn report_error<T: Write>(terminal: &mut T, error: MatrixError) -> io::Result<bool> {
    log::debug!("Session failed: {:?}", error);
    writeln!(terminal, "Error: {}", error)?;
    Ok(false)
}
