use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sparse_matrix::{MultiplyMethod, Operation};

/// CLI for the sparse matrix library: add, subtract and multiply matrices stored as text files.
#[derive(Parser, Debug)]
#[command(version)]
pub(crate) struct Args {
    /// Defaults to an interactive session when omitted.
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Enable [v]erbose debug logging
    #[arg(long, short = 'v', global = true, display_order = 1)]
    pub(crate) debug: bool,

    /// Enable [t]race logging
    #[arg(long, short, global = true, display_order = 2)]
    pub(crate) trace: bool,

    /// Disable logging, [q]uieting output. Takes precedence over debug.
    #[arg(long, short, global = true, display_order = 3)]
    pub(crate) quiet: bool,

    /// Path of the [o]utput file. Results go to output.txt unless stated otherwise per command.
    #[arg(long, short, global = true, display_order = 4)]
    pub(crate) output: Option<PathBuf>,

    /// [M]ethod used to join the operands of a multiplication
    #[arg(long, short = 'm', value_enum, default_value_t = MultiplyMethod::Indexed, global = true, display_order = 11, help_heading = "Arithmetic")]
    pub(crate) multiply_method: MultiplyMethod,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Prompt for an operation and two matrix files, then write the result to the output file.
    Interactive,
    /// Apply an operation to two matrix files and write the result to the output file.
    Compute {
        /// One of add, subtract, multiply (case-insensitive).
        #[arg(value_enum, ignore_case = true)]
        operation: Operation,

        /// Path to the left operand.
        left: PathBuf,

        /// Path to the right operand.
        right: PathBuf,

        /// Write the result as JSON instead of the text format.
        #[arg(long, display_order = 0)]
        json: bool,
    },
    /// Run every case of a JSON case file and write a report to the output file.
    Batch {
        /// Path to a JSON array of {description, operation, left, right} cases.
        cases: PathBuf,
    },
    /// Generate a random sparse matrix. Printed to stdout unless an output file is given.
    Random {
        /// Number of rows
        rows: usize,

        /// Number of columns
        cols: usize,

        /// The fraction of cells holding a value
        #[arg(long, default_value_t = 0.1, display_order = 100, help_heading = "Random Entries")]
        density: f64,

        /// Minimum entry value
        #[arg(long, default_value_t = -9, allow_negative_numbers = true, display_order = 101, help_heading = "Random Entries")]
        min: i64,

        /// Maximum entry value
        #[arg(long, default_value_t = 9, allow_negative_numbers = true, display_order = 102, help_heading = "Random Entries")]
        max: i64,

        /// Seed for reproducible matrices
        #[arg(long, display_order = 103, help_heading = "Random Entries")]
        seed: Option<u64>,
    },
    /// Time both multiplication methods on two matrix files.
    Benchmark {
        /// Path to the left operand.
        left: PathBuf,

        /// Path to the right operand.
        right: PathBuf,

        /// Number of [i]terations over which to average
        #[arg(short, long, default_value_t = 10, display_order = 0)]
        iterations: u32,
    },
    /// Print a matrix file as a dense grid.
    Show {
        /// Path to the matrix file.
        file: PathBuf,
    },
}
