//! Reading and writing the textual matrix format.
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 1, 5)
//! (2, 2, -1)
//! ```
//!
//! Surrounding whitespace and blank lines are ignored; line numbers in errors count the
//! remaining lines starting at 1.

use std::{
    fs::File,
    io::{BufWriter, ErrorKind, Write},
    path::Path,
    str::FromStr,
};

use crate::{
    matrix::SparseMatrix,
    util::{Location, MatrixError, Result},
};

/// Loads a matrix from a text file. Errors cite `path`.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    log::debug!("Loading matrix from {}", origin);

    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::InvalidData => format_error(&origin, "file is not valid UTF-8".to_owned()),
        _ => MatrixError::InputError {
            path: origin.clone(),
            source,
        },
    })?;
    parse(&text, &origin)
}

/// Parses the text format. `origin` names the source in error messages.
pub fn parse(text: &str, origin: &str) -> Result<SparseMatrix> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < 2 {
        return Err(format_error(origin, "too few lines".to_owned()));
    }

    let rows = parse_dimension(lines[0], "rows", "first", origin)?;
    let cols = parse_dimension(lines[1], "cols", "second", origin)?;
    let mut matrix = SparseMatrix::with_shape(rows, cols);

    for (index, line) in lines.iter().enumerate().skip(2) {
        let number = index + 1;
        let (row, col, value) = parse_entry(line, number, origin)?;
        if row >= rows || col >= cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                shape: matrix.shape(),
                location: Some(Location {
                    origin: origin.to_owned(),
                    line: number,
                }),
            });
        }
        if value != 0 {
            matrix.set(row, col, value)?;
        }
    }

    log::debug!(
        "Parsed a {} matrix with {} entries from {}",
        matrix.shape(),
        matrix.nnz(),
        origin
    );
    Ok(matrix)
}

/// Writes the text format of `matrix` to `writer`.
pub fn write_to<W: Write>(matrix: &SparseMatrix, writer: &mut W) -> Result<()> {
    write!(writer, "{}", matrix)
        .and_then(|()| writer.flush())
        .map_err(MatrixError::OutputError)
}

/// Saves `matrix` to `path` in the text format, replacing any existing file.
pub fn save<P: AsRef<Path>>(matrix: &SparseMatrix, path: P) -> Result<()> {
    let path = path.as_ref();
    log::debug!(
        "Writing {} matrix with {} entries to {}",
        matrix.shape(),
        matrix.nnz(),
        path.display()
    );
    let mut writer = BufWriter::new(File::create(path).map_err(MatrixError::OutputError)?);
    write_to(matrix, &mut writer)
}

impl FromStr for SparseMatrix {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s, "<string>")
    }
}

fn parse_dimension(line: &str, key: &str, position: &str, origin: &str) -> Result<usize> {
    let digits = match line.strip_prefix(key).and_then(|rest| rest.strip_prefix('=')) {
        Some(digits) => digits,
        None => {
            return Err(format_error(
                origin,
                format!("{position} line must start with '{key}='"),
            ))
        }
    };
    if !is_digits(digits) {
        return Err(format_error(
            origin,
            format!("{key} value must be a non-negative integer"),
        ));
    }
    digits
        .parse()
        .map_err(|_| format_error(origin, format!("{key} value is too large")))
}

fn parse_entry(line: &str, number: usize, origin: &str) -> Result<(usize, usize, i64)> {
    let inner = match line.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
        Some(inner) => inner,
        None => {
            return Err(format_error(
                origin,
                format!("line {number} must be in (row, col, value) format"),
            ))
        }
    };

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format_error(
            origin,
            format!("line {number} must have exactly 3 values (row, col, value)"),
        ));
    }
    let (row, col, value) = (parts[0], parts[1], parts[2]);
    if !(is_digits(row) && is_digits(col) && is_digits(value.strip_prefix('-').unwrap_or(value)))
    {
        return Err(format_error(
            origin,
            format!("values in line {number} must be integers"),
        ));
    }

    let out_of_range = |_: std::num::ParseIntError| {
        format_error(origin, format!("a value in line {number} is out of range"))
    };
    Ok((
        row.parse().map_err(out_of_range)?,
        col.parse().map_err(out_of_range)?,
        value.parse().map_err(out_of_range)?,
    ))
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn format_error(origin: &str, reason: String) -> MatrixError {
    MatrixError::FormatError {
        origin: origin.to_owned(),
        reason,
    }
}
