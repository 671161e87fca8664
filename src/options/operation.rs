use std::str::FromStr;

use clap::ValueEnum;
use strum::Display;

use super::Options;
use crate::{
    matrix::SparseMatrix,
    util::{MatrixError, Result},
};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Display)]
#[clap(rename_all = "kebab-case")]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub fn apply(
        &self,
        left: &SparseMatrix,
        right: &SparseMatrix,
        options: &Options,
    ) -> Result<SparseMatrix> {
        match self {
            Operation::Add => left.add(right),
            Operation::Subtract => left.subtract(right),
            Operation::Multiply => left.multiply_with(right, options.multiply_method),
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
        }
    }
}

/// Case-insensitive, surrounding whitespace is ignored.
impl FromStr for Operation {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            _ => Err(MatrixError::InvalidOperation(s.trim().to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("ADD".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!(" Subtract\n".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!("multiply".parse::<Operation>().unwrap(), Operation::Multiply);
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        let error = "divide".parse::<Operation>().unwrap_err();
        assert!(matches!(error, MatrixError::InvalidOperation(ref name) if name == "divide"));
        assert_eq!(
            error.to_string(),
            "Invalid operation \"divide\". Use \"add\", \"subtract\", or \"multiply\"."
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for operation in [Operation::Add, Operation::Subtract, Operation::Multiply] {
            assert_eq!(operation.to_string().parse::<Operation>().unwrap(), operation);
        }
    }

    #[test]
    fn test_apply_dispatches() {
        let a = SparseMatrix::from_triples(1, 1, vec![(0, 0, 3)]).unwrap();
        let b = SparseMatrix::from_triples(1, 1, vec![(0, 0, 2)]).unwrap();
        let options = Options::default();
        let value = |operation: Operation| {
            operation.apply(&a, &b, &options).unwrap().get(0, 0).unwrap()
        };
        assert_eq!(value(Operation::Add), 5);
        assert_eq!(value(Operation::Subtract), 1);
        assert_eq!(value(Operation::Multiply), 6);
    }
}
