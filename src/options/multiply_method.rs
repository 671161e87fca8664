use clap::ValueEnum;
use strum::Display;

/// How the entries of the two operands are joined on the inner dimension.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[clap(rename_all = "kebab-case")]
pub enum MultiplyMethod {
    /// Compare every entry of the left operand with every entry of the right one.
    Naive,
    /// Index the right operand by row once, then visit only matching rows.
    #[default]
    Indexed,
}
