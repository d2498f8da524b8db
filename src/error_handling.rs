use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Please enter a number between 1 and {0}")]
    selection_hint(usize),

    #[error("{0} is not a valid selection.")]
    invalid_selection(String),

    #[error("No input.")]
    input_absent,

    #[error("Invalid input.")]
    no_operands,

    #[error("Too few or too many inputs entered.")]
    arity_mismatch,

    #[error("Denominator must be non zero.")]
    zero_denominator,

    #[error("Invalid input: {0}.")]
    malformed_operand(String),

    #[error("Too many decimal points in expression: {0}.")]
    extra_decimal_points(String),

    #[error("Error in converting values.")]
    conversion_failure,

    #[error("Invalid input.")]
    outside_domain,

    #[error("Invalid default decimals setting.")]
    decimals_not_a_number,

    #[error("Default decimals setting must be between 0 to 4")]
    decimals_out_of_range,
}

pub type Result<T> = std::result::Result<T, CalcError>;
