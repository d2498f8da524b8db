use crate::error_handling::*;
use crate::scanning::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    addition,
    subtraction,
    multiplication,
    division,
    square_root,
    logarithm,
    sine,
    cosine,
    tangent,
}

impl Operation {
    // Menu order; selection numbers 1 through 9 index into this table.
    pub const ALL: [Operation; 9] = [
        Operation::addition,
        Operation::subtraction,
        Operation::multiplication,
        Operation::division,
        Operation::square_root,
        Operation::logarithm,
        Operation::sine,
        Operation::cosine,
        Operation::tangent,
    ];

    pub fn from_selection(selection: usize) -> Option<Self> {
        Self::ALL.get(selection.checked_sub(1)?).copied()
    }

    pub fn symbol(&self) -> &'static str {
        use Operation::*;
        match self {
            addition => "+",
            subtraction => "-",
            multiplication => "*",
            division => "/",
            square_root => "sqrt",
            logarithm => "log10",
            sine => "sin",
            cosine => "cos",
            tangent => "tan",
        }
    }

    pub fn label(&self) -> &'static str {
        use Operation::*;
        match self {
            addition => "Add",
            subtraction => "Subtract",
            multiplication => "Multiply",
            division => "Divide",
            square_root => "Square Root",
            logarithm => "Logarithm",
            sine => "Sine",
            cosine => "Cosine",
            tangent => "Tangent",
        }
    }

    pub fn arity(&self) -> usize {
        use Operation::*;
        match self {
            addition | subtraction | multiplication | division => 2,
            _ => 1,
        }
    }

    pub fn prompt(&self) -> &'static str {
        use Operation::*;
        match self {
            addition | subtraction | multiplication | division => {
                "Enter two numbers separated by at least one space: "
            }
            square_root | logarithm => "Enter one number >= 0: ",
            sine | cosine | tangent => "Enter number of degrees: ",
        }
    }
}

// The tag is fixed here, at coercion time, and doubles as the formatting
// mode: integers print as whole numbers, reals as fixed-decimal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    integer(i64),
    real(f64),
}

impl Number {
    pub fn as_real(&self) -> f64 {
        match self {
            Number::integer(value) => *value as f64,
            Number::real(value) => *value,
        }
    }
}

fn coerce(candidate: &str) -> Result<Number> {
    if candidate.contains('.') {
        candidate
            .parse()
            .map(Number::real)
            .map_err(|_| CalcError::conversion_failure)
    } else {
        candidate
            .parse()
            .map(Number::integer)
            .map_err(|_| CalcError::conversion_failure)
    }
}

// "0", "0.0" and "-0" all count as a zero denominator.
fn denominator_is_zero(candidate: &str) -> bool {
    candidate.parse::<f64>().map_or(false, |value| value == 0.0)
}

pub fn parse(input: &str, operation: Operation) -> std::result::Result<Vec<Number>, Vec<CalcError>> {
    let candidates = extract_operands(input);
    if candidates.is_empty() {
        return Err(vec![CalcError::no_operands]);
    }

    if candidates.len() != operation.arity() {
        return Err(vec![CalcError::arity_mismatch]);
    }

    if operation == Operation::division && denominator_is_zero(&candidates[1]) {
        return Err(vec![CalcError::zero_denominator]);
    }

    let violations = validate(&candidates);
    if !violations.is_empty() {
        return Err(violations);
    }

    let mut operands = Vec::with_capacity(candidates.len());
    for candidate in &candidates {
        operands.push(coerce(candidate).map_err(|error| vec![error])?);
    }
    Ok(operands)
}
