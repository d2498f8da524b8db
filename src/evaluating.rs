use crate::error_handling::*;
use crate::parsing::*;

use log::debug;

// tan() near an odd multiple of 90 degrees comes back as a huge finite
// value instead of an infinity; anything past this cutoff is treated as
// undefined. The cutoff applies to tangent only.
const TANGENT_CUTOFF: f64 = 600000.0;

pub fn evaluate(operation: Operation, operands: &[Number]) -> Result<Number> {
    use Operation::*;
    match operation {
        addition => Ok(add(operands[0], operands[1])),
        subtraction => Ok(subtract(operands[0], operands[1])),
        multiplication => Ok(multiply(operands[0], operands[1])),
        division => Ok(divide(operands[0], operands[1])),
        square_root => square_root_of(operands[0]),
        logarithm => logarithm_of(operands[0]),
        sine => Ok(Number::real(radians(operands[0]).sin())),
        cosine => Ok(Number::real(radians(operands[0]).cos())),
        tangent => tangent_of(operands[0]),
    }
}

fn add(left: Number, right: Number) -> Number {
    match (left, right) {
        (Number::integer(a), Number::integer(b)) => Number::integer(a + b),
        _ => Number::real(left.as_real() + right.as_real()),
    }
}

fn subtract(left: Number, right: Number) -> Number {
    match (left, right) {
        (Number::integer(a), Number::integer(b)) => Number::integer(a - b),
        _ => Number::real(left.as_real() - right.as_real()),
    }
}

fn multiply(left: Number, right: Number) -> Number {
    match (left, right) {
        (Number::integer(a), Number::integer(b)) => Number::integer(a * b),
        _ => Number::real(left.as_real() * right.as_real()),
    }
}

// True division; the denominator has already been checked for zero.
fn divide(left: Number, right: Number) -> Number {
    Number::real(left.as_real() / right.as_real())
}

fn square_root_of(operand: Number) -> Result<Number> {
    let value = operand.as_real();
    if value < 0.0 {
        return Err(CalcError::outside_domain);
    }
    Ok(Number::real(value.sqrt()))
}

fn logarithm_of(operand: Number) -> Result<Number> {
    let value = operand.as_real();
    if value < 0.0 {
        return Err(CalcError::outside_domain);
    }
    Ok(Number::real(value.log10()))
}

fn tangent_of(operand: Number) -> Result<Number> {
    let value = radians(operand).tan();
    if value.abs() > TANGENT_CUTOFF {
        debug!("tangent of {} degrees rejected by the cutoff", operand.as_real());
        return Err(CalcError::outside_domain);
    }
    Ok(Number::real(value))
}

fn radians(operand: Number) -> f64 {
    operand.as_real().to_radians()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn close(result: Result<Number>, wanted: f64) -> bool {
        match result {
            Ok(value) => (value.as_real() - wanted).abs() < TOLERANCE,
            Err(_) => false,
        }
    }

    #[test]
    fn integer_arithmetic_stays_integer() {
        let ten_and_five = [Number::integer(10), Number::integer(5)];
        assert_eq!(
            evaluate(Operation::addition, &ten_and_five),
            Ok(Number::integer(15))
        );
        assert_eq!(
            evaluate(Operation::subtraction, &ten_and_five),
            Ok(Number::integer(5))
        );
        assert_eq!(
            evaluate(Operation::multiplication, &ten_and_five),
            Ok(Number::integer(50))
        );
    }

    #[test]
    fn a_real_operand_makes_the_result_real() {
        let operands = [Number::real(2.5), Number::integer(1)];
        assert_eq!(
            evaluate(Operation::subtraction, &operands),
            Ok(Number::real(1.5))
        );
    }

    #[test]
    fn division_is_always_real() {
        let operands = [Number::integer(10), Number::integer(5)];
        assert_eq!(
            evaluate(Operation::division, &operands),
            Ok(Number::real(2.0))
        );
    }

    #[test]
    fn square_root_rejects_negatives() {
        assert_eq!(
            evaluate(Operation::square_root, &[Number::integer(-4)]),
            Err(CalcError::outside_domain)
        );
        assert!(close(
            evaluate(Operation::square_root, &[Number::real(2.25)]),
            1.5
        ));
        assert!(close(
            evaluate(Operation::square_root, &[Number::integer(0)]),
            0.0
        ));
    }

    #[test]
    fn logarithm_rejects_negatives() {
        assert_eq!(
            evaluate(Operation::logarithm, &[Number::real(-0.5)]),
            Err(CalcError::outside_domain)
        );
        assert!(close(
            evaluate(Operation::logarithm, &[Number::integer(100)]),
            2.0
        ));
    }

    #[test]
    fn trig_operands_are_degrees() {
        assert!(close(evaluate(Operation::sine, &[Number::integer(90)]), 1.0));
        assert!(close(
            evaluate(Operation::cosine, &[Number::integer(60)]),
            0.5
        ));
        assert!(close(
            evaluate(Operation::tangent, &[Number::integer(45)]),
            1.0
        ));
    }

    #[test]
    fn tangent_near_a_singularity_is_rejected() {
        assert_eq!(
            evaluate(Operation::tangent, &[Number::integer(90)]),
            Err(CalcError::outside_domain)
        );
        assert_eq!(
            evaluate(Operation::tangent, &[Number::integer(270)]),
            Err(CalcError::outside_domain)
        );
    }
}
