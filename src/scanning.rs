use crate::error_handling::*;

use log::debug;

fn is_operand_character(character: char) -> bool {
    character.is_ascii_digit() || character == '-' || character == '.'
}

fn count_digits(characters: &[char], start: usize) -> usize {
    characters[start..]
        .iter()
        .take_while(|character| character.is_ascii_digit())
        .count()
}

// A candidate starts with an optional minus that must be followed by at
// least one digit; a decimal point is consumed only when more digits
// follow it. Returns the index one past the candidate.
fn scan_operand(characters: &[char], start: usize) -> Option<usize> {
    let mut index = start;

    if characters.get(index) == Some(&'-') {
        index += 1;
    }

    let digits = count_digits(characters, index);
    if digits == 0 {
        return None;
    }
    index += digits;

    if characters.get(index) == Some(&'.') {
        let fraction = count_digits(characters, index + 1);
        if fraction > 0 {
            index += 1 + fraction;
        }
    }

    Some(index)
}

pub fn extract_operands(input: &str) -> Vec<String> {
    let characters: Vec<char> = input.chars().collect();
    let mut candidates = Vec::new();
    let mut index = 0;

    while index < characters.len() {
        match scan_operand(&characters, index) {
            Some(end) => {
                candidates.push(characters[index..end].iter().collect());
                index = end;
            }
            None => index += 1,
        }
    }

    debug!("extracted {} candidate operand(s)", candidates.len());
    candidates
}

pub fn validate(candidates: &[String]) -> Vec<CalcError> {
    let mut violations = Vec::new();

    for candidate in candidates {
        if !candidate.chars().all(is_operand_character) {
            violations.push(CalcError::malformed_operand(candidate.clone()));
        }

        let minus_count = candidate.matches('-').count();
        if minus_count > 1 || (minus_count == 1 && !candidate.starts_with('-')) {
            violations.push(CalcError::malformed_operand(candidate.clone()));
        }

        if candidate.matches('.').count() > 1 {
            violations.push(CalcError::extra_decimal_points(candidate.clone()));
        }
    }

    violations
}
