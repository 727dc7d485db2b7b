//! Operand tokenizing for path commands
//!
//! Operands are read straight out of the path string, starting just after a
//! command letter. Digits, `.` and `-` build up a number; a space or comma
//! ends it; anything else ends the operand list.

use epicycles_core::PathError;

/// Characters that may appear inside a number
pub(crate) fn is_number_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.' || ch == '-'
}

/// Characters that end a number without ending the operand list
fn is_separator(ch: char) -> bool {
    ch == ' ' || ch == ','
}

/// Read the numbers following the command at `command_index` (a char index)
///
/// Empty buffers, as produced by repeated separators, are skipped. A buffer
/// that is not a valid float fails with [`PathError::InvalidNumber`].
pub fn extract_numbers(path_data: &str, command_index: usize) -> Result<Vec<f64>, PathError> {
    let mut numbers = Vec::new();
    let mut current = String::new();

    for ch in path_data.chars().skip(command_index + 1) {
        if is_number_char(ch) {
            current.push(ch);
        } else if is_separator(ch) {
            flush(&mut current, &mut numbers, command_index)?;
        } else {
            break;
        }
    }
    flush(&mut current, &mut numbers, command_index)?;

    Ok(numbers)
}

fn flush(buffer: &mut String, numbers: &mut Vec<f64>, position: usize) -> Result<(), PathError> {
    if buffer.is_empty() {
        return Ok(());
    }
    let value = buffer
        .parse::<f64>()
        .map_err(|_| PathError::InvalidNumber {
            token: buffer.clone(),
            position,
        })?;
    numbers.push(value);
    buffer.clear();
    Ok(())
}

/// Group a flat operand list into coordinate pairs
///
/// Returns `None` when the count is odd.
pub fn pair_up(numbers: &[f64]) -> Option<Vec<(f64, f64)>> {
    if numbers.len() % 2 != 0 {
        return None;
    }
    Some(numbers.chunks_exact(2).map(|c| (c[0], c[1])).collect())
}
