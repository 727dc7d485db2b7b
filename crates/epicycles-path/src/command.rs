//! Path command model and the command-level scanner

use crate::tokenizer::{extract_numbers, is_number_char};
use epicycles_core::PathError;
use serde::{Deserialize, Serialize};

/// Supported path commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CubicBezierTo,
    QuadraticBezierTo,
    ClosePath,
}

impl CommandKind {
    /// Map a command letter to its kind, case-insensitively
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'M' => Some(Self::MoveTo),
            'L' => Some(Self::LineTo),
            'H' => Some(Self::HorizontalLineTo),
            'V' => Some(Self::VerticalLineTo),
            'C' => Some(Self::CubicBezierTo),
            'Q' => Some(Self::QuadraticBezierTo),
            'Z' => Some(Self::ClosePath),
            _ => None,
        }
    }

    /// Uppercase letter for this command
    pub fn letter(&self) -> char {
        match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::HorizontalLineTo => 'H',
            Self::VerticalLineTo => 'V',
            Self::CubicBezierTo => 'C',
            Self::QuadraticBezierTo => 'Q',
            Self::ClosePath => 'Z',
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MoveTo => write!(f, "move"),
            Self::LineTo => write!(f, "line"),
            Self::HorizontalLineTo => write!(f, "horizontal line"),
            Self::VerticalLineTo => write!(f, "vertical line"),
            Self::CubicBezierTo => write!(f, "cubic curve"),
            Self::QuadraticBezierTo => write!(f, "quadratic curve"),
            Self::ClosePath => write!(f, "close"),
        }
    }
}

/// One command letter with its operands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathCommandToken {
    pub kind: CommandKind,
    /// Lowercase letter, operands are offsets from the current point
    pub relative: bool,
    /// Flat operand list, grouped into pairs (or scalars for H/V) by the sampler
    pub operands: Vec<f64>,
    /// Char index of the command letter in the source string
    pub position: usize,
}

impl PathCommandToken {
    /// The letter as written in the source
    pub fn letter(&self) -> char {
        let upper = self.kind.letter();
        if self.relative {
            upper.to_ascii_lowercase()
        } else {
            upper
        }
    }

    pub(crate) fn missing_operands(&self) -> PathError {
        PathError::MissingOperands {
            command: self.letter(),
            position: self.position,
        }
    }
}

/// Split a path string into command tokens
///
/// Operand characters and whitespace between commands are skipped; any
/// other character is an [`PathError::UnsupportedCommand`].
pub fn parse_commands(path_data: &str) -> Result<Vec<PathCommandToken>, PathError> {
    let mut commands = Vec::new();

    for (position, ch) in path_data.chars().enumerate() {
        if let Some(kind) = CommandKind::from_letter(ch) {
            let operands = if kind == CommandKind::ClosePath {
                Vec::new()
            } else {
                extract_numbers(path_data, position)?
            };
            commands.push(PathCommandToken {
                kind,
                relative: ch.is_ascii_lowercase(),
                operands,
                position,
            });
        } else if !(is_number_char(ch) || ch == ',' || ch.is_whitespace()) {
            return Err(PathError::UnsupportedCommand {
                command: ch,
                position,
            });
        }
    }

    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_path() {
        let commands = parse_commands("M0,0 l10 0 Z").unwrap();
        assert_eq!(commands.len(), 3);

        assert_eq!(commands[0].kind, CommandKind::MoveTo);
        assert!(!commands[0].relative);
        assert_eq!(commands[0].operands, vec![0.0, 0.0]);

        assert_eq!(commands[1].kind, CommandKind::LineTo);
        assert!(commands[1].relative);
        assert_eq!(commands[1].position, 5);
        assert_eq!(commands[1].letter(), 'l');

        assert_eq!(commands[2].kind, CommandKind::ClosePath);
        assert!(commands[2].operands.is_empty());
    }

    #[test]
    fn test_unsupported_command() {
        let err = parse_commands("M0 0 A 1 1 0 0 1 5 5").unwrap_err();
        assert_eq!(
            err,
            PathError::UnsupportedCommand {
                command: 'A',
                position: 5
            }
        );
    }

    #[test]
    fn test_exponent_is_not_an_operand() {
        let err = parse_commands("L1e5 0").unwrap_err();
        assert!(matches!(
            err,
            PathError::UnsupportedCommand { command: 'e', .. }
        ));
    }

    #[test]
    fn test_multiline_path_data() {
        let commands = parse_commands("M1 1\n\tL2 2\r\n").unwrap();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[1].operands, vec![2.0, 2.0]);
    }

    #[test]
    fn test_letter_round_trip() {
        for letter in "MmLlHhVvCcQqZz".chars() {
            let kind = CommandKind::from_letter(letter).unwrap();
            assert_eq!(kind.letter(), letter.to_ascii_uppercase());
        }
        assert_eq!(CommandKind::from_letter('S'), None);
    }
}
