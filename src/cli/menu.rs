//! Menu choices and their parsing

use std::num::IntErrorKind;
use std::str::FromStr;

use thiserror::Error;

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// `1` - convert all files without headers
    Convert,
    /// `2` - convert all files after asking for column names
    ConvertWithHeaders,
    /// `3` - leave the program
    Exit,
    /// Any other number; does nothing. Out-of-range values saturate.
    Unknown(i64),
}

impl MenuCommand {
    pub fn from_number(number: i64) -> Self {
        match number {
            1 => MenuCommand::Convert,
            2 => MenuCommand::ConvertWithHeaders,
            3 => MenuCommand::Exit,
            other => MenuCommand::Unknown(other),
        }
    }
}

/// Menu input that is not an integer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a numeric menu option")]
pub struct MenuParseError(pub String);

impl FromStr for MenuCommand {
    type Err = MenuParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(number) => Ok(MenuCommand::from_number(number)),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Ok(MenuCommand::Unknown(i64::MAX)),
                IntErrorKind::NegOverflow => Ok(MenuCommand::Unknown(i64::MIN)),
                _ => Err(MenuParseError(s.to_string())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_choices() {
        assert_eq!("1".parse::<MenuCommand>(), Ok(MenuCommand::Convert));
        assert_eq!(" 2 ".parse::<MenuCommand>(), Ok(MenuCommand::ConvertWithHeaders));
        assert_eq!("3".parse::<MenuCommand>(), Ok(MenuCommand::Exit));
    }

    #[test]
    fn test_other_integers_are_unknown() {
        assert_eq!("7".parse::<MenuCommand>(), Ok(MenuCommand::Unknown(7)));
        assert_eq!("-1".parse::<MenuCommand>(), Ok(MenuCommand::Unknown(-1)));
        assert_eq!("+0".parse::<MenuCommand>(), Ok(MenuCommand::Unknown(0)));
    }

    #[test]
    fn test_huge_integers_are_unknown() {
        assert_eq!(
            "99999999999999999999".parse::<MenuCommand>(),
            Ok(MenuCommand::Unknown(i64::MAX))
        );
        assert_eq!(
            "-99999999999999999999".parse::<MenuCommand>(),
            Ok(MenuCommand::Unknown(i64::MIN))
        );
    }

    #[test]
    fn test_non_numeric_is_error() {
        assert!("one".parse::<MenuCommand>().is_err());
        assert!("".parse::<MenuCommand>().is_err());
        assert!("1.5".parse::<MenuCommand>().is_err());
    }
}
