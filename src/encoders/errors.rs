use crate::core::alphabet::Variant;
use std::fmt;

/// Errors that can occur during decoding.
///
/// Positions are zero-based character offsets into the symbol stream,
/// counting whitespace.
///
/// `NonAlphabetCharacter` and `MixedVersions` are the two failures every
/// Ecoji decoder reports. `UnexpectedTail` is specific to this crate. Other
/// decoders accept a misplaced tail symbol and return garbage bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A non-whitespace character outside both alphabets
    NonAlphabetCharacter { char: char, position: usize },
    /// A symbol from the other alphabet generation than the one already seen
    MixedVersions {
        char: char,
        position: usize,
        locked: Variant,
    },
    /// A tail symbol that does not follow exactly three main symbols.
    ///
    /// Not part of the Ecoji format's error set; see the type docs.
    UnexpectedTail {
        char: char,
        position: usize,
        mains: usize,
    },
}

impl DecodeError {
    /// Offset of the offending character.
    pub fn position(&self) -> usize {
        match self {
            DecodeError::NonAlphabetCharacter { position, .. }
            | DecodeError::MixedVersions { position, .. }
            | DecodeError::UnexpectedTail { position, .. } => *position,
        }
    }

    /// The offending character.
    pub fn char(&self) -> char {
        match self {
            DecodeError::NonAlphabetCharacter { char, .. }
            | DecodeError::MixedVersions { char, .. }
            | DecodeError::UnexpectedTail { char, .. } => *char,
        }
    }
}

fn describe(c: char) -> String {
    if c.is_control() || c == '\u{fffd}' {
        format!("U+{:04X}", c as u32)
    } else {
        format!("'{}' (U+{:04X})", c, c as u32)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();
        let (error, hint) = if use_color {
            ("\x1b[1;31merror:\x1b[0m", "\x1b[1;36mhint:\x1b[0m")
        } else {
            ("error:", "hint:")
        };

        match self {
            DecodeError::NonAlphabetCharacter { char: c, position } => {
                writeln!(
                    f,
                    "{} Non Ecoji character seen: {} at position {}",
                    error,
                    describe(*c),
                    position
                )?;
                write!(
                    f,
                    "{} input must contain only Ecoji emoji and whitespace",
                    hint
                )
            }
            DecodeError::MixedVersions {
                char: c,
                position,
                locked,
            } => {
                writeln!(
                    f,
                    "{} Emojis from different ecoji versions seen: {} at position {} is not in {}",
                    error,
                    describe(*c),
                    position,
                    locked
                )?;
                write!(
                    f,
                    "{} a single stream must be encoded entirely with {} or entirely with {}",
                    hint,
                    locked,
                    locked.other()
                )
            }
            DecodeError::UnexpectedTail {
                char: c,
                position,
                mains,
            } => {
                writeln!(
                    f,
                    "{} unexpected tail symbol {} at position {}",
                    error,
                    describe(*c),
                    position
                )?;
                write!(
                    f,
                    "{} a tail symbol must follow exactly 3 symbols of its group, found {}",
                    hint, mains
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_alphabet_message() {
        let err = DecodeError::NonAlphabetCharacter {
            char: 'n',
            position: 0,
        };
        let display = format!("{}", err);

        assert!(display.contains("Non Ecoji character seen"));
        assert!(display.contains("'n' (U+006E)"));
        assert!(display.contains("position 0"));
        assert!(display.contains("hint:"));
    }

    #[test]
    fn test_mixed_versions_message() {
        let err = DecodeError::MixedVersions {
            char: '\u{1f93f}',
            position: 2,
            locked: Variant::V1,
        };
        let display = format!("{}", err);

        assert!(display.contains("Emojis from different ecoji versions seen"));
        assert!(display.contains("is not in v1"));
        assert!(display.contains("entirely with v1 or entirely with v2"));
        assert_eq!(err.position(), 2);
        assert_eq!(err.char(), '\u{1f93f}');
    }

    #[test]
    fn test_invalid_utf8_is_shown_as_codepoint() {
        let err = DecodeError::NonAlphabetCharacter {
            char: '\u{fffd}',
            position: 7,
        };
        assert!(format!("{}", err).contains("U+FFFD at position 7"));
    }

    #[test]
    fn test_unexpected_tail_message() {
        let err = DecodeError::UnexpectedTail {
            char: '\u{1f4d1}',
            position: 1,
            mains: 1,
        };
        let display = format!("{}", err);
        assert!(display.contains("unexpected tail symbol"));
        assert!(display.contains("found 1"));
    }
}
