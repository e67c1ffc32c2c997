use crate::core::alphabet::{Alphabet, Role, Variant};

use super::errors::DecodeError;
use super::packer::{self, GROUP_SYMBOLS};

/// Which alphabet generation a stream has committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariantLock {
    /// Only generation-neutral symbols seen so far.
    #[default]
    Unlocked,
    Locked(Variant),
}

impl VariantLock {
    /// Records a symbol that belongs to `variant` only.
    ///
    /// Returns the generation the stream was already locked to if it
    /// conflicts.
    fn observe(&mut self, variant: Variant) -> Result<(), Variant> {
        match *self {
            VariantLock::Unlocked => {
                *self = VariantLock::Locked(variant);
                Ok(())
            }
            VariantLock::Locked(locked) if locked == variant => Ok(()),
            VariantLock::Locked(locked) => Err(locked),
        }
    }

    pub fn variant(&self) -> Option<Variant> {
        match self {
            VariantLock::Unlocked => None,
            VariantLock::Locked(v) => Some(*v),
        }
    }
}

/// Symbol-at-a-time emoji decoder.
///
/// Feed characters with [`Decoder::push`]; decoded bytes are appended to the
/// output as soon as a group closes. A group closes on `PAD`, on a tail
/// symbol, or after four main symbols, so concatenated encodings decode
/// without any length information. Whitespace is skipped.
#[derive(Debug, Default)]
pub struct Decoder {
    lock: VariantLock,
    group: [u16; GROUP_SYMBOLS],
    mains: usize,
    position: usize,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The generation detected so far, if any symbol has pinned it.
    pub fn variant(&self) -> Option<Variant> {
        self.lock.variant()
    }

    /// Characters consumed so far, whitespace included.
    pub fn position(&self) -> usize {
        self.position
    }

    fn close_group(&mut self, tail: Option<u8>, out: &mut Vec<u8>) {
        let (bytes, len) = packer::join(&self.group[..self.mains], tail);
        out.extend_from_slice(&bytes[..len]);
        tracing::trace!(symbols = self.mains, bytes = len, "decoded group");
        self.mains = 0;
    }

    /// Consumes one character.
    pub fn push(&mut self, c: char, out: &mut Vec<u8>) -> Result<(), DecodeError> {
        let position = self.position;
        self.position += 1;

        if c.is_whitespace() {
            return Ok(());
        }

        let symbol = Alphabet::global()
            .classify(c)
            .ok_or(DecodeError::NonAlphabetCharacter { char: c, position })?;

        if let Some(variant) = symbol.membership.discriminates() {
            let was_unlocked = self.lock == VariantLock::Unlocked;
            self.lock
                .observe(variant)
                .map_err(|locked| DecodeError::MixedVersions {
                    char: c,
                    position,
                    locked,
                })?;
            if was_unlocked {
                tracing::debug!(%variant, position, "detected ecoji version");
            }
        }

        match symbol.role {
            Role::Pad => self.close_group(None, out),
            Role::Main(value) => {
                self.group[self.mains] = value;
                self.mains += 1;
                if self.mains == GROUP_SYMBOLS {
                    self.close_group(None, out);
                }
            }
            Role::Tail(value) => {
                if self.mains != GROUP_SYMBOLS - 1 {
                    return Err(DecodeError::UnexpectedTail {
                        char: c,
                        position,
                        mains: self.mains,
                    });
                }
                self.close_group(Some(value), out);
            }
        }

        Ok(())
    }

    /// Consumes every character of `symbols`.
    pub fn push_str(&mut self, symbols: &str, out: &mut Vec<u8>) -> Result<(), DecodeError> {
        for c in symbols.chars() {
            self.push(c, out)?;
        }
        Ok(())
    }

    /// Ends the stream.
    ///
    /// A group left open (a message cut off before its end marker) is
    /// decoded as if a `PAD` followed it. Returns the detected generation.
    pub fn finish(mut self, out: &mut Vec<u8>) -> Option<Variant> {
        if self.mains > 0 {
            self.close_group(None, out);
        }
        self.lock.variant()
    }
}

/// Decodes a string of emoji back into bytes.
///
/// Accepts output of either generation, line-wrapped or not, and any
/// concatenation of encodings made with the same generation.
///
/// # Example
///
/// ```
/// use ecoji::{Variant, decode, encode};
///
/// let encoded = encode(b"hello", Variant::V1, 0) + &encode(b" world", Variant::V1, 0);
/// assert_eq!(decode(&encoded).unwrap(), b"hello world");
/// ```
pub fn decode(symbols: &str) -> Result<Vec<u8>, DecodeError> {
    // Emoji are 4 bytes of UTF-8; five bytes per four symbols
    let mut out = Vec::with_capacity(symbols.len() * 5 / 16 + 5);
    let mut decoder = Decoder::new();
    decoder.push_str(symbols, &mut out)?;
    decoder.finish(&mut out);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tables::{MAIN_V1, MAIN_V2, PAD, TAIL_V1};
    use crate::encoders::encoder::encode;

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode(" \n\t").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_round_trip_all_lengths() {
        for len in 0..40usize {
            let data: Vec<u8> = (0..len).map(|i| (i * 73 + 11) as u8).collect();
            for variant in [Variant::V1, Variant::V2] {
                assert_eq!(decode(&encode(&data, variant, 0)).unwrap(), data);
                assert_eq!(decode(&encode(&data, variant, 3)).unwrap(), data);
            }
        }
    }

    #[test]
    fn test_variant_lock_follows_first_discriminating_symbol() {
        let mut out = Vec::new();
        let mut decoder = Decoder::new();

        // Shared symbol does not lock
        decoder.push(MAIN_V1[0], &mut out).unwrap();
        assert_eq!(decoder.variant(), None);

        decoder.push(MAIN_V1[265], &mut out).unwrap();
        assert_eq!(decoder.variant(), Some(Variant::V1));

        let err = decoder.push(MAIN_V2[265], &mut out).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MixedVersions {
                char: MAIN_V2[265],
                position: 2,
                locked: Variant::V1,
            }
        );
    }

    #[test]
    fn test_pad_only_groups_are_empty() {
        let s: String = [PAD, PAD, PAD].iter().collect();
        assert_eq!(decode(&s).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_tail_needs_three_mains() {
        let s: String = [MAIN_V1[0], TAIL_V1[1]].iter().collect();
        assert_eq!(
            decode(&s),
            Err(DecodeError::UnexpectedTail {
                char: TAIL_V1[1],
                position: 1,
                mains: 1,
            })
        );
    }

    #[test]
    fn test_missing_end_marker_still_decodes() {
        let mut s = encode(b"abcdefg", Variant::V2, 0);
        assert_eq!(s.pop(), Some(PAD));
        assert_eq!(decode(&s).unwrap(), b"abcdefg");
    }

    #[test]
    fn test_position_counts_whitespace() {
        let s = format!("{}\n{}x", MAIN_V2[1], MAIN_V2[2]);
        assert_eq!(
            decode(&s),
            Err(DecodeError::NonAlphabetCharacter {
                char: 'x',
                position: 3
            })
        );
    }
}
