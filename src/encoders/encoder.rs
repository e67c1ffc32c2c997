use crate::core::alphabet::{Variant, main_symbol, tail_symbol};
use crate::core::tables::PAD;
use std::io::{self, Write};

use super::packer::{self, GROUP_BYTES, GROUP_SYMBOLS};
use super::wrap::LineWrap;

/// Incremental emoji encoder.
///
/// Bytes written to the encoder are turned into symbols one 5-byte group at
/// a time, so at most four input bytes are ever held back. Call
/// [`Encoder::finish`] to emit the final partial group; dropping the encoder
/// without finishing loses it.
///
/// # Example
///
/// ```
/// use ecoji::{Encoder, Variant};
/// use std::io::Write;
///
/// let mut encoder = Encoder::new(Vec::new(), Variant::V2);
/// encoder.write_all(b"k").unwrap();
/// let out = String::from_utf8(encoder.finish().unwrap()).unwrap();
/// assert_eq!(out.chars().count(), 2);
/// ```
pub struct Encoder<W: Write> {
    writer: W,
    variant: Variant,
    wrap: LineWrap,
    pending: [u8; GROUP_BYTES],
    pending_len: usize,
    symbols: u64,
}

impl<W: Write> Encoder<W> {
    pub fn new(writer: W, variant: Variant) -> Self {
        Encoder {
            writer,
            variant,
            wrap: LineWrap::new(0),
            pending: [0; GROUP_BYTES],
            pending_len: 0,
            symbols: 0,
        }
    }

    /// Breaks the output after every `width` symbols (0 disables).
    pub fn with_wrap(mut self, width: usize) -> Self {
        self.wrap = LineWrap::new(width);
        self
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Symbols emitted so far, padding and tail included.
    pub fn symbols_written(&self) -> u64 {
        self.symbols
    }

    fn put(&mut self, symbol: char) -> io::Result<()> {
        self.wrap.put(&mut self.writer, symbol)?;
        self.symbols += 1;
        Ok(())
    }

    fn emit_group(&mut self, len: usize) -> io::Result<()> {
        let group = self.pending;
        let Some(chunks) = packer::split(&group[..len]) else {
            return Ok(());
        };

        for &value in chunks.mains() {
            self.put(main_symbol(self.variant, value))?;
        }
        if let Some(t) = chunks.tail {
            self.put(tail_symbol(self.variant, t))?;
        }

        let used = chunks.symbol_count();
        if used < GROUP_SYMBOLS {
            let pads = match self.variant {
                Variant::V1 => GROUP_SYMBOLS - used,
                Variant::V2 => 1,
            };
            for _ in 0..pads {
                self.put(PAD)?;
            }
        }

        tracing::trace!(
            bytes = len,
            symbols = used,
            variant = %self.variant,
            "encoded group"
        );
        Ok(())
    }

    /// Emits the final partial group and line break, then returns the writer.
    pub fn finish(mut self) -> io::Result<W> {
        if self.pending_len > 0 {
            self.emit_group(self.pending_len)?;
            self.pending_len = 0;
        }
        self.wrap.finish(&mut self.writer)?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Write for Encoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut rest = buf;

        while !rest.is_empty() {
            let take = (GROUP_BYTES - self.pending_len).min(rest.len());
            self.pending[self.pending_len..self.pending_len + take].copy_from_slice(&rest[..take]);
            self.pending_len += take;
            rest = &rest[take..];

            if self.pending_len == GROUP_BYTES {
                self.emit_group(GROUP_BYTES)?;
                self.pending_len = 0;
            }
        }

        Ok(buf.len())
    }

    /// Flushes the inner writer. Bytes of an incomplete group stay pending.
    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Encodes `data` into a string of emoji.
///
/// Never fails: every byte sequence, including the empty one, is encodable.
/// A `wrap` of 0 produces a single line with no trailing line break.
pub fn encode(data: &[u8], variant: Variant, wrap: usize) -> String {
    // Four symbols of up to 4 bytes each per group, plus line breaks
    let groups = data.len().div_ceil(GROUP_BYTES);
    let mut capacity = groups * GROUP_SYMBOLS * 4;
    if wrap > 0 {
        capacity += groups * GROUP_SYMBOLS / wrap + 1;
    }

    let mut encoder = Encoder::new(Vec::with_capacity(capacity), variant).with_wrap(wrap);
    let bytes = match encoder
        .write_all(data)
        .and_then(|()| encoder.finish())
    {
        Ok(bytes) => bytes,
        // Writes into a Vec cannot fail
        Err(e) => unreachable!("in-memory encode failed: {}", e),
    };

    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => unreachable!("encoder produced invalid UTF-8: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tables::{MAIN_V1, MAIN_V2, TAIL_V1, TAIL_V2};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(b"", Variant::V1, 0), "");
        assert_eq!(encode(b"", Variant::V2, 0), "");
        assert_eq!(encode(b"", Variant::V2, 4), "");
    }

    #[test]
    fn test_encode_one_byte() {
        let k = (b'k' as usize) << 2;
        assert_eq!(chars(&encode(b"k", Variant::V2, 0)), vec![MAIN_V2[k], PAD]);
        assert_eq!(
            chars(&encode(b"k", Variant::V1, 0)),
            vec![MAIN_V1[k], PAD, PAD, PAD]
        );
    }

    #[test]
    fn test_encode_four_bytes_ends_with_tail() {
        let v1 = chars(&encode(&[0x00, 0x01, 0x02, 0x00], Variant::V1, 0));
        assert_eq!(v1, vec![MAIN_V1[0], MAIN_V1[16], MAIN_V1[128], TAIL_V1[0]]);
        let v2 = chars(&encode(&[0x00, 0x01, 0x02, 0x03], Variant::V2, 0));
        assert_eq!(v2, vec![MAIN_V2[0], MAIN_V2[16], MAIN_V2[128], TAIL_V2[3]]);
    }

    #[test]
    fn test_v1_output_is_whole_groups() {
        for len in 0..23usize {
            let data: Vec<u8> = (0..len as u8).collect();
            let n = encode(&data, Variant::V1, 0).chars().count();
            assert_eq!(n, 4 * len.div_ceil(5), "length {}", len);
        }
    }

    #[test]
    fn test_v2_marks_short_tails_once() {
        for len in 0..23usize {
            let data: Vec<u8> = (0..len as u8).map(|b| b.wrapping_mul(37)).collect();
            let out = chars(&encode(&data, Variant::V2, 0));
            let pads = out.iter().filter(|&&c| c == PAD).count();
            let expected = usize::from(matches!(len % 5, 1..=3));
            assert_eq!(pads, expected, "length {}", len);
            if expected == 1 {
                assert_eq!(out.last(), Some(&PAD));
            }
        }
    }

    #[test]
    fn test_split_writes_match_single_write() {
        let data = b"Base64 is so 1999, isn't there something better?\n";
        let whole = encode(data, Variant::V2, 7);

        let mut encoder = Encoder::new(Vec::new(), Variant::V2).with_wrap(7);
        for piece in data.chunks(3) {
            encoder.write_all(piece).unwrap();
        }
        let pieces = String::from_utf8(encoder.finish().unwrap()).unwrap();

        assert_eq!(whole, pieces);
    }

    #[test]
    fn test_full_groups_are_written_before_finish() {
        let mut encoder = Encoder::new(Vec::new(), Variant::V1);
        encoder.write_all(&[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(encoder.symbols_written(), 4);
        let out = encoder.finish().unwrap();
        assert_eq!(String::from_utf8(out).unwrap().chars().count(), 8);
    }

    #[test]
    fn test_wrap_only_adds_line_breaks() {
        let data: Vec<u8> = (0..=255).collect();
        for variant in [Variant::V1, Variant::V2] {
            let flat = encode(&data, variant, 0);
            for wrap in [1, 2, 3, 4, 5, 13, 76, 1000] {
                let wrapped = encode(&data, variant, wrap);
                assert!(wrapped.ends_with('\n'));
                assert_eq!(wrapped.replace('\n', ""), flat);
                assert!(wrapped.lines().all(|l| l.chars().count() <= wrap));
            }
        }
    }
}
