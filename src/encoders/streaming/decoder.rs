use crate::core::alphabet::Variant;
use crate::encoders::decoder::Decoder;
use crate::encoders::errors::DecodeError;
use std::io::{self, Read, Write};

use super::CHUNK_SIZE;

/// Outcome of a successful streaming decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeSummary {
    /// Bytes written to the output.
    pub bytes: u64,
    /// Generation detected in the input, `None` if every symbol was shared.
    pub variant: Option<Variant>,
}

/// Streaming decoder for processing large amounts of encoded data efficiently.
///
/// Reads UTF-8 text in chunks, carrying multi-byte sequences split across
/// chunk boundaries, and writes bytes as each group closes. Decoding errors
/// are returned as [`io::ErrorKind::InvalidData`] wrapping a
/// [`DecodeError`].
pub struct StreamingDecoder<W: Write> {
    writer: W,
}

fn invalid_data(err: DecodeError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, err)
}

impl<W: Write> StreamingDecoder<W> {
    /// Creates a new streaming decoder.
    ///
    /// # Arguments
    ///
    /// * `writer` - The destination for decoded output
    pub fn new(writer: W) -> Self {
        StreamingDecoder { writer }
    }

    /// Decodes everything `reader` yields.
    pub fn decode<R: Read>(&mut self, reader: &mut R) -> io::Result<DecodeSummary> {
        let mut decoder = Decoder::new();
        let mut buffer = vec![0u8; CHUNK_SIZE];
        // Start of a UTF-8 sequence cut off by the previous read
        let mut carry = 0usize;
        let mut out = Vec::with_capacity(CHUNK_SIZE);
        let mut total = 0u64;

        loop {
            let bytes_read = match reader.read(&mut buffer[carry..]) {
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if bytes_read == 0 {
                break;
            }

            let filled = carry + bytes_read;
            let valid = match std::str::from_utf8(&buffer[..filled]) {
                Ok(text) => text.len(),
                Err(e) if e.error_len().is_none() => e.valid_up_to(),
                Err(e) => {
                    // Decode what precedes the bad bytes so the position is exact
                    let text = std::str::from_utf8(&buffer[..e.valid_up_to()])
                        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                    decoder.push_str(text, &mut out).map_err(invalid_data)?;
                    return Err(invalid_data(DecodeError::NonAlphabetCharacter {
                        char: char::REPLACEMENT_CHARACTER,
                        position: decoder.position(),
                    }));
                }
            };

            let text = std::str::from_utf8(&buffer[..valid])
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            decoder.push_str(text, &mut out).map_err(invalid_data)?;

            self.writer.write_all(&out)?;
            total += out.len() as u64;
            out.clear();

            buffer.copy_within(valid..filled, 0);
            carry = filled - valid;
        }

        if carry > 0 {
            // Input ended inside a UTF-8 sequence
            return Err(invalid_data(DecodeError::NonAlphabetCharacter {
                char: char::REPLACEMENT_CHARACTER,
                position: decoder.position(),
            }));
        }

        let variant = decoder.finish(&mut out);
        self.writer.write_all(&out)?;
        self.writer.flush()?;
        total += out.len() as u64;

        tracing::debug!(
            bytes = total,
            variant = variant.map(|v| v.as_str()).unwrap_or("neutral"),
            "finished decoding stream"
        );

        Ok(DecodeSummary {
            bytes: total,
            variant,
        })
    }

    /// Returns the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
