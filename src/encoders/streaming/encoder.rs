use crate::core::alphabet::Variant;
use crate::encoders::encoder::Encoder;
use std::io::{Read, Write};

use super::CHUNK_SIZE;

/// Streaming encoder for processing large amounts of data efficiently.
///
/// Reads the input in chunks and writes symbols as each 5-byte group
/// completes, so memory use does not depend on input size. Suitable for
/// encoding large files or network streams.
pub struct StreamingEncoder<W: Write> {
    writer: W,
    variant: Variant,
    wrap: usize,
}

impl<W: Write> StreamingEncoder<W> {
    /// Creates a new streaming encoder producing second-generation output
    /// without line breaks.
    ///
    /// # Arguments
    ///
    /// * `writer` - The destination for encoded output
    pub fn new(writer: W) -> Self {
        StreamingEncoder {
            writer,
            variant: Variant::default(),
            wrap: 0,
        }
    }

    /// Sets the alphabet generation.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Breaks output lines after `wrap` symbols (0 disables).
    pub fn with_wrap(mut self, wrap: usize) -> Self {
        self.wrap = wrap;
        self
    }

    /// Encodes everything `reader` yields.
    ///
    /// Returns the number of input bytes consumed.
    pub fn encode<R: Read>(&mut self, reader: &mut R) -> std::io::Result<u64> {
        let mut encoder = Encoder::new(&mut self.writer, self.variant).with_wrap(self.wrap);
        let mut buffer = vec![0u8; CHUNK_SIZE];
        let mut total = 0u64;

        loop {
            let bytes_read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            encoder.write_all(&buffer[..bytes_read])?;
            total += bytes_read as u64;
        }

        let symbols = encoder.symbols_written();
        encoder.finish()?;

        tracing::debug!(
            bytes = total,
            symbols,
            variant = %self.variant,
            "finished encoding stream"
        );
        Ok(total)
    }

    /// Returns the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
