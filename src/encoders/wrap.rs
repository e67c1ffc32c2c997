use std::io::{self, Write};

/// Column tracker that breaks encoded output into lines of `width` symbols.
///
/// A width of zero disables wrapping.
#[derive(Debug, Clone, Copy)]
pub struct LineWrap {
    width: usize,
    column: usize,
}

impl LineWrap {
    pub fn new(width: usize) -> Self {
        LineWrap { width, column: 0 }
    }

    /// Writes one symbol, followed by a line break if the line is now full.
    pub fn put<W: Write>(&mut self, writer: &mut W, symbol: char) -> io::Result<()> {
        let mut buf = [0u8; 4];
        writer.write_all(symbol.encode_utf8(&mut buf).as_bytes())?;

        if self.width > 0 {
            self.column += 1;
            if self.column == self.width {
                writer.write_all(b"\n")?;
                self.column = 0;
            }
        }
        Ok(())
    }

    /// Terminates a partially filled last line.
    pub fn finish<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.column > 0 {
            writer.write_all(b"\n")?;
            self.column = 0;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapped(width: usize, symbols: &str) -> String {
        let mut out = Vec::new();
        let mut wrap = LineWrap::new(width);
        for c in symbols.chars() {
            wrap.put(&mut out, c).unwrap();
        }
        wrap.finish(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_no_wrap() {
        assert_eq!(wrapped(0, "🎌🚟🎗"), "🎌🚟🎗");
    }

    #[test]
    fn test_exact_lines_end_with_single_break() {
        assert_eq!(wrapped(3, "🎌🚟🎗🈸🎥🤠"), "🎌🚟🎗\n🈸🎥🤠\n");
    }

    #[test]
    fn test_short_last_line_is_terminated() {
        assert_eq!(wrapped(4, "🎌🚟🎗🈸🎥"), "🎌🚟🎗🈸\n🎥\n");
        assert_eq!(wrapped(20, "🎌🚟"), "🎌🚟\n");
    }

    #[test]
    fn test_empty_output_gets_no_break() {
        assert_eq!(wrapped(5, ""), "");
    }
}
