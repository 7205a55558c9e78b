use std::io;
use std::io::Write;

const CLEAR_SCREEN: &str = "\x1b[2J";

/// Buffered ANSI terminal frame, written out in one go on `flush`
pub struct Display<W: Write> {
    out: W,
    buffer: String,
}

impl<W: Write> Display<W> {
    pub fn new(out: W) -> Self {
        Self { out, buffer: String::new() }
    }

    pub fn clear(&mut self) {
        self.buffer.push_str(CLEAR_SCREEN);
    }

    /// Move the cursor to a 1-based row and column
    pub fn move_cursor(&mut self, row: u16, col: u16) {
        self.buffer.push_str(&format!("\x1b[{row};{col}H"));
    }

    pub fn print(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn println(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.write_all(self.buffer.as_bytes())?;
        self.buffer.clear();
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_written_before_flush() {
        let mut display = Display::new(Vec::new());
        display.clear();
        display.println("hello");

        assert!(display.into_inner().is_empty());
    }

    #[test]
    fn test_frame() {
        let mut display = Display::new(Vec::new());
        display.clear();
        display.move_cursor(1, 1);
        display.println("2024-01-01 00:00:00 UTC");
        display.print("BTC: $1.00 (0.00%)\t");
        display.flush().unwrap();

        let written = String::from_utf8(display.into_inner()).unwrap();
        assert_eq!(written, "\x1b[2J\x1b[1;1H2024-01-01 00:00:00 UTC\nBTC: $1.00 (0.00%)\t");
    }

    #[test]
    fn test_flush_empties_buffer() {
        let mut display = Display::new(Vec::new());
        display.print("a");
        display.flush().unwrap();
        display.print("b");
        display.flush().unwrap();

        assert_eq!(display.into_inner(), b"ab");
    }
}
