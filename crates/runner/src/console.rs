//! Line-oriented operator console
//!
//! Generic over reader and writer so sessions can be driven from tests.

use std::io::{self, BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Print `prompt` and read one trimmed line
    ///
    /// End of input is an `UnexpectedEof` error.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(line.trim().to_string())
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Rewrite the current line in place
    pub fn overwrite(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "\r{}", text)?;
        self.output.flush()
    }

    pub fn output(&self) -> &W {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ask_trims_and_echoes_prompt() {
        let mut console = Console::new("  51 \r\n2024-05-01\n".as_bytes(), Vec::new());

        assert_eq!(console.ask("Group: ").unwrap(), "51");
        assert_eq!(console.ask("Date: ").unwrap(), "2024-05-01");
        assert_eq!(String::from_utf8_lossy(console.output()), "Group: Date: ");
    }

    #[test]
    fn test_ask_on_closed_input() {
        let mut console = Console::new("".as_bytes(), Vec::new());
        let err = console.ask("Group: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_overwrite_uses_carriage_return() {
        let mut console = Console::new("".as_bytes(), Vec::new());
        console.overwrite("3s").unwrap();
        console.overwrite("2s").unwrap();
        console.say("").unwrap();
        assert_eq!(String::from_utf8_lossy(console.output()), "\r3s\r2s\n");
    }
}
