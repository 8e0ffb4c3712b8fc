//! Line-oriented console port.
//!
//! The session loop only ever reads a line or writes a line, so it takes any
//! [`Console`] rather than touching stdin/stdout itself.

use std::collections::VecDeque;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Something the game can talk to, one line at a time.
pub trait Console {
    /// Reads the next line without its trailing newline.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Writes one line of output.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Asks for input. Defaults to writing the text as its own line.
    fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.write_line(text)
    }
}

/// Console over any buffered reader and writer, stdio by default.
#[derive(Debug)]
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl StdConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    /// Wraps an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // Invalid UTF-8 becomes replacement characters and fails to parse
        // as a move instead of ending the game.
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    /// Leaves the cursor on the prompt line.
    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }
}

/// In-memory console fed from a fixed script of input lines.
///
/// Every prompt and written line is recorded in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that will answer reads with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Everything written so far, one entry per line or prompt.
    pub fn output(&self) -> &[String] {
        &self.output
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_std_console_strips_line_endings() {
        let mut console = StdConsole::new("a1\r\nb2\nc3".as_bytes(), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("a1"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("b2"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("c3"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn test_std_console_replaces_invalid_utf8() {
        let mut console = StdConsole::new(&b"\xff\xfe\nb2\n"[..], Vec::new());
        assert_eq!(
            console.read_line().unwrap().as_deref(),
            Some("\u{FFFD}\u{FFFD}")
        );
        assert_eq!(console.read_line().unwrap().as_deref(), Some("b2"));
    }

    #[test]
    fn test_std_console_prompt_has_no_newline() {
        let mut console = StdConsole::new(io::empty(), Vec::new());
        console.prompt("move? ").unwrap();
        console.write_line("done").unwrap();
        let written = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(written, "move? done\n");
    }

    #[test]
    fn test_scripted_console_records_output() {
        let mut console = ScriptedConsole::new(["x"]);
        console.prompt("go").unwrap();
        assert_eq!(console.read_line().unwrap().as_deref(), Some("x"));
        assert_eq!(console.read_line().unwrap(), None);
        assert_eq!(console.output(), ["go".to_string()]);
    }
}
