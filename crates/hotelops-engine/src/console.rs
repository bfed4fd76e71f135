//! Line-based console I/O

use hotelops_core::{HotelOpsError, Result};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// What the command layer needs from a terminal
pub trait Console {
    /// Write text without a trailing newline (prompts)
    fn print(&mut self, text: &str);

    fn println(&mut self, text: &str) {
        self.print(text);
        self.print("\n");
    }

    /// Report a failure to the operator
    fn eprintln(&mut self, text: &str);

    /// Next input line without its line terminator; `InputClosed` at end of input
    fn read_line(&mut self) -> Result<String>;
}

/// The process's stdin/stdout/stderr
pub struct StdConsole {
    stdin: std::io::Stdin,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: std::io::stdin(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn print(&mut self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        // A closed stdout leaves nothing useful to do with the error
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }

    fn eprintln(&mut self, text: &str) {
        eprintln!("{}", text);
    }

    fn read_line(&mut self) -> Result<String> {
        read_lossy_line(&mut self.stdin.lock())
    }
}

/// Read one line, replacing bytes that are not UTF-8 with U+FFFD
///
/// A malformed line stays a line so the prompt that asked for it can
/// reject it and ask again.
pub fn read_lossy_line<R: BufRead + ?Sized>(reader: &mut R) -> Result<String> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Err(HotelOpsError::InputClosed);
    }
    while matches!(buf.last(), Some(b'\n' | b'\r')) {
        buf.pop();
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Console fed from a fixed script, recording everything written to it
///
/// Each line handed out is echoed into the output the way a terminal
/// shows what the operator typed.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
    errors: String,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
            errors: String::new(),
        }
    }

    /// Everything printed so far
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Everything reported through `eprintln`
    pub fn errors(&self) -> &str {
        &self.errors
    }

    /// Lines not consumed yet
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn print(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn eprintln(&mut self, text: &str) {
        self.errors.push_str(text);
        self.errors.push('\n');
    }

    fn read_line(&mut self) -> Result<String> {
        let line = self.input.pop_front().ok_or(HotelOpsError::InputClosed)?;
        self.output.push_str(&line);
        self.output.push('\n');
        Ok(line)
    }
}
