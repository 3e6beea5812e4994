use std::io::{BufRead, Write};
use log::info;
use crate::config::TraceRequest;
use crate::error::TraceError;
use crate::trace::{AddressList, TraceReport};

pub const INTRO: &str = "Generates a trace with no spatial or temporal locality.";
pub const COUNT_PROMPT: &str = "Enter the number of addresses to generate (e.g., 100): ";
pub const START_PROMPT: &str = "Enter the start address (e.g., 0x1000): ";
pub const END_PROMPT: &str = "Enter the end address (e.g., 0x8000): ";
pub const BANNER: &str = "--- Generated Address Trace (copy and paste into simulator) ---";

/// An interactive console session, reading answers from `input` and writing prompts and the trace
/// to `output`
pub struct Session<I: BufRead, O: Write> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Session<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Prompts for the count and the two addresses
    ///
    /// A count which isn't an integer fails straight away. The `0x` prefix is checked once both
    /// addresses have been read
    pub fn read_request(&mut self) -> Result<TraceRequest, TraceError> {
        writeln!(self.output, "{INTRO}\n")?;
        let count_text = self.prompt(COUNT_PROMPT)?;
        let count = count_text
            .trim()
            .parse::<i64>()
            .map_err(|e| TraceError::Format(format!("invalid count '{count_text}': {e}")))?;
        let start = self.prompt(START_PROMPT)?;
        let end = self.prompt(END_PROMPT)?;
        let request = TraceRequest::new(count, start, end);
        request.validate()?;
        info!("Read request for {} addresses in [{}, {}]", request.count, request.start, request.end);
        Ok(request)
    }

    /// Writes the banner followed by the line-wrapped trace
    pub fn write_trace(&mut self, list: &AddressList, max_line_len: usize) -> Result<(), TraceError> {
        writeln!(self.output, "\n{BANNER}\n")?;
        writeln!(self.output, "{}", list.format(max_line_len))?;
        self.output.flush()?;
        Ok(())
    }

    /// Writes the trace as pretty-printed JSON
    pub fn write_report(&mut self, report: &TraceReport) -> Result<(), TraceError> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| TraceError::Unexpected(format!("Couldn't serialise the output {e}")))?;
        writeln!(self.output, "{json}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Consumes the session, giving back the output stream
    pub fn into_output(self) -> O {
        self.output
    }

    fn prompt(&mut self, message: &str) -> Result<String, TraceError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(TraceError::Unexpected("EOF when reading a line".to_string()));
        }
        // Only the line ending is dropped, the prefix check sees any leading whitespace
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        Ok(answer.strip_suffix('\r').unwrap_or(answer).to_string())
    }
}
