use std::io::Read;
use rand::Rng;
use serde::Deserialize;
use crate::address::check_prefix;
use crate::error::TraceError;
use crate::generator::Generator;
use crate::trace::{AddressList, DEFAULT_LINE_WIDTH};

/// A request for a trace, either typed at the prompts or read from a JSON file
///
/// ```json
/// { "count": 100, "start": "0x1000", "end": "0x8000", "seed": 42 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TraceRequest {
    pub count: i64,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

impl TraceRequest {
    pub fn new(count: i64, start: String, end: String) -> Self {
        Self {
            count,
            start,
            end,
            seed: None,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    /// Reads a request from JSON. The addresses must carry the `0x` prefix
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TraceError> {
        let request: TraceRequest = serde_json::from_reader(reader)?;
        request.validate()?;
        Ok(request)
    }

    /// Checks both addresses start with `0x`. Their digits are checked when generating
    pub fn validate(&self) -> Result<(), TraceError> {
        check_prefix(&self.start)?;
        check_prefix(&self.end)
    }

    /// Generates the requested trace
    pub fn generate<R: Rng>(&self, generator: &mut Generator<R>) -> Result<AddressList, TraceError> {
        generator.generate_from_hex(self.count, &self.start, &self.end)
    }
}
