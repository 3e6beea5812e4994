use std::fmt;
use serde::{Deserialize, Serialize};
use crate::address::format_address;

/// Lines are broken once they grow past this many characters
pub const DEFAULT_LINE_WIDTH: usize = 85;

const SEPARATOR: &str = ", ";

/// An ordered list of generated addresses, in the order they were drawn
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressList {
    addresses: Vec<u64>,
}

impl AddressList {
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.addresses
    }

    pub fn iter(&self) -> impl Iterator<Item = &u64> {
        self.addresses.iter()
    }

    /// Renders every address as `0x`-prefixed uppercase hex
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.addresses.iter().map(|a| format_address(*a)).collect()
    }

    /// Joins the addresses into a trace, wrapping lines at the given width
    pub fn format(&self, max_line_len: usize) -> String {
        format_trace(&self.to_hex_strings(), max_line_len)
    }
}

impl From<Vec<u64>> for AddressList {
    fn from(addresses: Vec<u64>) -> Self {
        Self { addresses }
    }
}

impl fmt::Display for AddressList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_LINE_WIDTH))
    }
}

/// Joins addresses with `", "`, breaking the line after any separator which takes the running
/// line length past `max_line_len`
///
/// The separator stays at the end of the broken line, and there is none after the last address
///
/// # Arguments
///
/// * `addresses`: The rendered addresses
/// * `max_line_len`: The line length which triggers a break once exceeded
///
/// returns: String
///
/// # Examples
///
/// ```
/// use tracelib::trace::format_trace;
/// let addresses = ["0x1", "0x2", "0x3"].map(String::from);
/// assert_eq!(format_trace(&addresses, 85), "0x1, 0x2, 0x3");
/// assert_eq!(format_trace(&addresses, 4), "0x1, \n0x2, \n0x3");
/// ```
pub fn format_trace(addresses: &[String], max_line_len: usize) -> String {
    let mut output = String::new();
    let mut line_len = 0;
    for (i, address) in addresses.iter().enumerate() {
        output.push_str(address);
        line_len += address.len();
        if i + 1 < addresses.len() {
            output.push_str(SEPARATOR);
            line_len += SEPARATOR.len();
            if line_len > max_line_len {
                output.push('\n');
                line_len = 0;
            }
        }
    }
    output
}

/// The machine readable form of a trace. Can be serialised to JSON
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq)]
pub struct TraceReport {
    pub start: String,
    pub end: String,
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub addresses: Vec<String>,
}

impl TraceReport {
    pub fn new(start: &str, end: &str, seed: Option<u64>, list: &AddressList) -> Self {
        Self {
            start: start.trim().to_string(),
            end: end.trim().to_string(),
            count: list.len(),
            seed,
            addresses: list.to_hex_strings(),
        }
    }
}
