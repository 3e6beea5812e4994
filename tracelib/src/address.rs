use lazy_static::lazy_static;
use regex::Regex;
use crate::error::TraceError;

/// The prefix typed addresses must carry
pub const ADDRESS_PREFIX: &str = "0x";

lazy_static! {
    // Optional base prefix, then hex digits with single underscores allowed between them
    static ref HEX_PATTERN: Regex =
        Regex::new(r"^(?:0[xX]_?)?(?P<digits>[0-9a-fA-F](?:_?[0-9a-fA-F])*)$").unwrap();
}

/// An inclusive range of addresses to draw from. Always has `start < end`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AddressRange {
    start: u64,
    end: u64,
}

impl AddressRange {
    /// Creates a new range, failing unless start is strictly below end
    ///
    /// # Examples
    ///
    /// ```
    /// use tracelib::address::AddressRange;
    /// assert!(AddressRange::new(0x1000, 0x8000).is_ok());
    /// assert!(AddressRange::new(0x8000, 0x1000).is_err());
    /// assert!(AddressRange::new(0x1000, 0x1000).is_err());
    /// ```
    pub fn new(start: u64, end: u64) -> Result<Self, TraceError> {
        if start >= end {
            return Err(TraceError::Range { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parses both ends of the range from hexadecimal text, then validates it
    pub fn parse(start_hex: &str, end_hex: &str) -> Result<Self, TraceError> {
        Self::new(parse_address(start_hex)?, parse_address(end_hex)?)
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    /// Whether the address lies in the range, both endpoints included
    pub fn contains(&self, address: u64) -> bool {
        self.start <= address && address <= self.end
    }

    /// The number of distinct addresses in the range. `[0, u64::MAX]` holds 2^64 of them, hence u128
    pub fn span(&self) -> u128 {
        (self.end - self.start) as u128 + 1
    }
}

/// Parses an address from hexadecimal text, with or without a `0x` prefix
///
/// Surrounding whitespace is ignored, and single underscores may separate digits. Values which
/// don't fit in 64 bits are rejected
///
/// # Arguments
///
/// * `text`: The hexadecimal numeral
///
/// returns: Result<u64, TraceError>
///
/// # Examples
///
/// ```
/// use tracelib::address::parse_address;
/// assert_eq!(parse_address("0x1000").unwrap(), 0x1000);
/// assert_eq!(parse_address("ff").unwrap(), 255);
/// assert!(parse_address("zz").is_err());
/// ```
pub fn parse_address(text: &str) -> Result<u64, TraceError> {
    let trimmed = text.trim();
    let captures = HEX_PATTERN
        .captures(trimmed)
        .ok_or_else(|| TraceError::Address(format!("invalid hexadecimal address: '{trimmed}'")))?;
    let digits = captures["digits"].replace('_', "");
    u64::from_str_radix(&digits, 16)
        .map_err(|_| TraceError::Address(format!("address '{trimmed}' does not fit in 64 bits")))
}

/// Parses an address which must be written with a lowercase `0x` prefix, as typed by the user
///
/// # Examples
///
/// ```
/// use tracelib::address::parse_prefixed_address;
/// assert_eq!(parse_prefixed_address("0x8000").unwrap(), 0x8000);
/// assert!(parse_prefixed_address("8000").is_err());
/// ```
pub fn parse_prefixed_address(text: &str) -> Result<u64, TraceError> {
    check_prefix(text)?;
    parse_address(text)
}

/// Fails unless the text starts with `0x`. Leading whitespace counts against it
pub fn check_prefix(text: &str) -> Result<(), TraceError> {
    if text.starts_with(ADDRESS_PREFIX) {
        Ok(())
    } else {
        Err(TraceError::Format(format!("Addresses must start with '{ADDRESS_PREFIX}'")))
    }
}

/// Renders an address as `0x` followed by uppercase hex digits, without padding
///
/// # Examples
///
/// ```
/// use tracelib::address::format_address;
/// assert_eq!(format_address(255), "0xFF");
/// assert_eq!(format_address(0), "0x0");
/// ```
pub fn format_address(address: u64) -> String {
    format!("{address:#X}")
}
