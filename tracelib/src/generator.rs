use std::time::{Duration, Instant};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::address::AddressRange;
use crate::error::TraceError;
use crate::trace::AddressList;

/// The generator draws addresses from a range using a random source it owns.
///
/// It supports calling generate multiple times, and will accumulate the time taken and the number
/// of addresses drawn accordingly
pub struct Generator<R: Rng> {
    rng: R,
    generation_time: Duration,
    generated: u64,
}

impl Generator<StdRng> {
    /// Creates a generator backed by the standard RNG, seeded when a seed is given and from the
    /// operating system otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use tracelib::address::AddressRange;
    /// use tracelib::generator::Generator;
    /// let range = AddressRange::new(0x1000, 0x8000).unwrap();
    /// let first = Generator::seeded(Some(7)).generate(16, &range).unwrap();
    /// let second = Generator::seeded(Some(7)).generate(16, &range).unwrap();
    /// assert_eq!(first, second);
    /// ```
    pub fn seeded(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(StdRng::seed_from_u64(seed)),
            None => Self::new(StdRng::from_os_rng()),
        }
    }
}

impl<R: Rng> Generator<R> {
    /// Creates a new generator around the given random source
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            generation_time: Duration::new(0, 0),
            generated: 0,
        }
    }

    /// Draws `count` addresses, each independently and uniformly from the range with both
    /// endpoints included. The list keeps draw order
    ///
    /// # Arguments
    ///
    /// * `count`: The number of addresses to draw
    /// * `range`: The range to draw from
    ///
    /// returns: Result<AddressList, TraceError>, failing only when the list can't be allocated
    pub fn generate(&mut self, count: usize, range: &AddressRange) -> Result<AddressList, TraceError> {
        let start = Instant::now();
        let (low, high) = (range.start(), range.end());
        let mut addresses: Vec<u64> = Vec::new();
        addresses
            .try_reserve_exact(count)
            .map_err(|e| TraceError::Unexpected(format!("Couldn't allocate {count} addresses: {e}")))?;
        addresses.extend((0..count).map(|_| self.rng.random_range(low..=high)));
        let elapsed = start.elapsed();
        self.generation_time += elapsed;
        self.generated += count as u64;
        debug!("Drew {count} addresses from [{low:#X}, {high:#X}] in {elapsed:?}");
        Ok(AddressList::from(addresses))
    }

    /// Draws `count` addresses from a range given as hexadecimal text
    ///
    /// A count of zero or less gives an empty list without looking at the addresses. Otherwise the
    /// addresses must parse, and the start must be below the end
    ///
    /// # Arguments
    ///
    /// * `count`: The number of addresses to draw
    /// * `start_hex`: The lowest address which may be drawn, `0x` prefix optional
    /// * `end_hex`: The highest address which may be drawn, `0x` prefix optional
    ///
    /// returns: Result<AddressList, TraceError>
    pub fn generate_from_hex(&mut self, count: i64, start_hex: &str, end_hex: &str) -> Result<AddressList, TraceError> {
        if count <= 0 {
            return Ok(AddressList::default());
        }
        let range = AddressRange::parse(start_hex, end_hex)?;
        debug!("Parsed range [{:#X}, {:#X}], {} possible addresses", range.start(), range.end(), range.span());
        let count = usize::try_from(count)
            .map_err(|_| TraceError::Format(format!("count {count} is too large for this platform")))?;
        self.generate(count, &range)
    }

    /// Gets the wall-clock time spent drawing addresses
    pub fn get_execution_time(&self) -> &Duration {
        &self.generation_time
    }

    /// Gets the total number of addresses drawn across all calls
    pub fn get_generated_count(&self) -> u64 {
        self.generated
    }
}

/// Draws `count` addresses from a hexadecimal range and renders them as `0x`-prefixed uppercase hex
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tracelib::generator::generate_random_addresses;
/// let mut rng = StdRng::seed_from_u64(1);
/// let addresses = generate_random_addresses(&mut rng, 3, "0x10", "0x20").unwrap();
/// assert_eq!(addresses.len(), 3);
/// assert!(generate_random_addresses(&mut rng, 0, "0x10", "0x20").unwrap().is_empty());
/// assert!(generate_random_addresses(&mut rng, 5, "0x20", "0x10").is_err());
/// ```
pub fn generate_random_addresses<R: Rng>(rng: &mut R, count: i64, start_hex: &str, end_hex: &str) -> Result<Vec<String>, TraceError> {
    let mut generator = Generator::new(rng);
    Ok(generator.generate_from_hex(count, start_hex, end_hex)?.to_hex_strings())
}
