pub const DEFAULT_DELIMITER: char = ',';
pub const DEFAULT_CHUNK_SIZE: usize = 4;

/// Parsing parameters for ramp strings.
///
/// Each chunk carries `(red, green, blue, position)` in its first four
/// values; chunks wider than four have their trailing values ignored, so
/// `chunk_size` is never less than four.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RampConfig {
    delimiter: char,
    chunk_size: usize,
}

impl RampConfig {
    pub fn new(delimiter: char, chunk_size: usize) -> Self {
        Self {
            delimiter,
            chunk_size: chunk_size.max(DEFAULT_CHUNK_SIZE),
        }
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
