//! Parsing of user-supplied capacities and reference strings.
//!
//! Everything here fails fast with [`Error::InvalidInput`]; nothing is
//! silently dropped or defaulted.

use std::fs;
use std::path::Path;

use log::debug;

use crate::common::config::MAX_FRAMES;
use crate::common::{Error, PageId, Result};

/// Parse a reference string.
///
/// Pages are integers separated by commas, whitespace, or both. Blank input
/// is an empty reference string.
///
/// # Example
/// ```
/// use pagesim::input::parse_references;
/// use pagesim::PageId;
///
/// let refs = parse_references("1, 2 3,4").unwrap();
/// assert_eq!(refs, [1, 2, 3, 4].map(PageId::new));
/// ```
pub fn parse_references(text: &str) -> Result<Vec<PageId>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse::<PageId>)
        .collect()
}

/// Parse a frame count, which must be an integer in `1..=MAX_FRAMES`.
pub fn parse_capacity(text: &str) -> Result<usize> {
    let trimmed = text.trim();
    let capacity: i64 = trimmed
        .parse()
        .map_err(|_| Error::invalid(format!("frame count '{}' is not an integer", trimmed)))?;

    if capacity <= 0 {
        return Err(Error::invalid(format!(
            "frame count must be positive, got {}",
            capacity
        )));
    }
    if capacity as u64 > MAX_FRAMES as u64 {
        return Err(Error::invalid(format!(
            "frame count {} exceeds the maximum of {}",
            capacity, MAX_FRAMES
        )));
    }
    Ok(capacity as usize)
}

/// Read and parse a reference string from a file.
pub fn read_references(path: impl AsRef<Path>) -> Result<Vec<PageId>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let refs = parse_references(&text)?;
    debug!("read {} references from {}", refs.len(), path.display());
    Ok(refs)
}
