use std::fs;
use std::path::Path;

use crate::text::split_lines;
use crate::Result;

/// Load the whole file into memory
pub fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let content = fs::read(path)?;
    log::trace!("{} bytes read from {}", content.len(), path.display());
    Ok(content)
}

/// Load the whole file as UTF-8 text
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    Ok(String::from_utf8(read_bytes(path)?)?)
}

/// Load the file as a sequence of lines
///
/// See [split_lines](crate::text::split_lines) for the line rules.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    Ok(split_lines(&read_to_string(path)?))
}
