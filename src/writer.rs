//! Overwrite or append bytes, text and line collections to a file.
//!
//! Every call opens its own handle and drops it before returning, on error
//! paths too. Missing parent directories are not created.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::text::{join_lines, with_new_line, LINE_SEPARATOR};
use crate::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteMode {
    /// Discard previous content, creating the file if absent
    Overwrite,
    /// Keep previous content and write after it, creating the file if absent
    Append,
}

/// Write raw bytes to `path` in the given mode
///
/// A failed write may leave a partially written file behind.
pub fn write_bytes_with(
    path: impl AsRef<Path>,
    content: &[u8],
    mode: WriteMode,
) -> Result<()> {
    let path = path.as_ref();
    let mut options = OpenOptions::new();
    match mode {
        WriteMode::Overwrite => {
            options.write(true).create(true).truncate(true)
        }
        WriteMode::Append => options.append(true).create(true),
    };

    let mut file = options.open(path)?;
    file.write_all(content)?;

    log::trace!(
        "{:?}: {} bytes written to {}",
        mode,
        content.len(),
        path.display()
    );
    Ok(())
}

/// Write text as UTF-8, optionally followed by a single line separator
pub fn write_str_with(
    path: impl AsRef<Path>,
    text: &str,
    append_new_line: bool,
    mode: WriteMode,
) -> Result<()> {
    let text = with_new_line(text, append_new_line);
    write_bytes_with(path, text.as_bytes(), mode)
}

/// Write each line separated by [LINE_SEPARATOR], without a trailing one
pub fn write_lines_with<I, S>(
    path: impl AsRef<Path>,
    lines: I,
    mode: WriteMode,
) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    write_bytes_with(path, join_lines(lines).as_bytes(), mode)
}

pub fn write_bytes(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    write_bytes_with(path, content, WriteMode::Overwrite)
}

pub fn append_bytes(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    write_bytes_with(path, content, WriteMode::Append)
}

pub fn write_str(
    path: impl AsRef<Path>,
    text: &str,
    append_new_line: bool,
) -> Result<()> {
    write_str_with(path, text, append_new_line, WriteMode::Overwrite)
}

pub fn append_str(
    path: impl AsRef<Path>,
    text: &str,
    append_new_line: bool,
) -> Result<()> {
    write_str_with(path, text, append_new_line, WriteMode::Append)
}

pub fn write_lines<I, S>(path: impl AsRef<Path>, lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    write_lines_with(path, lines, WriteMode::Overwrite)
}

pub fn append_lines<I, S>(path: impl AsRef<Path>, lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    write_lines_with(path, lines, WriteMode::Append)
}

/// Truncate the file, or create it empty. With `append_new_line` the file
/// holds a single line separator afterwards.
pub fn write_empty(
    path: impl AsRef<Path>,
    append_new_line: bool,
) -> Result<()> {
    write_str(path, "", append_new_line)
}

/// Make sure the file exists without touching its content, or add a single
/// line separator to it
pub fn append_empty(
    path: impl AsRef<Path>,
    append_new_line: bool,
) -> Result<()> {
    let content = if append_new_line { LINE_SEPARATOR } else { "" };
    write_bytes_with(path, content.as_bytes(), WriteMode::Append)
}
