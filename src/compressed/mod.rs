//! The [writer](crate::writer) and [reader](crate::reader) surface with a
//! zlib layer in between.
//!
//! The free functions here use [CompressedDisk::default], i.e. the default
//! compression level. Build a [CompressedDisk] to pick another level.

mod disk;

use std::path::Path;

use crate::writer::WriteMode;
use crate::Result;

pub use disk::CompressedDisk;

pub fn write_bytes_with(
    path: impl AsRef<Path>,
    content: &[u8],
    mode: WriteMode,
) -> Result<()> {
    CompressedDisk::default().write_bytes_with(path, content, mode)
}

pub fn write_str_with(
    path: impl AsRef<Path>,
    text: &str,
    append_new_line: bool,
    mode: WriteMode,
) -> Result<()> {
    CompressedDisk::default().write_str_with(path, text, append_new_line, mode)
}

pub fn write_lines_with<I, S>(
    path: impl AsRef<Path>,
    lines: I,
    mode: WriteMode,
) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    CompressedDisk::default().write_lines_with(path, lines, mode)
}

pub fn write_bytes(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    CompressedDisk::default().write_bytes(path, content)
}

/// Adds a new, independent stream after the existing bytes
pub fn append_bytes(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    CompressedDisk::default().append_bytes(path, content)
}

pub fn write_str(
    path: impl AsRef<Path>,
    text: &str,
    append_new_line: bool,
) -> Result<()> {
    CompressedDisk::default().write_str(path, text, append_new_line)
}

/// Adds a new, independent stream after the existing bytes
pub fn append_str(
    path: impl AsRef<Path>,
    text: &str,
    append_new_line: bool,
) -> Result<()> {
    CompressedDisk::default().append_str(path, text, append_new_line)
}

pub fn write_lines<I, S>(path: impl AsRef<Path>, lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    CompressedDisk::default().write_lines(path, lines)
}

/// Adds a new, independent stream after the existing bytes
pub fn append_lines<I, S>(path: impl AsRef<Path>, lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    CompressedDisk::default().append_lines(path, lines)
}

pub fn write_empty(
    path: impl AsRef<Path>,
    append_new_line: bool,
) -> Result<()> {
    CompressedDisk::default().write_empty(path, append_new_line)
}

pub fn append_empty(
    path: impl AsRef<Path>,
    append_new_line: bool,
) -> Result<()> {
    CompressedDisk::default().append_empty(path, append_new_line)
}

pub fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    CompressedDisk::default().read_bytes(path)
}

pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    CompressedDisk::default().read_to_string(path)
}

pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    CompressedDisk::default().read_lines(path)
}

pub fn read_concatenated_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    CompressedDisk::default().read_concatenated_bytes(path)
}

pub fn read_concatenated_to_string(path: impl AsRef<Path>) -> Result<String> {
    CompressedDisk::default().read_concatenated_to_string(path)
}

pub fn read_concatenated_lines(
    path: impl AsRef<Path>,
) -> Result<Vec<String>> {
    CompressedDisk::default().read_concatenated_lines(path)
}

pub fn append_merged_bytes(
    path: impl AsRef<Path>,
    content: &[u8],
) -> Result<()> {
    CompressedDisk::default().append_merged_bytes(path, content)
}

pub fn append_merged_str(
    path: impl AsRef<Path>,
    text: &str,
    append_new_line: bool,
) -> Result<()> {
    CompressedDisk::default().append_merged_str(path, text, append_new_line)
}

pub fn append_merged_lines<I, S>(path: impl AsRef<Path>, lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    CompressedDisk::default().append_merged_lines(path, lines)
}
