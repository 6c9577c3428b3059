use std::io::ErrorKind;
use std::path::Path;

use crate::codec::Deflate;
use crate::text::{join_lines, split_lines, with_new_line};
use crate::writer::{self, WriteMode};
use crate::{reader, DiskError, Result};

/// Writer and reader that pass every payload through one [Deflate] codec
///
/// Each write compresses its payload into an independent zlib stream.
/// Appending therefore places a second stream after the first, and the
/// plain `read_*` methods reject such files with
/// [DiskError::DataFormat]. Use the `append_merged_*` methods to keep a
/// single stream, or the `read_concatenated_*` methods to read files built
/// by repeated appends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompressedDisk {
    codec: Deflate,
}

impl CompressedDisk {
    pub fn new(codec: Deflate) -> Self {
        Self { codec }
    }

    pub fn codec(&self) -> Deflate {
        self.codec
    }

    pub fn write_bytes_with(
        &self,
        path: impl AsRef<Path>,
        content: &[u8],
        mode: WriteMode,
    ) -> Result<()> {
        let compressed = self.codec.compress(content)?;
        writer::write_bytes_with(path, &compressed, mode)
    }

    pub fn write_str_with(
        &self,
        path: impl AsRef<Path>,
        text: &str,
        append_new_line: bool,
        mode: WriteMode,
    ) -> Result<()> {
        let text = with_new_line(text, append_new_line);
        self.write_bytes_with(path, text.as_bytes(), mode)
    }

    pub fn write_lines_with<I, S>(
        &self,
        path: impl AsRef<Path>,
        lines: I,
        mode: WriteMode,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.write_bytes_with(path, join_lines(lines).as_bytes(), mode)
    }

    pub fn write_bytes(
        &self,
        path: impl AsRef<Path>,
        content: &[u8],
    ) -> Result<()> {
        self.write_bytes_with(path, content, WriteMode::Overwrite)
    }

    pub fn append_bytes(
        &self,
        path: impl AsRef<Path>,
        content: &[u8],
    ) -> Result<()> {
        self.write_bytes_with(path, content, WriteMode::Append)
    }

    pub fn write_str(
        &self,
        path: impl AsRef<Path>,
        text: &str,
        append_new_line: bool,
    ) -> Result<()> {
        self.write_str_with(path, text, append_new_line, WriteMode::Overwrite)
    }

    pub fn append_str(
        &self,
        path: impl AsRef<Path>,
        text: &str,
        append_new_line: bool,
    ) -> Result<()> {
        self.write_str_with(path, text, append_new_line, WriteMode::Append)
    }

    pub fn write_lines<I, S>(
        &self,
        path: impl AsRef<Path>,
        lines: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.write_lines_with(path, lines, WriteMode::Overwrite)
    }

    pub fn append_lines<I, S>(
        &self,
        path: impl AsRef<Path>,
        lines: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.write_lines_with(path, lines, WriteMode::Append)
    }

    /// Replace the file with a compressed empty payload, or a compressed
    /// single line separator
    pub fn write_empty(
        &self,
        path: impl AsRef<Path>,
        append_new_line: bool,
    ) -> Result<()> {
        self.write_str(path, "", append_new_line)
    }

    /// Unlike [writer::append_empty] this always writes: even an empty
    /// payload becomes a new stream at the end of the file.
    pub fn append_empty(
        &self,
        path: impl AsRef<Path>,
        append_new_line: bool,
    ) -> Result<()> {
        self.append_str(path, "", append_new_line)
    }

    /// Read the file and inflate it as a single zlib stream
    pub fn read_bytes(&self, path: impl AsRef<Path>) -> Result<Vec<u8>> {
        let path = path.as_ref();
        let compressed = reader::read_bytes(path)?;
        self.codec.decompress(&compressed).map_err(|e| {
            log::debug!("{} is not a single zlib stream", path.display());
            e
        })
    }

    pub fn read_to_string(&self, path: impl AsRef<Path>) -> Result<String> {
        Ok(String::from_utf8(self.read_bytes(path)?)?)
    }

    pub fn read_lines(&self, path: impl AsRef<Path>) -> Result<Vec<String>> {
        Ok(split_lines(&self.read_to_string(path)?))
    }

    /// Read a file made of any number of back-to-back zlib streams, such
    /// as one built by repeated `append_*` calls
    pub fn read_concatenated_bytes(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Vec<u8>> {
        let compressed = reader::read_bytes(path)?;
        self.codec.decompress_concatenated(&compressed)
    }

    pub fn read_concatenated_to_string(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<String> {
        Ok(String::from_utf8(self.read_concatenated_bytes(path)?)?)
    }

    pub fn read_concatenated_lines(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<Vec<String>> {
        Ok(split_lines(&self.read_concatenated_to_string(path)?))
    }

    /// Append so that the file stays a single zlib stream
    ///
    /// The existing content is inflated (a missing file counts as empty),
    /// extended, compressed again and written over the old file. Files left
    /// behind by plain appends are merged into one stream as well.
    pub fn append_merged_bytes(
        &self,
        path: impl AsRef<Path>,
        content: &[u8],
    ) -> Result<()> {
        let path = path.as_ref();
        let mut merged = match self.read_concatenated_bytes(path) {
            Ok(existing) => existing,
            Err(DiskError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                log::trace!("{} does not exist yet", path.display());
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        merged.extend_from_slice(content);
        self.write_bytes(path, &merged)
    }

    pub fn append_merged_str(
        &self,
        path: impl AsRef<Path>,
        text: &str,
        append_new_line: bool,
    ) -> Result<()> {
        let text = with_new_line(text, append_new_line);
        self.append_merged_bytes(path, text.as_bytes())
    }

    pub fn append_merged_lines<I, S>(
        &self,
        path: impl AsRef<Path>,
        lines: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.append_merged_bytes(path, join_lines(lines).as_bytes())
    }
}
