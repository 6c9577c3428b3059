//! Whole-buffer zlib compression.
//!
//! Output of [Deflate::compress] is a plain zlib stream (deflate payload in
//! the zlib wrapper), readable by any zlib implementation. There is no
//! additional framing.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};

use crate::{DiskError, Result};

/// Step by which the output buffer grows while inflating
pub const CHUNK_SIZE: usize = 1024;

const DEFAULT_LEVEL: u32 = 6;
const MAX_LEVEL: u32 = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deflate {
    level: Compression,
}

impl Default for Deflate {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL)
    }
}

impl Deflate {
    /// Levels above 9 fall back to the default level
    pub fn new(level: u32) -> Self {
        let level = match level {
            0..=MAX_LEVEL => Compression::new(level),
            _ => Compression::new(DEFAULT_LEVEL),
        };
        Self { level }
    }

    pub fn fast() -> Self {
        Self {
            level: Compression::fast(),
        }
    }

    pub fn best() -> Self {
        Self {
            level: Compression::best(),
        }
    }

    pub fn level(&self) -> u32 {
        self.level.level()
    }

    /// Compress a buffer of any size, including an empty one, into a
    /// single zlib stream
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(
            Vec::with_capacity(data.len() / 2 + 16),
            self.level,
        );
        encoder.write_all(data)?;
        let compressed = encoder.finish()?;
        log::trace!(
            "compressed {} bytes into {} bytes at level {}",
            data.len(),
            compressed.len(),
            self.level()
        );
        Ok(compressed)
    }

    /// Inflate exactly one zlib stream
    ///
    /// Fails with [DiskError::DataFormat] if the buffer is not zlib data,
    /// ends before the stream does, or has bytes left after it.
    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(data.len().max(CHUNK_SIZE));
        let consumed = inflate_stream(data, &mut out)?;
        if consumed < data.len() {
            let trailing = data.len() - consumed;
            log::debug!("{trailing} bytes follow the end of the zlib stream");
            return Err(DiskError::DataFormat(format!(
                "{trailing} trailing bytes after the end of the stream"
            )));
        }
        log::trace!(
            "decompressed {} bytes into {} bytes",
            data.len(),
            out.len()
        );
        Ok(out)
    }

    /// Inflate a sequence of zlib streams written back to back and
    /// concatenate their output
    ///
    /// An empty buffer is an empty sequence.
    pub fn decompress_concatenated(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(data.len().max(CHUNK_SIZE));
        let mut offset = 0;
        let mut streams = 0;
        while offset < data.len() {
            offset += inflate_stream(&data[offset..], &mut out)?;
            streams += 1;
        }
        log::trace!(
            "decompressed {} streams ({} bytes) into {} bytes",
            streams,
            data.len(),
            out.len()
        );
        Ok(out)
    }
}

/// Inflate the zlib stream at the start of `data` into `out`, returning how
/// many input bytes the stream occupied
fn inflate_stream(data: &[u8], out: &mut Vec<u8>) -> Result<usize> {
    let mut inflater = Decompress::new(true);
    loop {
        if out.len() == out.capacity() {
            out.reserve(CHUNK_SIZE);
        }
        let consumed = inflater.total_in() as usize;
        let produced = inflater.total_out();

        let status = inflater
            .decompress_vec(&data[consumed..], out, FlushDecompress::None)
            .map_err(|e| {
                log::debug!("invalid zlib data at byte {consumed}: {e}");
                DiskError::from(e)
            })?;

        match status {
            Status::StreamEnd => return Ok(inflater.total_in() as usize),
            Status::Ok | Status::BufError => {
                let progressed = inflater.total_in() as usize != consumed
                    || inflater.total_out() != produced;
                // output always has room here, so a stall means the input
                // ran out before the stream ended
                if !progressed {
                    log::debug!(
                        "zlib stream truncated after {consumed} bytes"
                    );
                    return Err(DiskError::DataFormat(
                        "truncated zlib stream".to_owned(),
                    ));
                }
            }
        }
    }
}

/// Compress with the default level
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    Deflate::default().compress(data)
}

/// Decompress a single zlib stream
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    Deflate::default().decompress(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use rand::RngCore;
    use rstest::rstest;

    #[quickcheck]
    fn compress_then_decompress_is_identity(data: Vec<u8>) -> bool {
        let compressed = compress(&data).unwrap();
        decompress(&compressed).unwrap() == data
    }

    #[rstest]
    #[case(Deflate::new(0))]
    #[case(Deflate::fast())]
    #[case(Deflate::default())]
    #[case(Deflate::best())]
    fn every_level_is_readable_by_the_default_codec(#[case] codec: Deflate) {
        let data = "line 1\nline 2\nline 3\n".repeat(200);
        let compressed = codec.compress(data.as_bytes()).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), data.as_bytes());
    }

    #[test]
    fn out_of_range_level_falls_back_to_default() {
        assert_eq!(Deflate::new(42).level(), DEFAULT_LEVEL);
        assert_eq!(Deflate::new(3).level(), 3);
        assert_eq!(Deflate::default(), Deflate::new(DEFAULT_LEVEL));
    }

    #[test]
    fn empty_input_compresses_to_a_valid_stream() {
        let compressed = compress(&[]).unwrap();
        assert!(!compressed.is_empty());
        assert_eq!(decompress(&compressed).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn output_is_a_zlib_stream() {
        let compressed = compress(b"hello").unwrap();
        // CMF: deflate with a 32K window
        assert_eq!(compressed[0], 0x78);
        let header = u16::from_be_bytes([compressed[0], compressed[1]]);
        assert_eq!(header % 31, 0);
    }

    #[test]
    fn output_spanning_many_chunks() {
        let mut data = vec![0u8; CHUNK_SIZE * 64];
        rand::thread_rng().fill_bytes(&mut data[..CHUNK_SIZE]);
        let compressed = compress(&data).unwrap();
        assert!(compressed.len() < data.len());
        assert_eq!(decompress(&compressed).unwrap(), data);
    }

    #[rstest]
    #[case(b"definitely not deflate".as_slice())]
    #[case(&[0xff, 0x00, 0x13, 0x37, 0x42])]
    #[case(&[])]
    fn garbage_is_a_data_format_error(#[case] data: &[u8]) {
        let err = decompress(data).unwrap_err();
        assert!(err.is_data_format(), "{err:?}");
    }

    #[test]
    fn truncated_stream_is_a_data_format_error() {
        let compressed = compress(&"abc".repeat(1000).into_bytes()).unwrap();
        let truncated = &compressed[..compressed.len() / 2];
        assert!(decompress(truncated).unwrap_err().is_data_format());
    }

    #[test]
    fn corrupted_checksum_is_a_data_format_error() {
        let mut compressed = compress(b"checksummed content").unwrap();
        let last = compressed.len() - 1;
        compressed[last] ^= 0xff;
        assert!(decompress(&compressed).unwrap_err().is_data_format());
    }

    #[test]
    fn concatenated_streams_need_the_tolerant_reader() {
        let mut data = compress(b"first ").unwrap();
        data.extend(compress(b"second").unwrap());

        assert!(decompress(&data).unwrap_err().is_data_format());
        assert_eq!(
            Deflate::default()
                .decompress_concatenated(&data)
                .unwrap(),
            b"first second"
        );
    }

    #[test]
    fn concatenated_reader_accepts_nothing_and_rejects_garbage() {
        let codec = Deflate::default();
        assert!(codec
            .decompress_concatenated(&[])
            .unwrap()
            .is_empty());

        let mut data = compress(b"valid").unwrap();
        data.extend_from_slice(b"junk");
        assert!(codec
            .decompress_concatenated(&data)
            .unwrap_err()
            .is_data_format());
    }
}
