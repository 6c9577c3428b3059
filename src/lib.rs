//! Read, write and append whole files, optionally through a zlib layer.
//!
//! ```no_run
//! use disklib::{compressed, reader, writer};
//!
//! # fn main() -> disklib::Result<()> {
//! writer::write_lines("notes.txt", ["line 1", "line 2"])?;
//! writer::append_str("notes.txt", "\nline 3", true)?;
//! assert_eq!(reader::read_lines("notes.txt")?.len(), 3);
//!
//! compressed::write_str("notes.z", "squeezed", false)?;
//! assert_eq!(compressed::read_to_string("notes.z")?, "squeezed");
//! # Ok(())
//! # }
//! ```
//!
//! All operations are synchronous and stateless. Nothing is locked, so
//! concurrent writers to the same path may interleave.

pub mod codec;
pub mod compressed;
pub mod errors;
pub mod reader;
pub mod text;
pub mod writer;

pub use codec::Deflate;
pub use compressed::CompressedDisk;
pub use errors::{DiskError, Result};
pub use writer::WriteMode;
