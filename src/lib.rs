//! fastbedrock decodes and encodes the binary structures found in
//! *Minecraft: Bedrock Edition* worlds: little-endian NBT, and the
//! palette-compressed block storage of 16x16x16 subchunks.
//!
//! * For the NBT tree and its codec see [`Tag`], [`decode_tag`] and
//!   [`encode_tag`].
//! * For subchunk block storage see [`SubChunk`], [`decode_subchunk`] and
//!   [`encode_subchunk`].
//! * For the bit packing used by block storage see [`bits`].
//!
//! Neither codec does any IO. Reading the world database and mapping
//! coordinates to keys is left to the caller.
//!
//! # Quick example
//!
//! Tile entities are stored as compounds back to back, with no outer length.
//!
//! ```
//! use fastbedrock::{decode_tags, encode_tags, Tag};
//!
//! # fn main() -> fastbedrock::error::Result<()> {
//! let chest = Tag::compound(
//!     "",
//!     vec![
//!         Tag::string("id", "Chest"),
//!         Tag::int("x", 5),
//!         Tag::int("y", 64),
//!         Tag::int("z", -2),
//!     ],
//! );
//!
//! let bytes = encode_tags(&[chest.clone(), chest.clone()])?;
//! let tags = decode_tags(&bytes)?;
//!
//! assert_eq!(tags.len(), 2);
//! assert_eq!(tags[0].get("z").and_then(Tag::as_i64), Some(-2));
//! # Ok(())
//! # }
//! ```

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

pub mod bits;
pub mod error;

mod input;
mod subchunk;
mod tag;
mod write;

pub use input::Reader;
pub use subchunk::*;
pub use tag::*;
pub use write::WriteNbt;

#[cfg(test)]
mod test;

/// The kind of an NBT tag. This does not carry the value or the name of the
/// data.
///
/// Bedrock block and tile entity data only uses this subset of the NBT kinds.
/// Any other discriminant is rejected rather than skipped.
#[derive(
    Debug, TryFromPrimitive, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy,
)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Kind {
    /// Represents the end of a Compound object. Never a tag on its own.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64.
    Long = 4,
    /// Represents an array of Byte (i8).
    ByteArray = 7,
    /// Represents a UTF-8 string.
    String = 8,
    /// Represents a list of other objects, all of the same kind.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
}

impl From<Kind> for u8 {
    fn from(kind: Kind) -> Self {
        kind as u8
    }
}

/// Limits applied while decoding untrusted input.
///
/// ```
/// # use fastbedrock::DecodeOpts;
/// let opts = DecodeOpts::new().max_seq_len(1024).max_depth(32);
/// # let _ = opts;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOpts {
    /// Largest element count accepted for a List or ByteArray.
    pub max_seq_len: usize,
    /// Deepest nesting of Lists and Compounds accepted.
    pub max_depth: usize,
}

impl DecodeOpts {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn max_seq_len(mut self, value: usize) -> Self {
        self.max_seq_len = value;
        self
    }

    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }
}

impl Default for DecodeOpts {
    fn default() -> Self {
        Self {
            max_seq_len: i32::MAX as usize,
            max_depth: 512,
        }
    }
}
