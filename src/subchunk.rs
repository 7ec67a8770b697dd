//! Block storage of a single 16x16x16 subchunk.
//!
//! The stored form is a small header, the palette indices of every block
//! bit-packed into 32-bit words, then the palette itself as NBT compounds:
//!
//! ```text
//! [version = 8][storages = 1][bits_per_block << 1]
//! [words: u32 LE * words_needed(bits_per_block)]
//! [palette len: i32 LE][palette entry: compound { name: string, val: short }]*
//! ```
//!
//! Blocks are stored with x outermost then z then y, so the flat index of a
//! block is `x * 256 + z * 16 + y`. [`SubChunk`] is addressed as `(x, y, z)`,
//! the y and z axes are swapped on the way in and out.

use std::collections::HashMap;

use byteorder::{LittleEndian, WriteBytesExt};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::bits::{self, BLOCKS_PER_SUBCHUNK};
use crate::error::{Error, Result};
use crate::{Payload, Reader, Tag, WriteNbt};

/// The only subchunk version this crate understands.
pub const SUBCHUNK_VERSION: u8 = 8;

const AIR: &str = "minecraft:air";

/// A block in a subchunk: its namespaced name and data value.
///
/// `nbt` holds tile entity data attached by the caller, eg a chest's items.
/// It is not part of the subchunk storage, so it is always `None` after
/// decoding a subchunk and is ignored when building the palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub name: String,
    pub val: i16,
    pub nbt: Option<Tag>,
}

impl Block {
    pub fn new(name: impl Into<String>, val: i16) -> Self {
        Self {
            name: name.into(),
            val,
            nbt: None,
        }
    }

    pub fn air() -> Self {
        Self::new(AIR, 0)
    }

    pub fn with_nbt(mut self, nbt: Tag) -> Self {
        self.nbt = Some(nbt);
        self
    }

    /// The palette compound for this block, as it is stored.
    pub fn palette_entry(&self) -> Tag {
        Tag::compound(
            "",
            vec![
                Tag::string("name", self.name.as_str()),
                Tag::short("val", self.val),
            ],
        )
    }

    fn from_palette_entry(tag: &Tag) -> Result<Self> {
        if !matches!(tag.payload, Payload::Compound(_)) {
            return Err(Error::InvalidPaletteEntry);
        }

        let name = tag
            .get("name")
            .and_then(Tag::as_str)
            .ok_or(Error::InvalidPaletteEntry)?;

        let val = match tag.get("val").map(|t| &t.payload) {
            Some(Payload::Short(val)) => *val,
            _ => return Err(Error::InvalidPaletteEntry),
        };

        Ok(Block::new(name, val))
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.val)
    }
}

/// A 16x16x16 volume of blocks, addressed as `(x, y, z)` with each
/// coordinate in `0..16`. Coordinates out of range panic, like slice
/// indexing.
#[derive(Debug, Clone, PartialEq)]
pub struct SubChunk {
    blocks: Vec<Block>,
}

fn index(x: usize, y: usize, z: usize) -> usize {
    assert!(
        x < 16 && y < 16 && z < 16,
        "block ({}, {}, {}) outside of subchunk",
        x,
        y,
        z
    );
    x * 256 + y * 16 + z
}

/// Map a flat index in stored order (x, z, y) to one in logical order
/// (x, y, z). The mapping is its own inverse.
fn swap_yz(i: usize) -> usize {
    let x = i / 256;
    let a = (i / 16) % 16;
    let b = i % 16;
    x * 256 + b * 16 + a
}

impl SubChunk {
    /// A subchunk of nothing but air.
    pub fn empty() -> Self {
        Self::filled(Block::air())
    }

    pub fn filled(block: Block) -> Self {
        Self {
            blocks: vec![block; BLOCKS_PER_SUBCHUNK],
        }
    }

    pub fn block(&self, x: usize, y: usize, z: usize) -> &Block {
        &self.blocks[index(x, y, z)]
    }

    pub fn block_mut(&mut self, x: usize, y: usize, z: usize) -> &mut Block {
        &mut self.blocks[index(x, y, z)]
    }

    pub fn set_block(&mut self, x: usize, y: usize, z: usize, block: Block) {
        self.blocks[index(x, y, z)] = block;
    }

    /// Every block with its `(x, y, z)`, x outermost and z innermost.
    pub fn blocks(&self) -> impl Iterator<Item = ((usize, usize, usize), &Block)> + '_ {
        self.blocks
            .iter()
            .enumerate()
            .map(|(i, b)| ((i / 256, (i / 16) % 16, i % 16), b))
    }

    /// Distinct blocks in the order they would be stored in the palette, ie
    /// first seen in stored order.
    pub fn palette(&self) -> Vec<&Block> {
        self.palette_indices().0
    }

    /// Build the palette and the palette index of every block in stored
    /// order.
    fn palette_indices(&self) -> (Vec<&Block>, Vec<u32>) {
        let mut palette: Vec<&Block> = vec![];
        let mut lookup: HashMap<(&str, i16), u32> = HashMap::new();
        let mut indices = Vec::with_capacity(BLOCKS_PER_SUBCHUNK);

        for i in 0..BLOCKS_PER_SUBCHUNK {
            let block = &self.blocks[swap_yz(i)];
            let index = *lookup
                .entry((block.name.as_str(), block.val))
                .or_insert_with(|| {
                    palette.push(block);
                    // At most 4096 distinct blocks, so this fits.
                    (palette.len() - 1) as u32
                });
            indices.push(index);
        }

        (palette, indices)
    }

    /// Decode subchunk block storage. Any bytes after the palette are
    /// ignored.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut input = Reader::new(data);

        let version = input.read_u8()?;
        if version != SUBCHUNK_VERSION {
            return Err(Error::UnsupportedFormatVersion(version));
        }

        // More than one storage is used for eg waterlogged blocks.
        let storages = input.read_u8()?;
        if storages != 1 {
            return Err(Error::UnsupportedStorageLayout(storages));
        }

        // Lowest bit is a flag we don't use. Above 32 bits not even one index
        // fits in a word.
        let header = input.read_u8()?;
        let bits = (header >> 1) as usize;
        if bits == 0 || bits > 32 {
            return Err(Error::UnsupportedBitsPerBlock(header >> 1));
        }

        let num_words = bits::words_needed(bits);
        debug!(
            "subchunk v{}: {} bits per block, {} words",
            version, bits, num_words
        );

        let mut words = Vec::with_capacity(num_words);
        for _ in 0..num_words {
            words.push(input.read_u32()?);
        }
        let indices = bits::unpack_words(&words, bits);

        let palette_len = input.read_len()?;
        debug!("subchunk palette of {}", palette_len);

        let mut palette = Vec::with_capacity(palette_len.min(input.remaining()));
        for _ in 0..palette_len {
            let entry = Tag::read_from(&mut input)?;
            palette.push(Block::from_palette_entry(&entry)?);
        }

        let mut stored = Vec::with_capacity(BLOCKS_PER_SUBCHUNK);
        for index in indices {
            let index = index as usize;
            let block = palette.get(index).ok_or(Error::PaletteIndexOutOfRange {
                index,
                palette_len: palette.len(),
            })?;
            stored.push(block);
        }

        let blocks = (0..BLOCKS_PER_SUBCHUNK)
            .map(|i| stored[swap_yz(i)].clone())
            .collect();

        Ok(Self { blocks })
    }

    /// Encode as subchunk block storage, using the smallest bits per block
    /// that can address the palette.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let (palette, indices) = self.palette_indices();
        let bits = bits::bits_per_block(palette.len());
        let words = bits::pack_words(&indices, bits);

        debug!(
            "encoding subchunk: palette of {}, {} bits per block",
            palette.len(),
            bits
        );

        let mut out = Vec::with_capacity(3 + words.len() * 4);
        out.write_u8(SUBCHUNK_VERSION)?;
        out.write_u8(1)?;
        out.write_u8((bits << 1) as u8)?;
        for word in words {
            out.write_u32::<LittleEndian>(word)?;
        }

        out.write_len(palette.len())?;
        for block in palette {
            block.palette_entry().write_to(&mut out)?;
        }

        Ok(out)
    }
}

impl Default for SubChunk {
    fn default() -> Self {
        Self::empty()
    }
}

pub fn decode_subchunk(data: &[u8]) -> Result<SubChunk> {
    SubChunk::from_bytes(data)
}

pub fn encode_subchunk(subchunk: &SubChunk) -> Result<Vec<u8>> {
    subchunk.to_bytes()
}
