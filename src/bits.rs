//! Bit packing of palette indices in subchunk block storage.
//!
//! Indices are packed into little-endian 32-bit words, lowest bits first.
//! An index never spans two words: each word holds `32 / bits` indices and
//! any leftover high bits are padding.

use bit_field::BitField;

/// Number of blocks in a subchunk.
pub const BLOCKS_PER_SUBCHUNK: usize = 16 * 16 * 16;

/// Get the number of bits used per block for a palette of `palette_len`
/// entries. A palette with a single entry still uses one bit.
pub fn bits_per_block(palette_len: usize) -> usize {
    if palette_len <= 1 {
        1
    } else {
        // ceil(log2(len)), without going via floats.
        (usize::BITS - (palette_len - 1).leading_zeros()) as usize
    }
}

pub fn blocks_per_word(bits: usize) -> usize {
    32 / bits
}

/// Number of words needed to hold every block of a subchunk.
pub fn words_needed(bits: usize) -> usize {
    let per_word = blocks_per_word(bits);
    (BLOCKS_PER_SUBCHUNK + per_word - 1) / per_word
}

/// Unpack `BLOCKS_PER_SUBCHUNK` indices from `words`. Padding slots in the
/// last word are dropped. If `words` is short the result is short too.
pub fn unpack_words(words: &[u32], bits: usize) -> Vec<u32> {
    let per_word = blocks_per_word(bits);
    let mut result = Vec::with_capacity(BLOCKS_PER_SUBCHUNK);

    'words: for word in words {
        for i in 0..per_word {
            if result.len() >= BLOCKS_PER_SUBCHUNK {
                break 'words;
            }
            result.push(word.get_bits(i * bits..(i + 1) * bits));
        }
    }

    result
}

/// Pack `indices` into words, `32 / bits` per word. Unused slots in the final
/// word are zero.
///
/// Every index must fit in `bits` bits.
pub fn pack_words(indices: &[u32], bits: usize) -> Vec<u32> {
    let per_word = blocks_per_word(bits);

    indices
        .chunks(per_word)
        .map(|chunk| {
            let mut word = 0u32;
            for (i, index) in chunk.iter().enumerate() {
                word.set_bits(i * bits..(i + 1) * bits, *index);
            }
            word
        })
        .collect()
}
