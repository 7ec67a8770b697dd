use log::trace;

use crate::error::{Error, Result};
use crate::{DecodeOpts, Kind, Reader};

use super::{Payload, Tag};

/// Decode a single root tag from the start of `data`. Any bytes after the
/// root are left unread.
pub fn decode_tag(data: &[u8]) -> Result<Tag> {
    decode_tag_with_opts(data, DecodeOpts::default())
}

pub fn decode_tag_with_opts(data: &[u8], opts: DecodeOpts) -> Result<Tag> {
    Tag::read_from_with_opts(&mut Reader::new(data), opts)
}

/// Decode root tags stored back to back until the input is used up, as tile
/// entities and entities are stored.
pub fn decode_tags(data: &[u8]) -> Result<Vec<Tag>> {
    decode_tags_with_opts(data, DecodeOpts::default())
}

pub fn decode_tags_with_opts(data: &[u8], opts: DecodeOpts) -> Result<Vec<Tag>> {
    let mut input = Reader::new(data);
    let mut tags = vec![];
    while !input.is_finished() {
        tags.push(Tag::read_from_with_opts(&mut input, opts)?);
    }
    Ok(tags)
}

impl Tag {
    /// Read one complete root tag: kind, name and payload.
    pub fn read_from(input: &mut Reader) -> Result<Tag> {
        Self::read_from_with_opts(input, DecodeOpts::default())
    }

    pub fn read_from_with_opts(input: &mut Reader, opts: DecodeOpts) -> Result<Tag> {
        let kind = input.read_kind()?;
        if kind == Kind::End {
            // End only ever terminates a compound.
            return Err(Error::UnsupportedTagKind(kind.into()));
        }

        Decoder { input, opts }.named(kind, 0)
    }
}

struct Decoder<'r, 'a> {
    input: &'r mut Reader<'a>,
    opts: DecodeOpts,
}

impl<'r, 'a> Decoder<'r, 'a> {
    fn named(&mut self, kind: Kind, depth: usize) -> Result<Tag> {
        let name = self.input.read_str()?;
        trace!("decoding {:?} {:?}", kind, name);
        let payload = self.payload(kind, depth)?;
        Ok(Tag { name, payload })
    }

    fn seq_len(&mut self) -> Result<usize> {
        let len = self.input.read_len()?;
        if len > self.opts.max_seq_len {
            return Err(Error::LimitExceeded);
        }
        Ok(len)
    }

    fn payload(&mut self, kind: Kind, depth: usize) -> Result<Payload> {
        Ok(match kind {
            Kind::End => return Err(Error::UnsupportedTagKind(kind.into())),
            Kind::Byte => Payload::Byte(self.input.read_i8()?),
            Kind::Short => Payload::Short(self.input.read_i16()?),
            Kind::Int => Payload::Int(self.input.read_i32()?),
            Kind::Long => Payload::Long(self.input.read_i64()?),
            Kind::String => Payload::String(self.input.read_str()?),
            Kind::ByteArray => {
                let len = self.seq_len()?;
                let bs = self.input.read_bytes(len)?;
                Payload::ByteArray(bs.iter().map(|b| *b as i8).collect())
            }
            Kind::List => {
                let depth = self.enter(depth)?;
                let element = self.input.read_kind()?;
                let len = self.seq_len()?;

                if element == Kind::End {
                    // Empty lists are often written with an End element kind.
                    if len != 0 {
                        return Err(Error::UnsupportedTagKind(element.into()));
                    }
                    return Ok(Payload::List(vec![]));
                }

                // Every element takes at least one byte, so don't trust the
                // length beyond what the input could hold.
                let mut items = Vec::with_capacity(len.min(self.input.remaining()));
                for _ in 0..len {
                    items.push(self.payload(element, depth)?);
                }
                Payload::List(items)
            }
            Kind::Compound => {
                let depth = self.enter(depth)?;
                let mut children = vec![];
                loop {
                    let kind = self.input.read_kind()?;
                    if kind == Kind::End {
                        break;
                    }
                    children.push(self.named(kind, depth)?);
                }
                Payload::Compound(children)
            }
        })
    }

    fn enter(&self, depth: usize) -> Result<usize> {
        let depth = depth + 1;
        if depth > self.opts.max_depth {
            return Err(Error::LimitExceeded);
        }
        Ok(depth)
    }
}
