use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::{Kind, WriteNbt};

use super::{Payload, Tag};

/// Encode a single root tag.
pub fn encode_tag(tag: &Tag) -> Result<Vec<u8>> {
    let mut out = vec![];
    tag.write_to(&mut out)?;
    Ok(out)
}

/// Encode root tags back to back with nothing between them.
pub fn encode_tags(tags: &[Tag]) -> Result<Vec<u8>> {
    let mut out = vec![];
    for tag in tags {
        tag.write_to(&mut out)?;
    }
    Ok(out)
}

impl Tag {
    /// Write this tag as a root: kind, name and payload. On error the writer
    /// may have been given part of the tag.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        out.write_kind(self.kind())?;
        out.write_size_prefixed_str(&self.name)?;
        write_payload(out, &self.payload)
    }
}

fn write_payload<W: Write>(out: &mut W, payload: &Payload) -> Result<()> {
    match payload {
        Payload::Byte(v) => out.write_i8(*v)?,
        Payload::Short(v) => out.write_i16::<LittleEndian>(*v)?,
        Payload::Int(v) => out.write_i32::<LittleEndian>(*v)?,
        Payload::Long(v) => out.write_i64::<LittleEndian>(*v)?,
        Payload::String(s) => out.write_size_prefixed_str(s)?,
        Payload::ByteArray(bs) => {
            out.write_len(bs.len())?;
            for b in bs {
                out.write_i8(*b)?;
            }
        }
        Payload::List(items) => {
            // The element kind of an empty list can't be known, Byte is
            // written for compatibility with existing worlds.
            let element = items.first().map(Payload::kind).unwrap_or(Kind::Byte);
            if items.iter().any(|item| item.kind() != element) {
                return Err(Error::HeterogeneousList);
            }

            out.write_kind(element)?;
            out.write_len(items.len())?;
            for item in items {
                write_payload(out, item)?;
            }
        }
        Payload::Compound(children) => {
            for child in children {
                child.write_to(out)?;
            }
            out.write_kind(Kind::End)?;
        }
    }

    Ok(())
}
