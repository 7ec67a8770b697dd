use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::Kind;

/// Little-endian NBT primitives for any writer.
pub trait WriteNbt: Write {
    fn write_kind(&mut self, kind: Kind) -> Result<()> {
        self.write_u8(kind.into())?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, s: &str) -> Result<()> {
        let len: u16 = s.len().try_into().map_err(|_| Error::ValueOutOfRange)?;
        self.write_u16::<LittleEndian>(len)?;
        self.write_all(s.as_bytes())?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        let len: i32 = len.try_into().map_err(|_| Error::ValueOutOfRange)?;
        self.write_i32::<LittleEndian>(len)?;
        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write {}
