use byteorder::{LittleEndian, ReadBytesExt};

use crate::{
    error::{Error, Result},
    Kind,
};

/// Sequential little-endian reader over a byte slice.
///
/// Every read either consumes exactly the bytes it needs or fails with
/// [`Error::TruncatedData`] without moving the cursor.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// True once every byte of the input has been consumed. Used to find the
    /// end of back-to-back root tags, which have no outer length.
    pub fn is_finished(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn consume(&mut self, n: usize) -> Result<&'a [u8]> {
        let start = self.pos;
        let end = start + n;
        if end <= self.data.len() {
            self.pos = end;
            Ok(&self.data[start..end])
        } else {
            Err(Error::TruncatedData)
        }
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        self.consume(n)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.consume(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        let mut bs = self.consume(std::mem::size_of::<i16>())?;
        Ok(bs.read_i16::<LittleEndian>()?)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let mut bs = self.consume(std::mem::size_of::<u16>())?;
        Ok(bs.read_u16::<LittleEndian>()?)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let mut bs = self.consume(std::mem::size_of::<i32>())?;
        Ok(bs.read_i32::<LittleEndian>()?)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let mut bs = self.consume(std::mem::size_of::<u32>())?;
        Ok(bs.read_u32::<LittleEndian>()?)
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        let mut bs = self.consume(std::mem::size_of::<i64>())?;
        Ok(bs.read_i64::<LittleEndian>()?)
    }

    /// Read a 4 byte signed count, rejecting negative values.
    pub fn read_len(&mut self) -> Result<usize> {
        let len = self.read_i32()?;
        usize::try_from(len).map_err(|_| Error::InvalidLength(len))
    }

    /// Read a u16 byte length followed by that many bytes of UTF-8.
    pub fn read_str(&mut self) -> Result<String> {
        let len = self.read_u16()? as usize;
        let bs = self.consume(len)?;
        std::str::from_utf8(bs)
            .map(str::to_owned)
            .map_err(|_| Error::InvalidEncoding(bs.to_vec()))
    }

    pub fn read_kind(&mut self) -> Result<Kind> {
        let kind = self.read_u8()?;
        Kind::try_from(kind).map_err(|_| Error::UnsupportedTagKind(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_read_leaves_cursor() {
        let mut input = Reader::new(&[1, 0, 0]);
        assert_eq!(input.read_u16(), Ok(1));
        assert_eq!(input.read_i32(), Err(Error::TruncatedData));
        assert_eq!(input.position(), 2);
        assert_eq!(input.read_u8(), Ok(0));
        assert!(input.is_finished());
    }

    #[test]
    fn read_bytes_exact_length() {
        let mut input = Reader::new(b"abcd");
        assert_eq!(input.read_bytes(5), Err(Error::TruncatedData));
        assert_eq!(input.read_bytes(4), Ok(&b"abcd"[..]));
        assert_eq!(input.read_bytes(0), Ok(&b""[..]));
        assert_eq!(input.read_bytes(1), Err(Error::TruncatedData));
    }
}
