use crate::Kind;

/// Builder for little-endian NBT and subchunk data. This is to create test
/// data. It specifically does *not* guarantee the resulting data is valid.
/// Creating invalid data is useful for testing.
pub struct Builder {
    payload: Vec<u8>,
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            payload: Vec::new(),
        }
    }

    pub fn tag(mut self, t: Kind) -> Self {
        self.payload.push(t as u8);
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        let len_bytes = &(name.len() as u16).to_le_bytes()[..];
        self.payload.extend_from_slice(len_bytes);
        self.payload.extend_from_slice(name.as_bytes());
        self
    }

    pub fn start_compound(self, name: &str) -> Self {
        self.tag(Kind::Compound).name(name)
    }

    pub fn end_compound(self) -> Self {
        self.tag(Kind::End)
    }

    pub fn start_list(self, name: &str, element: Kind, size: i32) -> Self {
        self.tag(Kind::List).name(name).tag(element).int_payload(size)
    }

    pub fn byte(self, name: &str, b: i8) -> Self {
        self.tag(Kind::Byte).name(name).byte_payload(b)
    }

    pub fn short(self, name: &str, b: i16) -> Self {
        self.tag(Kind::Short).name(name).short_payload(b)
    }

    pub fn int(self, name: &str, b: i32) -> Self {
        self.tag(Kind::Int).name(name).int_payload(b)
    }

    pub fn long(self, name: &str, b: i64) -> Self {
        self.tag(Kind::Long).name(name).long_payload(b)
    }

    pub fn string(self, name: &str, s: &str) -> Self {
        self.tag(Kind::String).name(name).string_payload(s)
    }

    pub fn byte_array(self, name: &str, bs: &[i8]) -> Self {
        self.tag(Kind::ByteArray)
            .name(name)
            .int_payload(bs.len().try_into().unwrap())
            .byte_array_payload(bs)
    }

    pub fn string_payload(self, s: &str) -> Self {
        self.name(s)
    }

    pub fn byte_payload(mut self, b: i8) -> Self {
        self.payload.push(b as u8);
        self
    }

    pub fn byte_array_payload(mut self, bs: &[i8]) -> Self {
        for b in bs {
            self.payload.push(*b as u8);
        }
        self
    }

    pub fn short_payload(mut self, i: i16) -> Self {
        self.payload.extend_from_slice(&i.to_le_bytes()[..]);
        self
    }

    pub fn int_payload(mut self, i: i32) -> Self {
        self.payload.extend_from_slice(&i.to_le_bytes()[..]);
        self
    }

    pub fn long_payload(mut self, i: i64) -> Self {
        self.payload.extend_from_slice(&i.to_le_bytes()[..]);
        self
    }

    /// A single subchunk palette entry.
    pub fn palette_entry(self, name: &str, val: i16) -> Self {
        self.start_compound("")
            .string("name", name)
            .short("val", val)
            .end_compound()
    }

    /// Subchunk header: version, storage count and the packing byte.
    pub fn subchunk_header(self, version: u8, storages: u8, bits: u8) -> Self {
        self.raw_bytes(&[version, storages, bits << 1])
    }

    pub fn words(mut self, words: &[u32]) -> Self {
        for w in words {
            self.payload.extend_from_slice(&w.to_le_bytes()[..]);
        }
        self
    }

    pub fn raw_str_len(mut self, len: usize) -> Self {
        let len: u16 = len.try_into().expect("test given length beyond u16");
        self.payload.extend_from_slice(&len.to_le_bytes());
        self
    }

    /// Straight up add some bytes to the payload. For very corner-case tests
    /// that are not worth a specific builder method.
    pub fn raw_bytes(mut self, bs: &[u8]) -> Self {
        self.payload.extend_from_slice(bs);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.payload
    }
}
