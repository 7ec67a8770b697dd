mod de;
mod ser;

use serde::{Deserialize, Serialize};

use crate::Kind;

pub use self::de::{decode_tag, decode_tag_with_opts, decode_tags, decode_tags_with_opts};
pub use self::ser::{encode_tag, encode_tags};

/// A complete NBT tag: a name and an owned payload. Compounds and Lists own
/// their children, and are recursively decoded.
///
/// The name is only meaningful for roots and the children of a Compound.
/// Elements of a List or ByteArray are addressed by position instead, so they
/// are stored as bare [`Payload`]s.
///
/// Two tags are equal when their names and payloads are deep-equal, with
/// Compound children compared in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub payload: Payload,
}

/// The value carried by a [`Tag`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    String(String),
    ByteArray(Vec<i8>),
    /// Elements are expected to all be the same kind. This is checked when
    /// encoding, since the format stores the element kind once.
    List(Vec<Payload>),
    /// Children in wire order. Names are not required to be unique, lookups
    /// return the first match.
    Compound(Vec<Tag>),
}

impl Payload {
    pub fn kind(&self) -> Kind {
        match self {
            Payload::Byte(_) => Kind::Byte,
            Payload::Short(_) => Kind::Short,
            Payload::Int(_) => Kind::Int,
            Payload::Long(_) => Kind::Long,
            Payload::String(_) => Kind::String,
            Payload::ByteArray(_) => Kind::ByteArray,
            Payload::List(_) => Kind::List,
            Payload::Compound(_) => Kind::Compound,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Payload::Byte(v) => Some(v as i64),
            Payload::Short(v) => Some(v as i64),
            Payload::Int(v) => Some(v as i64),
            Payload::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Payload::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Tag {
    pub fn new(name: impl Into<String>, payload: Payload) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    pub fn byte(name: impl Into<String>, v: i8) -> Self {
        Self::new(name, Payload::Byte(v))
    }

    pub fn short(name: impl Into<String>, v: i16) -> Self {
        Self::new(name, Payload::Short(v))
    }

    pub fn int(name: impl Into<String>, v: i32) -> Self {
        Self::new(name, Payload::Int(v))
    }

    pub fn long(name: impl Into<String>, v: i64) -> Self {
        Self::new(name, Payload::Long(v))
    }

    pub fn string(name: impl Into<String>, v: impl Into<String>) -> Self {
        Self::new(name, Payload::String(v.into()))
    }

    pub fn byte_array(name: impl Into<String>, v: Vec<i8>) -> Self {
        Self::new(name, Payload::ByteArray(v))
    }

    pub fn list(name: impl Into<String>, v: Vec<Payload>) -> Self {
        Self::new(name, Payload::List(v))
    }

    pub fn compound(name: impl Into<String>, children: Vec<Tag>) -> Self {
        Self::new(name, Payload::Compound(children))
    }

    pub fn kind(&self) -> Kind {
        self.payload.kind()
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.payload.as_i64()
    }

    pub fn as_str(&self) -> Option<&str> {
        self.payload.as_str()
    }

    /// First child of a Compound with the given name. `None` for any other
    /// kind of tag.
    pub fn get(&self, name: &str) -> Option<&Tag> {
        match &self.payload {
            Payload::Compound(children) => children.iter().find(|t| t.name == name),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Tag> {
        match &mut self.payload {
            Payload::Compound(children) => children.iter_mut().find(|t| t.name == name),
            _ => None,
        }
    }

    /// Element of a List or ByteArray by position. ByteArray elements are
    /// returned as `Payload::Byte`.
    pub fn index(&self, i: usize) -> Option<Payload> {
        match &self.payload {
            Payload::List(items) => items.get(i).cloned(),
            Payload::ByteArray(bs) => bs.get(i).map(|b| Payload::Byte(*b)),
            _ => None,
        }
    }

    /// Append to a Compound, or append the child's payload to a List.
    ///
    /// Returns the child back if this tag cannot hold children.
    pub fn push(&mut self, child: Tag) -> Result<(), Tag> {
        match &mut self.payload {
            Payload::Compound(children) => {
                children.push(child);
                Ok(())
            }
            Payload::List(items) => {
                items.push(child.payload);
                Ok(())
            }
            _ => Err(child),
        }
    }

    /// Remove and return the first child of a Compound with the given name.
    pub fn remove(&mut self, name: &str) -> Option<Tag> {
        match &mut self.payload {
            Payload::Compound(children) => {
                let i = children.iter().position(|t| t.name == name)?;
                Some(children.remove(i))
            }
            _ => None,
        }
    }
}

#[cfg(feature = "arbitrary1")]
fn homogeneous_list(
    u: &mut arbitrary::Unstructured,
    depth: usize,
) -> arbitrary::Result<Vec<Payload>> {
    // Pick the element kind once so encoding never sees a mixed list.
    let kind: Kind = u.arbitrary()?;
    if kind == Kind::End {
        return Err(arbitrary::Error::IncorrectFormat);
    }

    let len = u.arbitrary_len::<u8>()?;
    let mut items = Vec::with_capacity(len);
    for _ in 0..len {
        items.push(arb_payload(u, kind, depth)?);
    }
    Ok(items)
}

#[cfg(feature = "arbitrary1")]
fn arb_payload(
    u: &mut arbitrary::Unstructured,
    kind: Kind,
    depth: usize,
) -> arbitrary::Result<Payload> {
    if depth > 16 && matches!(kind, Kind::List | Kind::Compound) {
        return Err(arbitrary::Error::IncorrectFormat);
    }

    Ok(match kind {
        Kind::End => return Err(arbitrary::Error::IncorrectFormat),
        Kind::Byte => Payload::Byte(u.arbitrary()?),
        Kind::Short => Payload::Short(u.arbitrary()?),
        Kind::Int => Payload::Int(u.arbitrary()?),
        Kind::Long => Payload::Long(u.arbitrary()?),
        Kind::String => Payload::String(u.arbitrary()?),
        Kind::ByteArray => Payload::ByteArray(u.arbitrary()?),
        Kind::List => Payload::List(homogeneous_list(u, depth + 1)?),
        Kind::Compound => {
            let len = u.arbitrary_len::<u8>()?;
            let mut children = Vec::with_capacity(len);
            for _ in 0..len {
                let name: String = u.arbitrary()?;
                let kind: Kind = u.arbitrary()?;
                children.push(Tag::new(name, arb_payload(u, kind, depth + 1)?));
            }
            Payload::Compound(children)
        }
    })
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Tag {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let name: String = u.arbitrary()?;
        let kind: Kind = u.arbitrary()?;
        Ok(Tag::new(name, arb_payload(u, kind, 0)?))
    }
}
