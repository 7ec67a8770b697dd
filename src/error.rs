//! Contains the Error and Result type used by the tag and subchunk codecs.

/// Various errors that can occur while decoding or encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Input ended part way through a value.
    TruncatedData,

    /// A string was not valid UTF-8. Contains the offending bytes.
    InvalidEncoding(Vec<u8>),

    /// Tag discriminant outside of the kinds this crate understands.
    UnsupportedTagKind(u8),

    /// Subchunk version byte was not 8.
    UnsupportedFormatVersion(u8),

    /// Subchunk storage count was not 1.
    UnsupportedStorageLayout(u8),

    /// Packing header gave a bits-per-block of 0 or more than 32.
    UnsupportedBitsPerBlock(u8),

    /// A packed index did not point into the palette.
    PaletteIndexOutOfRange { index: usize, palette_len: usize },

    /// A palette entry was not a compound with a `name` string and `val` short.
    InvalidPaletteEntry,

    /// A list contained elements of more than one kind.
    HeterogeneousList,

    /// A value could not be represented in its wire field, eg a string over
    /// 65535 bytes.
    ValueOutOfRange,

    /// A length prefix was negative.
    InvalidLength(i32),

    /// Input exceeded one of the limits in [`DecodeOpts`][crate::DecodeOpts].
    LimitExceeded,

    /// Any other IO failure from an underlying writer.
    Io(String),
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::TruncatedData => f.write_str("eof: unexpectedly ran out of input"),
            Error::InvalidEncoding(data) => write!(
                f,
                "invalid string: non-unicode: {}",
                String::from_utf8_lossy(data)
            ),
            Error::UnsupportedTagKind(kind) => write!(f, "invalid nbt tag value: {}", kind),
            Error::UnsupportedFormatVersion(v) => {
                write!(f, "unsupported subchunk version: {}", v)
            }
            Error::UnsupportedStorageLayout(n) => {
                write!(f, "unexpected number of storages: {}", n)
            }
            Error::UnsupportedBitsPerBlock(bits) => {
                write!(f, "unsupported bits per block: {}", bits)
            }
            Error::PaletteIndexOutOfRange { index, palette_len } => write!(
                f,
                "palette index {} out of range for palette of {}",
                index, palette_len
            ),
            Error::InvalidPaletteEntry => {
                f.write_str("palette entry must be a compound with name and val")
            }
            Error::HeterogeneousList => f.write_str("list elements are not all the same kind"),
            Error::ValueOutOfRange => f.write_str("value too large for its field"),
            Error::InvalidLength(len) => write!(f, "negative length: {}", len),
            Error::LimitExceeded => f.write_str("input exceeded decode limits"),
            Error::Io(msg) => write!(f, "io error: {}", msg),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Error::TruncatedData,
            _ => Error::Io(e.to_string()),
        }
    }
}
