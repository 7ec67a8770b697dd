use crate::error::{Error, Result};
use crate::{decode_tags, encode_tags, Reader, Tag};

use super::builder::Builder;

fn tile_entity(id: &str, x: i32, y: i32, z: i32) -> Tag {
    Tag::compound(
        "",
        vec![
            Tag::string("id", id),
            Tag::int("x", x),
            Tag::int("y", y),
            Tag::int("z", z),
        ],
    )
}

#[test]
fn empty_stream() -> Result<()> {
    assert_eq!(decode_tags(&[])?, Vec::<Tag>::new());
    assert_eq!(encode_tags(&[])?, Vec::<u8>::new());
    Ok(())
}

#[test]
fn back_to_back_compounds() -> Result<()> {
    let input = Builder::new()
        .start_compound("")
        .string("id", "Chest")
        .end_compound()
        .start_compound("")
        .string("id", "Sign")
        .end_compound()
        .build();

    let tags = decode_tags(&input)?;
    assert_eq!(
        tags,
        vec![
            Tag::compound("", vec![Tag::string("id", "Chest")]),
            Tag::compound("", vec![Tag::string("id", "Sign")]),
        ]
    );
    Ok(())
}

#[test]
fn stream_round_trip() -> Result<()> {
    let tags = vec![
        tile_entity("Chest", 17, 64, -3),
        tile_entity("CommandBlock", -1, 0, 255),
        tile_entity("Furnace", i32::MAX, i32::MIN, 0),
    ];

    let bs = encode_tags(&tags)?;
    assert_eq!(decode_tags(&bs)?, tags);
    Ok(())
}

#[test]
fn stream_positions_and_pop() -> Result<()> {
    let tags = vec![tile_entity("Chest", 17, 64, -3), tile_entity("Sign", 1, 2, 3)];
    let bs = encode_tags(&tags)?;

    let mut input = Reader::new(&bs);
    let mut first = Tag::read_from(&mut input)?;
    assert!(!input.is_finished());
    assert_eq!(input.position() + input.remaining(), bs.len());

    // Callers strip the position before attaching the rest to a block.
    let x = first.remove("x").and_then(|t| t.as_i64());
    let y = first.remove("y").and_then(|t| t.as_i64());
    let z = first.remove("z").and_then(|t| t.as_i64());
    assert_eq!((x, y, z), (Some(17), Some(64), Some(-3)));
    assert_eq!(first, Tag::compound("", vec![Tag::string("id", "Chest")]));

    let second = Tag::read_from(&mut input)?;
    assert_eq!(second, tags[1]);
    assert!(input.is_finished());
    Ok(())
}

#[test]
fn truncated_second_tag() -> Result<()> {
    let first = tile_entity("Chest", 0, 0, 0);
    let boundary = crate::encode_tag(&first)?.len();
    let bs = encode_tags(&[first, tile_entity("Sign", 0, 0, 0)])?;

    for len in 1..bs.len() {
        let result = decode_tags(&bs[..len]);
        // Cutting exactly at the boundary leaves one complete tag.
        if len == boundary {
            assert_eq!(result?.len(), 1);
        } else {
            assert_eq!(result, Err(Error::TruncatedData), "len {}", len);
        }
    }
    Ok(())
}

#[test]
fn writer_failure_is_io_error() {
    struct Full;
    impl std::io::Write for Full {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "full"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let result = Tag::int("a", 1).write_to(&mut Full);
    assert!(matches!(result, Err(Error::Io(_))));
}
