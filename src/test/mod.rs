use crate::Kind;

pub mod builder;
mod stream;

macro_rules! check_kinds {
    {$($kind:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Kind::$kind), $val);
            assert_eq!(Kind::try_from($val as u8).unwrap(), Kind::$kind);
        )*
    };
}

#[test]
fn exhaustive_kind_check() {
    check_kinds! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
    }

    // Float, Double and the int/long arrays are not part of this format.
    for value in [5u8, 6, 11, 12] {
        assert!(Kind::try_from(value).is_err());
    }
    for value in 13..=u8::MAX {
        assert!(Kind::try_from(value).is_err());
    }
}
