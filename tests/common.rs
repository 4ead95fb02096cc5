#![allow(unused_macros, dead_code)]

pub use indoc::indoc;
pub use paste::paste;
pub use strparse::*;

macro_rules! assert_str_eq {
    ($actual:expr, $expected:expr) => {{
        let actual = &$actual[..];
        let expected = &$expected[..];
        if actual != expected {
            panic!(
                indoc! {"
                string not expected value:
                ============================EXPECTED==========================
                {}
                =============================ACTUAL===========================
                {}
                ==============================DIFF============================
                {}
                ==============================================================
            "},
                expected,
                actual,
                colored_diff::PrettyDifference { expected, actual },
            );
        }
    }};
}

macro_rules! assert_kind {
    ($result:expr, $kind:ident) => {{
        match $result {
            Ok(value) => panic!("expected {} error, got {:?}", stringify!($kind), value),
            Err(error) => assert_eq!(error.kind(), ErrorKind::$kind, "{}", error),
        }
    }};
}

pub fn culture(name: &str) -> &'static Culture {
    Culture::get(name).unwrap()
}

pub fn absent() -> Option<&'static str> {
    None
}
