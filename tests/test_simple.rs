#[macro_use]
mod common;

use common::*;

///////////////////////////////////////////////////////////////////////////////
// Bool

#[test]
fn test_bool() {
    assert_eq!("True".convert().boolean().parse(), Ok(true));
    assert_eq!(" fALSE\t".convert().boolean().parse(), Ok(false));
    assert_eq!("true\0".convert().boolean().parse(), Ok(true));
    assert_kind!("yes".convert().boolean().parse(), Format);
    assert_kind!("1".convert().boolean().parse(), Format);
    assert_kind!(absent().convert().boolean().parse(), ArgumentNull);
}

#[test]
fn test_bool_ignores_culture() {
    assert_eq!(
        "true".convert().boolean().parse_culture(culture("fr-FR")),
        Ok(true)
    );
    assert_kind!(
        "vrai".convert().boolean().parse_culture(culture("fr-FR")),
        Format
    );
    assert_eq!("FALSE".convert().boolean().parse_invariant(), Ok(false));
}

#[test]
fn test_bool_strategies() {
    assert_eq!("yes".convert_nullable().boolean().parse(), None);
    assert!(!"yes".convert_defaulted().boolean().parse());
    assert!("yes".convert_defaulted().boolean().or(true).parse());
    assert!(!"false".convert_defaulted().boolean().or(true).parse());
}

///////////////////////////////////////////////////////////////////////////////
// Char

#[test]
fn test_char() {
    assert_eq!("a".convert().character().parse(), Ok('a'));
    assert_eq!("\u{e9}".convert().character().parse(), Ok('\u{e9}'));
    assert_eq!(" ".convert().character().parse(), Ok(' '));
    assert_kind!("ab".convert().character().parse(), Format);
    assert_kind!("".convert().character().parse(), Format);
    assert_kind!(absent().convert().character().parse(), ArgumentNull);
}

#[test]
fn test_char_strategies() {
    assert_eq!("ab".convert_nullable().character().parse(), None);
    assert_eq!("ab".convert_defaulted().character().parse(), '\0');
    assert_eq!("ab".convert_defaulted().character().or('?').parse(), '?');
}

///////////////////////////////////////////////////////////////////////////////
// Inputs

#[test]
fn test_owned_and_optional_inputs() {
    let owned = String::from("12");
    let some: Option<String> = Some("13".into());
    let none: Option<String> = None;

    assert_eq!(owned.convert().u8().parse_invariant(), Ok(12));
    assert_eq!(some.convert().u8().parse_invariant(), Ok(13));
    assert_eq!(Some("14").convert().u8().parse_invariant(), Ok(14));
    assert_kind!(none.convert().u8().parse_invariant(), ArgumentNull);
    assert_eq!(none.convert_defaulted().u8().or(1).parse_invariant(), 1);
    assert_eq!("15".convert().input(), Some("15"));
}
