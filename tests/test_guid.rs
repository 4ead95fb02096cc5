#[macro_use]
mod common;

use common::*;

const ID: Uuid = Uuid::from_u128(0xca76_1232_ed42_11ce_bacd_00aa_0057_b223);

const FORMS: [(&str, &str); 5] = [
    ("N", "ca761232ed4211cebacd00aa0057b223"),
    ("D", "ca761232-ed42-11ce-bacd-00aa0057b223"),
    ("B", "{ca761232-ed42-11ce-bacd-00aa0057b223}"),
    ("P", "(ca761232-ed42-11ce-bacd-00aa0057b223)"),
    ("X", "{0xca761232,0xed42,0x11ce,{0xba,0xcd,0x00,0xaa,0x00,0x57,0xb2,0x23}}"),
];

#[test]
fn test_guid_any_form() {
    for (format, input) in FORMS {
        assert_eq!(input.convert().guid().parse(), Ok(ID), "{format}");
        assert_eq!(
            input.to_uppercase().convert().guid().parse(),
            Ok(ID),
            "{format}"
        );
    }
}

#[test]
fn test_guid_exact_form() {
    for (format, input) in FORMS {
        assert_eq!(
            input.convert().guid().parse_exact(format),
            Ok(ID),
            "{format}"
        );
        assert_eq!(
            input.convert().guid().parse_exact(&format.to_lowercase()),
            Ok(ID),
            "{format}"
        );
        for (other, _) in FORMS.iter().filter(|(other, _)| *other != format) {
            assert_kind!(input.convert().guid().parse_exact(other), Format);
        }
    }
}

#[test]
fn test_guid_exact_default_form() {
    assert_eq!(FORMS[1].1.convert().guid().parse_exact_default(), Ok(ID));
    assert_eq!(
        FORMS[0].1.convert_nullable().guid().parse_exact_default(),
        None
    );
    assert_kind!(FORMS[1].1.convert().guid().parse_exact("Q"), Format);
    assert_kind!(FORMS[1].1.convert().guid().parse_exact("DD"), Format);
}

#[test]
fn test_guid_malformed() {
    assert_kind!(
        "ca761232-ed42-11ce-bacd-00aa0057b22"
            .convert()
            .guid()
            .parse(),
        Format
    );
    assert_kind!(
        "ca761232-ed42-11ce-bacd-00aa0057b22g"
            .convert()
            .guid()
            .parse(),
        Format
    );
    assert_kind!(
        "{ca761232-ed42-11ce-bacd-00aa0057b223"
            .convert()
            .guid()
            .parse(),
        Format
    );
    assert_kind!("".convert().guid().parse(), Format);
    assert_kind!(absent().convert().guid().parse(), ArgumentNull);
    assert_eq!("nope".convert_defaulted().guid().parse(), Uuid::nil());
    assert_eq!("nope".convert_defaulted().guid().or(ID).parse(), ID);
}
