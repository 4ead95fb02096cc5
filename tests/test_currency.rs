#[macro_use]
mod common;

use common::*;

///////////////////////////////////////////////////////////////////////////////
// Symbols and separators

#[test]
fn test_currency_symbol_positions() {
    let us = culture("en-US");
    let de = culture("de-DE");

    assert_eq!(
        "$1,234.56".convert().currency().parse_culture(us),
        Ok(Decimal::new(123_456, 2))
    );
    assert_eq!(
        "1,234.56".convert().currency().parse_culture(us),
        Ok(Decimal::new(123_456, 2))
    );
    assert_eq!(
        "12,50 \u{20ac}".convert().currency().parse_culture(de),
        Ok(Decimal::new(1250, 2))
    );
    assert_eq!(
        "\u{20ac}1.000".convert().currency().parse_culture(de),
        Ok(Decimal::new(1000, 0))
    );
}

#[test]
fn test_currency_negative_amounts() {
    let us = culture("en-US");

    assert_eq!(
        "($5.00)".convert().currency().parse_culture(us),
        Ok(Decimal::new(-500, 2))
    );
    assert_eq!(
        "-$5".convert().currency().parse_culture(us),
        Ok(Decimal::new(-5, 0))
    );
    assert_eq!(
        "5-".convert().currency().parse_culture(us),
        Ok(Decimal::new(-5, 0))
    );
    assert_kind!("($5.00".convert().currency().parse_culture(us), Format);
}

#[test]
fn test_currency_rejects() {
    let us = culture("en-US");

    assert_kind!("1e3".convert().currency().parse_culture(us), Format);
    assert_kind!("$5$".convert().currency().parse_culture(us), Format);
    assert_kind!("\u{20ac}5".convert().currency().parse_culture(us), Format);
    assert_kind!(
        absent().convert().currency().parse_culture(us),
        ArgumentNull
    );
    assert_eq!(
        "\u{20ac}5".convert_nullable().currency().parse_culture(us),
        None
    );
    assert_eq!(
        "\u{20ac}5"
            .convert_defaulted()
            .currency()
            .or(Decimal::ONE)
            .parse_culture(us),
        Decimal::ONE
    );
}

#[test]
fn test_currency_explicit_style() {
    let us = culture("en-US");

    assert_kind!(
        "$5".convert()
            .currency()
            .parse_culture_style(us, NumberStyles::NUMBER),
        Format
    );
    assert_eq!(
        "1e3"
            .convert()
            .currency()
            .parse_culture_style(us, NumberStyles::ANY),
        Ok(Decimal::new(1000, 0))
    );
}

///////////////////////////////////////////////////////////////////////////////
// Rounding

#[test]
fn test_currency_rounding() {
    let sv = culture("sv-SE");

    assert_eq!(
        "1 234,567 kr".convert().currency().parse_culture(sv),
        Ok(Decimal::new(1_234_567, 3))
    );
    assert_eq!(
        "1 234,567 kr"
            .convert()
            .currency()
            .rounded()
            .parse_culture(sv),
        Ok(Decimal::new(123_457, 2))
    );
    assert_eq!(
        "2.345".convert().currency().rounded().parse_invariant(),
        Ok(Decimal::new(234, 2))
    );
    assert_eq!(
        "2.355".convert().currency().rounded().parse_invariant(),
        Ok(Decimal::new(236, 2))
    );
    assert_eq!(
        "2.3".convert().currency().rounded().parse_invariant(),
        Ok(Decimal::new(23, 1))
    );
}

///////////////////////////////////////////////////////////////////////////////
// Options

#[test]
fn test_currency_with_options() {
    let us = culture("en-US");

    assert_eq!(
        "($1,234.56)"
            .convert()
            .currency()
            .parse_with(NumberOptions::new().culture(us)),
        Ok(Decimal::new(-123_456, 2))
    );
    assert_kind!(
        "$5".convert()
            .currency()
            .parse_with(NumberOptions::new().culture(us).style(NumberStyles::NUMBER)),
        Format
    );
}
