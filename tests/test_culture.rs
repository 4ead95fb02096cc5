#[macro_use]
mod common;

use common::*;
use strparse::culture::install_current;

///////////////////////////////////////////////////////////////////////////////
// Lookup

#[test]
fn test_culture_lookup() {
    assert_eq!(culture("EN-us").name, "en-US");
    assert_eq!(culture("de_DE.UTF-8").name, "de-DE");
    assert!(culture("").is_invariant());
    assert!(culture("invariant").is_invariant());
    assert_eq!(Culture::from_lcid(0x040c).unwrap().name, "fr-FR");
    assert_kind!(Culture::get("xx-XX"), UnknownCulture);
    assert_kind!(Culture::from_lcid(1), UnknownCulture);
}

#[test]
fn test_culture_table() {
    let names: Vec<_> = Culture::all().map(|culture| culture.name).collect();

    assert_eq!(
        names,
        ["", "en-US", "en-GB", "fr-FR", "de-DE", "es-ES", "sv-SE", "nb-NO", "da-DK"]
    );
    for culture in Culture::all() {
        assert_eq!(Culture::get(culture.name).unwrap(), culture);
        assert_eq!(Culture::from_lcid(culture.lcid).unwrap(), culture);
    }
}

///////////////////////////////////////////////////////////////////////////////
// Custom cultures

#[test]
fn test_custom_culture() {
    let custom = Culture {
        name: "x-custom",
        lcid: 0,
        display_name: "Custom",
        number_format: NumberFormat {
            decimal_separator: "'",
            group_separator: "_",
            ..Culture::invariant().number_format.clone()
        },
        date_time_format: DateTimeFormat {
            date_separator: "~",
            short_date_pattern: "yyyy/MM/dd",
            ..Culture::invariant().date_time_format.clone()
        },
    };

    assert_eq!("1_000'5".convert().f64().parse_culture(&custom), Ok(1000.5));
    assert_eq!(
        "2024~01~05"
            .convert()
            .date_time()
            .parse_exact_culture("d", &custom),
        Ok(time::macros::datetime!(2024-01-05 0:00))
    );
}

///////////////////////////////////////////////////////////////////////////////
// Current culture

#[test]
fn test_current_culture() {
    let fr = culture("fr-FR");

    assert_eq!(install_current(fr), Ok(()));
    assert_eq!(Culture::current(), fr);
    assert_eq!(install_current(Culture::invariant()), Err(fr));
    assert_eq!(CultureSelector::Current.resolve(), fr);

    assert_eq!("1 234,5".convert().f64().parse(), Ok(1234.5));
    assert_eq!("1 234,5".convert().f64().parse_current(), Ok(1234.5));
    assert_eq!("1,234.5".convert().f64().parse_invariant(), Ok(1234.5));
    assert_eq!(
        "05/01/2024".convert().date_time().parse(),
        Ok(time::macros::datetime!(2024-01-05 0:00))
    );
}
