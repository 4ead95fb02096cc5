//! Input handling shared by the atomic parsers.

/// The string being converted.
///
/// `None` models an absent string. Converters borrow their input and never
/// mutate it.
pub type Input<'a> = Option<&'a str>;

/// Returns `true` for the white-space characters the parsers skip: space and
/// `\t` through `\r`.
#[inline]
pub(crate) fn is_white(c: char) -> bool {
    c == ' ' || ('\t'..='\r').contains(&c)
}

/// Returns `true` for space like characters that are interchangeable when
/// matching separators and symbols.
#[inline]
fn is_space_like(c: char) -> bool {
    matches!(c, ' ' | '\u{a0}' | '\u{202f}')
}

#[inline]
pub(crate) fn trim_start_white(s: &str) -> &str {
    s.trim_start_matches(is_white)
}

#[inline]
pub(crate) fn trim_end_white(s: &str) -> &str {
    s.trim_end_matches(is_white)
}

/// Trims the white-space the flags allow.
pub(crate) fn trim_white(s: &str, leading: bool, trailing: bool) -> &str {
    let s = if leading { trim_start_white(s) } else { s };
    if trailing {
        trim_end_white(s)
    } else {
        s
    }
}

/// Strips `symbol` from the start of `rest`.
///
/// A non-breaking space in the symbol also matches a regular space, so
/// cultures grouping digits with U+00A0 or U+202F accept typed input.
pub(crate) fn strip_symbol<'a>(rest: &'a str, symbol: &str) -> Option<&'a str> {
    if symbol.is_empty() {
        return None;
    }
    let mut chars = rest.chars();
    for expected in symbol.chars() {
        let found = chars.next()?;
        if found != expected && !(is_space_like(expected) && is_space_like(found)) {
            return None;
        }
    }
    Some(chars.as_str())
}

/// Strips `word` from the start of `rest` ignoring case.
pub(crate) fn strip_prefix_ignore_case<'a>(rest: &'a str, word: &str) -> Option<&'a str> {
    if word.is_empty() {
        return None;
    }
    let mut chars = rest.chars();
    for expected in word.chars() {
        let found = chars.next()?;
        if found != expected
            && !found.to_lowercase().eq(expected.to_lowercase())
            && !(is_space_like(expected) && is_space_like(found))
        {
            return None;
        }
    }
    Some(chars.as_str())
}

/// Splits the leading ASCII digits off `s`.
#[inline]
pub(crate) fn split_digits(s: &str) -> (&str, &str) {
    let end = s.bytes().take_while(u8::is_ascii_digit).count();
    s.split_at(end)
}
