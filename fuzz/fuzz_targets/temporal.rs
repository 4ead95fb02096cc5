#![no_main]

use libfuzzer_sys::fuzz_target;
use strparse::{Convert, Culture, DateTimeStyles, TimeSpanStyles};

fuzz_target!(|input_and_format: (&str, &str)| {
    let (input, format) = input_and_format;

    for culture in Culture::all() {
        let _ = input.convert().date_time().parse_culture(culture);
        let _ = input.convert().date_time_offset().parse_exact_culture_styles(
            format,
            culture,
            DateTimeStyles::ALLOW_WHITE_SPACES | DateTimeStyles::ADJUST_TO_UNIVERSAL,
        );
        let _ = input.convert().time_span().parse_culture(culture);
        let _ = input
            .convert()
            .time_span()
            .parse_exact_styles(format, culture, TimeSpanStyles::all());
    }
});
