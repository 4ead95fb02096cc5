#![no_main]

use libfuzzer_sys::fuzz_target;
use strparse::{Convert, Culture, EnumType, NumberStyles, TypeInfo};

static LEVEL: EnumType = EnumType::new("Level", &[("Low", 1), ("High", 2)]);
static ACCESS: EnumType = EnumType::flags("Access", &[("Read", 1), ("Write", 2)]);

fuzz_target!(|input_and_style: (&str, u32)| {
    let (input, style) = input_and_style;
    let style = NumberStyles::from_bits_truncate(style);

    for culture in Culture::all() {
        let _ = input.convert().i8().parse_culture_style(culture, style);
        let _ = input.convert().i16().parse_culture_style(culture, style);
        let _ = input.convert().i32().parse_culture_style(culture, style);
        let _ = input.convert().i64().parse_culture_style(culture, style);
        let _ = input.convert().u8().parse_culture_style(culture, style);
        let _ = input.convert().u16().parse_culture_style(culture, style);
        let _ = input.convert().u32().parse_culture_style(culture, style);
        let _ = input.convert().u64().parse_culture_style(culture, style);
        let _ = input.convert().f32().parse_culture_style(culture, style);
        let _ = input.convert().f64().parse_culture_style(culture, style);
        let _ = input.convert().decimal().parse_culture_style(culture, style);
        let _ = input.convert().currency().rounded().parse_culture_style(culture, style);
    }
    for ty in [&LEVEL as &dyn TypeInfo, &ACCESS] {
        let _ = input.convert().enum_type(Some(ty)).parse();
        let _ = input.convert().enum_type(Some(ty)).ignore_case().parse();
    }
    let _ = input.convert().boolean().parse();
    let _ = input.convert().character().parse();
    let _ = input.convert().guid().parse();
    let _ = input.convert().guid().parse_exact(input);
});
