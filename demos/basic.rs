use strparse::{Convert, Culture, Decimal, NumberStyles};

fn main() {
    let de = Culture::get("de-DE").unwrap();

    let amount = "1.234,50 €".convert().currency().parse_culture(de).unwrap();
    let hex = "ff".convert().u8().parse_invariant_style(NumberStyles::HEX_NUMBER);
    let port = std::env::args()
        .nth(1)
        .convert_defaulted()
        .u16()
        .or(8080)
        .parse_invariant();

    println!("amount: {amount}");
    println!("hex: {hex:?}");
    println!("port: {port}");
    println!("rounded: {:?}", "2,345".convert_nullable().currency().rounded().parse_culture(de));
    println!("zero: {}", Decimal::ZERO);
}
