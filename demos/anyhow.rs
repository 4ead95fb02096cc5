use anyhow::Context;
use strparse::{Convert, Culture};

fn main() -> anyhow::Result<()> {
    let culture = Culture::get("sv-SE")?;
    let when = "2024-01-05 13:04"
        .convert()
        .date_time()
        .parse_culture(culture)
        .context("reading start time")?;
    let timeout = "00:00:30"
        .convert()
        .time_span()
        .parse_exact_invariant("c")
        .context("reading timeout")?;

    println!("start {when}, timeout {timeout}");

    "ninety".convert().u32().parse_invariant().context("reading retries")?;
    Ok(())
}
