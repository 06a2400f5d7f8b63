//! Duration Formatting
//!
//! Human-scaled duration strings, banding at 1e3/1e6/1e9 nanoseconds.

/// Scale a non-negative nanosecond count into a value and unit.
fn scale(ns: f64) -> (f64, &'static str) {
    if ns < 1e3 {
        (ns, "ns")
    } else if ns < 1e6 {
        (ns / 1e3, "us")
    } else if ns < 1e9 {
        (ns / 1e6, "ms")
    } else {
        (ns / 1e9, "s")
    }
}

/// Decimal places giving three significant digits for a scaled value.
fn three_significant(value: f64) -> usize {
    if value < 10.0 {
        2
    } else if value < 100.0 {
        1
    } else {
        0
    }
}

/// Format a duration with three significant digits: `999ns`, `1.50us`,
/// `12.3ms`, `1.00s`.
pub fn format_duration(ns: f64) -> String {
    let (value, unit) = scale(ns);
    format!("{:.*}{}", three_significant(value), value, unit)
}

/// Format a signed duration delta with zero decimal places and an explicit
/// sign: `+123 ns`, `-2 us`. Used for fastest/slowest differences against
/// the average, where negative input is meaningful rather than invalid.
pub fn format_signed_duration(ns: f64) -> String {
    let (value, unit) = scale(ns.abs());
    let sign = if ns < 0.0 { "-" } else { "+" };
    format!("{}{:.0} {}", sign, value, unit)
}

/// English ordinal: `1st`, `2nd`, `3rd`, `4th`, with `11th`-`13th`
/// special-cased.
pub fn ordinal(n: usize) -> String {
    let suffix = if (11..=13).contains(&(n % 100)) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{}{}", n, suffix)
}
