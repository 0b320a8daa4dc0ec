use std::{fmt::Display, str::FromStr};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .trim()
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    // NaN
    if value.partial_cmp(&min).is_none() {
        return Err(format!("invalid number '{s}'"));
    }
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a percentage in the inclusive range [0, 100]. A trailing `%` is
/// accepted.
///
/// # Errors
/// Returns an error if the input is not a number or lies outside [0, 100].
pub fn parse_percentage(s: &str) -> Result<f64, String> {
    let s = s.trim();
    parse_bounded_number(s.strip_suffix('%').unwrap_or(s), 0.0, Some(100.0))
}
