//! Literal grammars for scalar coercion: booleans, numbers, byte sizes and
//! unit-suffixed durations.
//!
//! Every function here works on already-concatenated text (see
//! [`HoconValue::get_string`](crate::HoconValue::get_string)). Nothing is
//! parsed ahead of time.
//!
//! # Duration grammar
//!
//! `<number> [whitespace] <unit>` where the number is an integer or a decimal
//! and the unit is one of
//!
//! | unit | spellings |
//! |---|---|
//! | nanoseconds | `ns`, `nano`, `nanos`, `nanosecond`, `nanoseconds` |
//! | microseconds | `us`, `micro`, `micros`, `microsecond`, `microseconds` |
//! | milliseconds | `ms`, `milli`, `millis`, `millisecond`, `milliseconds` |
//! | seconds | `s`, `second`, `seconds` |
//! | minutes | `m`, `minute`, `minutes` |
//! | hours | `h`, `hour`, `hours` |
//! | days | `d`, `day`, `days` (always 24 hours) |
//!
//! Text without a unit is read as milliseconds. The word `infinite` (any case)
//! maps to [`infinite_duration`] when the caller allows it.

use crate::error::{HoconError, Result};
use chrono::Duration;
use regex::Regex;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::LazyLock;

// Alternatives are listed longest first inside each unit family so that the
// captured spelling is the full word.
static DURATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<value>-?[0-9]+(\.[0-9]+)?)\s*(?P<unit>nanoseconds|nanosecond|nanos|nano|ns|microseconds|microsecond|micros|micro|us|milliseconds|millisecond|millis|milli|ms|seconds|second|s|minutes|minute|m|hours|hour|h|days|day|d)$",
    )
    .expect("duration grammar is a valid regex")
});

// Same number grammar as the unit form, for literals without a unit.
static BARE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").expect("bare number grammar is a valid regex")
});

const NANOS_PER_MICRO: f64 = 1e3;
const NANOS_PER_MILLI: f64 = 1e6;
const NANOS_PER_SECOND: f64 = 1e9;
const NANOS_PER_MINUTE: f64 = 60.0 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: f64 = 60.0 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: f64 = 24.0 * NANOS_PER_HOUR;

/// The sentinel returned for `infinite`: minus one nanosecond.
pub fn infinite_duration() -> Duration {
    Duration::nanoseconds(-1)
}

/// True if `d` is the [`infinite_duration`] sentinel.
pub fn is_infinite(d: &Duration) -> bool {
    *d == infinite_duration()
}

/// Parse a boolean literal. Only `on`/`true` and `off`/`false` are accepted,
/// case-sensitively.
pub fn parse_bool(text: &str) -> Result<bool> {
    match text {
        "on" | "true" => Ok(true),
        "off" | "false" => Ok(false),
        other => Err(HoconError::InvalidBoolean(other.to_string())),
    }
}

/// Parse a byte count. A single trailing `b` is stripped; no other unit
/// suffix or scaling is recognised.
///
/// ```
/// use hocon_value::units::parse_byte_size;
/// assert_eq!(parse_byte_size("1024b").unwrap(), 1024);
/// assert_eq!(parse_byte_size("2048").unwrap(), 2048);
/// assert!(parse_byte_size("xb").is_err());
/// ```
pub fn parse_byte_size(text: &str) -> Result<i64> {
    parse_integer(text.strip_suffix('b').unwrap_or(text))
}

/// Parse a duration literal, see the module docs for the grammar.
///
/// # Errors
/// - [`HoconError::NegativeDuration`] for a magnitude below zero
/// - [`HoconError::InfiniteNotAllowed`] for `infinite` when `allow_infinite` is false
/// - [`HoconError::InvalidDuration`] when the text is neither a unit literal,
///   `infinite`, nor a bare decimal number
/// - [`HoconError::DurationOutOfRange`] when the scaled value does not fit in
///   `i64` nanoseconds
pub fn parse_duration(text: &str, allow_infinite: bool) -> Result<Duration> {
    let text = text.trim();

    if let Some(caps) = DURATION_RE.captures(text) {
        let magnitude = parse_positive_value(&caps["value"])?;
        let unit_nanos = match &caps["unit"] {
            "nanoseconds" | "nanosecond" | "nanos" | "nano" | "ns" => 1.0,
            "microseconds" | "microsecond" | "micros" | "micro" | "us" => NANOS_PER_MICRO,
            "milliseconds" | "millisecond" | "millis" | "milli" | "ms" => NANOS_PER_MILLI,
            "seconds" | "second" | "s" => NANOS_PER_SECOND,
            "minutes" | "minute" | "m" => NANOS_PER_MINUTE,
            "hours" | "hour" | "h" => NANOS_PER_HOUR,
            _ => NANOS_PER_DAY,
        };
        return scaled(text, magnitude, unit_nanos);
    }

    if text.eq_ignore_ascii_case("infinite") {
        if allow_infinite {
            return Ok(infinite_duration());
        }
        return Err(HoconError::InfiniteNotAllowed);
    }

    if !BARE_NUMBER_RE.is_match(text) {
        return Err(HoconError::InvalidDuration(text.to_string()));
    }

    tracing::debug!(text, "duration has no unit suffix, reading as milliseconds");
    let magnitude = parse_positive_value(text)?;
    scaled(text, magnitude, NANOS_PER_MILLI)
}

/// Base-10 integer parse of the full text, for any integer width.
pub(crate) fn parse_integer<T>(text: &str) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    text.parse::<T>().map_err(|source| HoconError::InvalidInteger {
        text: text.to_string(),
        source,
    })
}

pub(crate) fn parse_f64(text: &str) -> Result<f64> {
    text.parse::<f64>().map_err(|source| HoconError::InvalidFloat {
        text: text.to_string(),
        source,
    })
}

pub(crate) fn parse_f32(text: &str) -> Result<f32> {
    text.parse::<f32>().map_err(|source| HoconError::InvalidFloat {
        text: text.to_string(),
        source,
    })
}

fn parse_positive_value(text: &str) -> Result<f64> {
    let value = parse_f64(text)?;
    if value < 0.0 {
        return Err(HoconError::NegativeDuration(text.to_string()));
    }
    Ok(value)
}

/// Truncates toward zero, like an integer cast of the scaled float.
fn scaled(text: &str, magnitude: f64, unit_nanos: f64) -> Result<Duration> {
    let nanos = magnitude * unit_nanos;
    // i64::MAX rounds up to 2^63 as f64, so equality already overflows.
    if !nanos.is_finite() || nanos >= i64::MAX as f64 {
        return Err(HoconError::DurationOutOfRange(text.to_string()));
    }
    Ok(Duration::nanoseconds(nanos as i64))
}

