// Rust guideline compliant 2026-10-16

//! Typed access to parsed command-line arguments.
//!
//! [`Args`] wraps clap's [`ArgMatches`] for tools that build their parser
//! at runtime, coercing string values into typed results with explicit
//! errors. Tools with a fixed interface should prefer a derive-based
//! struct; [`parse_hex`], [`parse_int`] and [`parse_float`] plug into
//! `#[arg(value_parser = ...)]` for that case.

use crate::{Error, Result};
use clap::ArgMatches;

/// Typed accessors over parsed clap matches.
#[derive(Debug, Clone)]
pub struct Args {
    matches: ArgMatches,
}

impl Args {
    /// Wraps parsed matches.
    pub fn new(matches: ArgMatches) -> Self {
        Self { matches }
    }

    /// Underlying clap matches.
    pub fn matches(&self) -> &ArgMatches {
        &self.matches
    }

    /// Returns whether a flag was set.
    ///
    /// Unknown ids and non-flag arguments read as `false`.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.matches.try_get_one::<bool>(key), Ok(Some(true)))
    }

    /// Returns a string value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if the argument is unknown or absent.
    pub fn string(&self, key: &str) -> Result<String> {
        self.raw(key).map(str::to_string)
    }

    /// Parses a base-10 integer value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if the value is absent or not an integer.
    pub fn int(&self, key: &str) -> Result<i64> {
        parse_int(self.raw(key)?).map_err(|reason| Error::argument(key, reason))
    }

    /// Parses a base-16 integer value, with or without a `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if the value is absent or not hexadecimal.
    pub fn hex(&self, key: &str) -> Result<i64> {
        parse_hex(self.raw(key)?).map_err(|reason| Error::argument(key, reason))
    }

    /// Parses a floating-point value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Argument`] if the value is absent or not a number.
    pub fn float(&self, key: &str) -> Result<f64> {
        parse_float(self.raw(key)?).map_err(|reason| Error::argument(key, reason))
    }

    fn raw(&self, key: &str) -> Result<&str> {
        match self.matches.try_get_one::<String>(key) {
            Ok(Some(value)) => Ok(value.as_str()),
            Ok(None) => Err(Error::argument(key, "no value given")),
            Err(err) => Err(Error::argument(key, err.to_string())),
        }
    }
}

/// Parses a base-10 integer.
pub fn parse_int(value: &str) -> std::result::Result<i64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not an integer"))
}

/// Parses a base-16 integer, accepting an optional `0x`/`0X` prefix and sign.
///
/// Only one leading `-` is allowed, before the prefix; the full `i64` range
/// is accepted, including `-8000000000000000`.
pub fn parse_hex(value: &str) -> std::result::Result<i64, String> {
    let invalid = || format!("'{value}' is not a hexadecimal integer");
    let trimmed = value.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);
    if digits.starts_with(['+', '-']) {
        return Err(invalid());
    }
    let magnitude = u64::from_str_radix(digits, 16).map_err(|_| invalid())?;
    if negative {
        0i64.checked_sub_unsigned(magnitude).ok_or_else(invalid)
    } else {
        i64::try_from(magnitude).map_err(|_| invalid())
    }
}

/// Parses a floating-point number.
pub fn parse_float(value: &str) -> std::result::Result<f64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))
}
