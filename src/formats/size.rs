//! Human-readable file sizes
//!
//! Sizes are rendered with two decimals over binary units (`1.00 KB` is 1024
//! bytes). Parsing a rendered size back yields the byte count truncated to an
//! integer, so a round trip loses at most the precision of the two decimals.

use crate::extractor::models::RawSize;
use crate::utils::error::AppError;

/// Placeholder for formats whose size yt-dlp does not know
pub const UNKNOWN_SIZE: &str = "Unknown size";

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Render a raw size for display.
///
/// Strings containing a space are treated as already formatted and returned
/// unchanged. A missing size yields [`UNKNOWN_SIZE`].
pub fn format_size(raw: Option<&RawSize>) -> Result<String, AppError> {
    match raw {
        None => Ok(UNKNOWN_SIZE.to_string()),
        Some(RawSize::Bytes(bytes)) => Ok(format_bytes(*bytes)),
        Some(RawSize::Fractional(value)) => {
            if !value.is_finite() || *value < 0.0 {
                return Err(AppError::Parse(format!("invalid byte count {}", value)));
            }
            Ok(format_bytes(value.trunc() as u64))
        }
        Some(RawSize::Text(text)) if text.contains(' ') => Ok(text.clone()),
        Some(RawSize::Text(text)) => {
            let bytes = text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .ok_or_else(|| AppError::Parse(format!("invalid byte count '{}'", text)))?;
            Ok(format_bytes(bytes.trunc() as u64))
        }
    }
}

/// Render a byte count as `"<value> <unit>"` with two decimals
pub fn format_bytes(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in &UNITS[..UNITS.len() - 1] {
        if value < 1024.0 {
            return format!("{:.2} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.2} {}", value, UNITS[UNITS.len() - 1])
}

/// Convert a rendered size back to bytes.
///
/// [`UNKNOWN_SIZE`] maps to `-1`; byte counts pass through unchanged.
pub fn parse_size(raw: &RawSize) -> Result<i64, AppError> {
    let text = match raw {
        RawSize::Bytes(bytes) => return Ok(i64::try_from(*bytes).unwrap_or(i64::MAX)),
        RawSize::Fractional(value) => return Ok(*value as i64),
        RawSize::Text(text) => text.as_str(),
    };

    if text == UNKNOWN_SIZE {
        return Ok(-1);
    }

    let mut parts = text.split_whitespace();
    let (value, unit) = match (parts.next(), parts.next(), parts.next()) {
        (Some(value), Some(unit), None) => (value, unit),
        _ => return Err(AppError::Parse(format!("expected '<value> <unit>', got '{}'", text))),
    };

    let value: f64 = value
        .parse()
        .map_err(|_| AppError::Parse(format!("invalid number '{}'", value)))?;
    let multiplier = unit_multiplier(unit)
        .ok_or_else(|| AppError::Parse(format!("unknown unit '{}'", unit)))?;

    Ok((value * multiplier as f64) as i64)
}

fn unit_multiplier(unit: &str) -> Option<u64> {
    UNITS
        .iter()
        .position(|u| *u == unit)
        .map(|exp| 1024u64.pow(exp as u32))
}
