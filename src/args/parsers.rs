use std::time::Duration;

use super::types::PositiveU64;
use crate::error::{AppError, AppResult, ValidationError};

pub(super) fn parse_positive_u64(s: &str) -> AppResult<PositiveU64> {
    s.parse::<PositiveU64>().map_err(AppError::from)
}

pub(crate) fn parse_bool_env(s: &str) -> AppResult<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(AppError::validation(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        })),
    }
}

/// Parses `--timeout` values such as `250ms`, `5s`, `2m` or `1h`; a bare
/// number means seconds.
pub(crate) fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    let value = s.trim();
    if value.is_empty() {
        return Err(AppError::validation(ValidationError::DurationEmpty));
    }

    let unit_start = value
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(value.len());
    let (digits, unit) = value.split_at(unit_start);
    if digits.is_empty() {
        return Err(AppError::validation(
            ValidationError::InvalidDurationFormat {
                value: value.to_owned(),
            },
        ));
    }
    let amount: u64 = digits.parse().map_err(|err| {
        AppError::validation(ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })
    })?;

    let overflow = || AppError::validation(ValidationError::DurationOverflow);
    let timeout = match unit {
        "ms" => Duration::from_millis(amount),
        "" | "s" => Duration::from_secs(amount),
        "m" => Duration::from_secs(amount.checked_mul(60).ok_or_else(overflow)?),
        "h" => Duration::from_secs(amount.checked_mul(3_600).ok_or_else(overflow)?),
        other => {
            return Err(AppError::validation(ValidationError::InvalidDurationUnit {
                unit: other.to_owned(),
            }));
        }
    };

    if timeout.is_zero() {
        return Err(AppError::validation(ValidationError::DurationZero));
    }
    Ok(timeout)
}
