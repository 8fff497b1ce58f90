use crate::utils::error::{EventStatusError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Only the empty string is rejected; whitespace is kept as part of the value.
pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(EventStatusError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EventStatusError::ValidationError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EventStatusError::ValidationError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Durations are counted in (possibly fractional) hours.
pub fn validate_duration_hours(field_name: &str, hours: f64) -> Result<()> {
    if !hours.is_finite() {
        return Err(EventStatusError::InvalidEvent {
            field: field_name.to_string(),
            reason: format!("Duration must be a finite number, got {}", hours),
        });
    }

    if hours < 0.0 {
        return Err(EventStatusError::InvalidEvent {
            field: field_name.to_string(),
            reason: format!("Duration cannot be negative, got {}", hours),
        });
    }

    Ok(())
}
