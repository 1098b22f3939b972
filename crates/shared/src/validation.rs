//! Common validation utilities.

use validator::ValidationError;

/// Lowest T-score a densitometer can plausibly report.
const MIN_T_SCORE: f64 = -10.0;

/// Highest T-score a densitometer can plausibly report.
const MAX_T_SCORE: f64 = 10.0;

/// Validates that a latitude value is within valid range (-90 to 90).
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        let mut err = ValidationError::new("latitude_range");
        err.message = Some("Latitude must be between -90 and 90".into());
        Err(err)
    }
}

/// Validates that a longitude value is within valid range (-180 to 180).
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        let mut err = ValidationError::new("longitude_range");
        err.message = Some("Longitude must be between -180 and 180".into());
        Err(err)
    }
}

/// Validates that a T-score is a finite number within the measurable range.
///
/// NaN and infinities are rejected here so the classifier never has to
/// bucket them.
pub fn validate_t_score(t_score: f64) -> Result<(), ValidationError> {
    if !t_score.is_finite() {
        let mut err = ValidationError::new("t_score_not_finite");
        err.message = Some("T-score must be a finite number".into());
        return Err(err);
    }
    if !(MIN_T_SCORE..=MAX_T_SCORE).contains(&t_score) {
        let mut err = ValidationError::new("t_score_range");
        err.message = Some("T-score must be between -10 and 10".into());
        return Err(err);
    }
    Ok(())
}

/// Validates that a bone-mineral-density result is finite and non-negative.
pub fn validate_bmd_result(bmd: f64) -> Result<(), ValidationError> {
    if bmd.is_finite() && bmd >= 0.0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("bmd_result_range");
        err.message = Some("BMD result must be a non-negative number".into());
        Err(err)
    }
}

/// Validates that a device serial number is present.
pub fn validate_device_serial(serial: &str) -> Result<(), ValidationError> {
    if serial.trim().is_empty() {
        let mut err = ValidationError::new("device_serial_required");
        err.message = Some("device_serial required".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Returns the human-readable message of a validation error.
pub fn message_of(err: &ValidationError) -> String {
    err.message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| err.code.to_string())
}
