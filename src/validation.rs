//! Input validation for session lists.
//!
//! The layout engine never rejects input: it degrades silently. Callers that
//! want to surface data problems (e.g. after fetching a schedule) run these
//! checks themselves. Detects:
//! - Duplicate session IDs
//! - Zero or negative durations
//! - Days outside Monday–Friday
//! - Non-finite hours
//! - Hours outside a single day

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Session, LAID_OUT_DAYS};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two sessions share the same ID.
    DuplicateId,
    /// `end_hour <= start_hour`.
    NonPositiveDuration,
    /// Day is not laid out by the weekly grid.
    DayOutOfRange,
    /// Start or end hour is NaN or infinite.
    NonFiniteTime,
    /// Start or end hour lies outside `[0, 24]`.
    OutsideDay,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a session list.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_sessions(sessions: &[Session]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for s in sessions {
        if !ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate session ID: {}", s.id),
            ));
        }

        if s.day >= LAID_OUT_DAYS {
            errors.push(ValidationError::new(
                ValidationErrorKind::DayOutOfRange,
                format!("Session '{}' is on day {} (expected 0-4)", s.id, s.day),
            ));
        }

        if !s.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteTime,
                format!("Session '{}' has non-finite hours", s.id),
            ));
            continue;
        }

        if s.end_hour <= s.start_hour {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!(
                    "Session '{}' ends at {} but starts at {}",
                    s.id, s.end_hour, s.start_hour
                ),
            ));
        }

        let in_day = |h: f64| (0.0..=24.0).contains(&h);
        if !in_day(s.start_hour) || !in_day(s.end_hour) {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutsideDay,
                format!(
                    "Session '{}' spans [{}, {}) outside a single day",
                    s.id, s.start_hour, s.end_hour
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_input() {
        let sessions = vec![
            Session::new("S1", 0, 9.0, 10.0),
            Session::new("S2", 4, 13.5, 15.0),
        ];
        assert!(validate_sessions(&sessions).is_ok());
        assert!(validate_sessions(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let sessions = vec![
            Session::new("S1", 0, 9.0, 10.0),
            Session::new("S1", 1, 9.0, 10.0),
        ];
        let errors = validate_sessions(&sessions).unwrap_err();
        assert!(has(&errors, ValidationErrorKind::DuplicateId));
        assert!(errors[0].to_string().contains("S1"));
    }

    #[test]
    fn test_non_positive_duration() {
        let errors = validate_sessions(&[Session::new("S1", 0, 10.0, 10.0)]).unwrap_err();
        assert!(has(&errors, ValidationErrorKind::NonPositiveDuration));

        let errors = validate_sessions(&[Session::new("S2", 0, 11.0, 10.0)]).unwrap_err();
        assert!(has(&errors, ValidationErrorKind::NonPositiveDuration));
    }

    #[test]
    fn test_day_out_of_range() {
        let errors = validate_sessions(&[Session::new("S1", 6, 9.0, 10.0)]).unwrap_err();
        assert!(has(&errors, ValidationErrorKind::DayOutOfRange));
    }

    #[test]
    fn test_non_finite() {
        let errors = validate_sessions(&[Session::new("S1", 0, f64::NAN, 10.0)]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NonFiniteTime);
    }

    #[test]
    fn test_outside_day() {
        let errors = validate_sessions(&[Session::new("S1", 0, 23.0, 25.0)]).unwrap_err();
        assert!(has(&errors, ValidationErrorKind::OutsideDay));
    }

    #[test]
    fn test_multiple_errors() {
        let sessions = vec![
            Session::new("S1", 7, 10.0, 9.0),
            Session::new("S1", 0, -1.0, 9.0),
        ];
        let errors = validate_sessions(&sessions).unwrap_err();
        assert!(errors.len() >= 4);
    }
}
