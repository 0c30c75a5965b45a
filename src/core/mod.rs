//! Core business logic - framework-agnostic operations for each resource.
//!
//! Every function takes the shared [`sea_orm::DatabaseConnection`], validates its input
//! before touching the store, and reports a missing row as [`Error::NotFound`].

/// Bucket list item operations, including the completion flag
pub mod bucket_list;
/// Budget operations
pub mod budget;
/// Password digest helpers
pub mod password;
/// Reminder operations
pub mod reminder;
/// User operations
pub mod user;

use crate::errors::{Error, Result};
use sea_orm::DbErr;
use tracing::error;

/// Trims `value` and rejects it if nothing is left.
pub(crate) fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

/// Rejects amounts that are negative, NaN or infinite.
pub(crate) fn require_amount(field: &str, amount: f64) -> Result<f64> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::validation(format!(
            "{field} must be a non-negative number, got {amount}"
        )));
    }
    Ok(amount)
}

/// Reports a failed guarded insert as [`Error::Write`].
///
/// A failed rollback is logged; the insert error stays the one returned.
pub(crate) fn write_failure(
    resource: &'static str,
    insert_error: &DbErr,
    rollback: std::result::Result<(), DbErr>,
) -> Error {
    error!("Error creating {resource}: {insert_error}");
    if let Err(e) = rollback {
        error!("Rollback after failed {resource} insert also failed: {e}");
    }
    Error::Write {
        resource,
        message: insert_error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("title", "  Skydive  ").unwrap(), "Skydive");
        assert!(matches!(
            require_text("title", "   "),
            Err(Error::Validation { message: _ })
        ));
    }

    #[test]
    fn test_require_amount() {
        assert_eq!(require_amount("budget_amount", 0.0).unwrap(), 0.0);
        assert_eq!(require_amount("budget_amount", 12.5).unwrap(), 12.5);
        assert!(require_amount("budget_amount", -1.0).is_err());
        assert!(require_amount("budget_amount", f64::NAN).is_err());
        assert!(require_amount("budget_amount", f64::INFINITY).is_err());
    }

    #[test]
    fn test_write_failure_keeps_insert_error() {
        let insert_error = DbErr::Custom("FOREIGN KEY constraint failed".to_string());

        let rolled_back = write_failure("reminder", &insert_error, Ok(()));
        let text = rolled_back.to_string();
        assert!(text.starts_with("Error creating reminder: "), "{text}");
        assert!(text.contains("FOREIGN KEY constraint failed"), "{text}");

        let rollback_failed = write_failure(
            "budget",
            &insert_error,
            Err(DbErr::Custom("connection reset".to_string())),
        );
        match rollback_failed {
            Error::Write { resource, message } => {
                assert_eq!(resource, "budget");
                assert!(message.contains("FOREIGN KEY constraint failed"));
                assert!(!message.contains("connection reset"));
            }
            other => panic!("expected Write, got {other:?}"),
        }
    }
}
