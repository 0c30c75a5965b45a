//! Unified error type for the bucket list API.
//!
//! Every fallible operation in the crate returns [`Result`]. The HTTP mapping of
//! each variant lives in [`crate::api::error`].

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file or environment value could not be used
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Store call failed outside a guarded create path
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// No row matches the requested id
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource name, e.g. `"Budget"`
        resource: &'static str,
        /// The id that was looked up
        id: i64,
    },

    /// No route matches the request path
    #[error("No route for {path}")]
    RouteNotFound {
        /// Path that was requested
        path: String,
    },

    /// Input failed shape or value constraints before reaching the store
    #[error("Validation error: {message}")]
    Validation {
        /// Which constraint failed
        message: String,
    },

    /// A create statement failed and was rolled back
    #[error("Error creating {resource}: {message}")]
    Write {
        /// Resource name, lowercase
        resource: &'static str,
        /// Underlying store message
        message: String,
    },

    /// Password digest could not be computed or parsed
    #[error("Password hashing error: {message}")]
    PasswordHash {
        /// Underlying hasher message
        message: String,
    },

    /// I/O failure (listener bind, serve loop)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for a [`Error::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
