//! Error types for the application.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors via
//! `#[from]` conversions. Failures inside the attachment pipeline are handled
//! per-attachment and degrade into status text for the user; `AppError` is what
//! remains for startup and Discord API failures.

pub mod config;
pub mod convert;
pub mod fetch;

use thiserror::Error;

use crate::error::{config::ConfigError, convert::ConvertError, fetch::FetchError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failure retrieving attachment bytes over HTTP.
    #[error(transparent)]
    FetchErr(#[from] FetchError),

    /// Failure running the external transcoding tool.
    #[error(transparent)]
    ConvertErr(#[from] ConvertError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
