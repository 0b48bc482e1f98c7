//! Error types and user-facing error mapping.
//!
//! This module provides the bot's error hierarchy. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors. Command and button handlers
//! turn an `AppError` into reply text through `AppError::user_message`, which keeps
//! internal details in the logs and out of the channel.

pub mod auth;
pub mod config;
pub mod external;
pub mod validation;

use thiserror::Error;

use crate::error::{
    auth::AuthError, config::ConfigError, external::ExternalError, validation::ValidationError,
};

/// Generic reply used whenever the real cause must not be shown to the invoking user.
const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong, please try again later.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the bot. Most variants use
/// `#[from]` for automatic error conversion so handlers can propagate with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// The invoking actor lacks the privilege required for the operation.
    ///
    /// Always raised before any store mutation takes place.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Caller-supplied parameters violate an invariant.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// A call to Discord through one of the service adapters failed.
    #[error(transparent)]
    ExternalErr(#[from] ExternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Only raised outside the adapters, e.g. while
    /// connecting the gateway client or replying to an interaction.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Scheduler error while registering or starting the sweep job.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Resource not found error with a message safe to show to users.
    #[error("{0}")]
    NotFound(String),
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

impl AppError {
    /// Converts the error into text that can be shown to the invoking user.
    ///
    /// Authorization, validation and not-found errors carry messages written for users
    /// and are returned as is. Every other error is logged with full details and replaced
    /// by a generic message to avoid leaking internal state.
    ///
    /// # Returns
    /// - `String` - Reply text for an ephemeral interaction response
    pub fn user_message(&self) -> String {
        match self {
            Self::AuthErr(err) => err.to_string(),
            Self::ValidationErr(err) => err.to_string(),
            Self::NotFound(msg) => msg.clone(),
            Self::ExternalErr(ExternalError::NotFound { what }) => {
                format!("That {} no longer exists.", what)
            }
            err => {
                tracing::error!("{}", err);
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }
}
