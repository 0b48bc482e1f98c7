//! Classification of failures from calls into Discord.
//!
//! The adapters in `service::discord` translate every Serenity error into one of two
//! classes: the target resource is gone (member left, role or channel deleted), or the
//! call failed for a reason that may succeed on retry. Timeouts are retryable.

use serenity::http::HttpError;
use thiserror::Error;

/// Discord JSON error codes meaning the referenced resource does not exist.
///
/// Unknown Channel, Unknown Guild, Unknown Member, Unknown Role, Unknown User.
const UNKNOWN_RESOURCE_CODES: [isize; 5] = [10003, 10004, 10007, 10011, 10013];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExternalError {
    /// Target member, role or channel no longer exists.
    ///
    /// Treated as a benign cleanup trigger by the expiry sweep.
    #[error("Discord {what} not found")]
    NotFound {
        /// Kind of resource that was missing
        what: &'static str,
    },

    /// Call failed for an unknown or recoverable reason (permissions, network, rate limit).
    #[error("Discord request failed: {0}")]
    Transient(String),

    /// Call did not complete within the configured bound.
    #[error("Discord request '{operation}' timed out")]
    Timeout {
        /// Name of the operation that timed out
        operation: &'static str,
    },
}

impl ExternalError {
    /// Classifies a Serenity error.
    ///
    /// # Arguments
    /// - `err` - The error returned by Serenity
    /// - `what` - Resource kind reported if the error means the resource is gone
    ///
    /// # Returns
    /// - `ExternalError::NotFound` - HTTP 404 or an "Unknown ..." JSON error code
    /// - `ExternalError::Transient` - Any other failure
    pub fn from_discord(err: &serenity::Error, what: &'static str) -> Self {
        if is_unknown_resource(err) {
            Self::NotFound { what }
        } else {
            Self::Transient(err.to_string())
        }
    }

    /// Returns `true` when the error means the target resource is gone.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

fn is_unknown_resource(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
            response.status_code.as_u16() == 404
                || UNKNOWN_RESOURCE_CODES.contains(&response.error.code)
        }
        _ => false,
    }
}
