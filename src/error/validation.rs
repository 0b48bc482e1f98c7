use thiserror::Error;

use crate::model::grant::{MAX_GRANT_DAYS, MIN_GRANT_DAYS};

/// Caller-supplied parameters that violate an invariant.
///
/// No state is mutated when one of these is returned.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Temporary role duration outside the accepted range.
    #[error(
        "Duration must be between {min} and {max} days, got {days}.",
        min = MIN_GRANT_DAYS,
        max = MAX_GRANT_DAYS
    )]
    DurationOutOfRange {
        /// The rejected duration in days
        days: i64,
    },

    /// A required slash command option was not supplied or had the wrong type.
    #[error("Missing or invalid option '{0}'.")]
    MissingOption(String),
}
