//! Typed access to resolved slash command options.

use serenity::all::{ResolvedOption, ResolvedValue, RoleId, UserId};

use crate::error::validation::ValidationError;

fn find<'a>(options: &'a [ResolvedOption<'a>], name: &str) -> Option<&'a ResolvedValue<'a>> {
    options
        .iter()
        .find(|option| option.name == name)
        .map(|option| &option.value)
}

fn missing(name: &str) -> ValidationError {
    ValidationError::MissingOption(name.to_string())
}

pub fn user(options: &[ResolvedOption<'_>], name: &str) -> Result<UserId, ValidationError> {
    match find(options, name) {
        Some(ResolvedValue::User(user, _)) => Ok(user.id),
        _ => Err(missing(name)),
    }
}

pub fn role(options: &[ResolvedOption<'_>], name: &str) -> Result<RoleId, ValidationError> {
    match find(options, name) {
        Some(ResolvedValue::Role(role)) => Ok(role.id),
        _ => Err(missing(name)),
    }
}

pub fn integer(options: &[ResolvedOption<'_>], name: &str) -> Result<i64, ValidationError> {
    match find(options, name) {
        Some(ResolvedValue::Integer(value)) => Ok(*value),
        _ => Err(missing(name)),
    }
}

/// Optional string option; blank strings count as absent.
pub fn optional_string(options: &[ResolvedOption<'_>], name: &str) -> Option<String> {
    match find(options, name) {
        Some(ResolvedValue::String(value)) if !value.trim().is_empty() => {
            Some(value.trim().to_string())
        }
        _ => None,
    }
}
