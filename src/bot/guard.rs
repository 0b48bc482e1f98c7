//! Authorization checks for commands and buttons.
//!
//! Both checks read the member attached to the interaction. They run before any store
//! access so that a refused request has no side effects.

use serenity::all::{Member, RoleId};

use crate::error::auth::AuthError;

/// Requires the invoking member to hold the Administrator permission.
///
/// Discord only fills in `Member::permissions` for members attached to an interaction,
/// which is the only place this guard is used.
///
/// # Returns
/// - `Ok(())` - The member is an administrator
/// - `Err(AuthError::NotInGuild)` - The interaction did not come from a guild
/// - `Err(AuthError::NotAdministrator)` - The member lacks the permission
pub fn require_administrator(member: Option<&Member>) -> Result<(), AuthError> {
    let member = member.ok_or(AuthError::NotInGuild)?;

    if member
        .permissions
        .is_some_and(|permissions| permissions.administrator())
    {
        Ok(())
    } else {
        Err(AuthError::NotAdministrator)
    }
}

/// Requires the invoking member to hold the ticket staff role.
pub fn require_ticket_staff(member: Option<&Member>, staff_role_id: RoleId) -> Result<(), AuthError> {
    let member = member.ok_or(AuthError::NotInGuild)?;

    if member.roles.contains(&staff_role_id) {
        Ok(())
    } else {
        Err(AuthError::NotTicketStaff)
    }
}
