use serenity::all::{GuildId, RoleId, UserId};
use serenity::async_trait;

use crate::{error::external::ExternalError, model::member::MemberSnapshot};

/// External system holding the ground truth of which roles members actually have.
///
/// Errors are classified as `ExternalError::NotFound` when the member or role no longer
/// exists, and as transient otherwise.
#[async_trait]
pub trait RoleAuthority: Send + Sync {
    /// Fetches the live member.
    ///
    /// # Returns
    /// - `Ok(Some(MemberSnapshot))` - The member is in the guild
    /// - `Ok(None)` - The member left the guild
    /// - `Err(ExternalError)` - The lookup failed
    async fn fetch_member(
        &self,
        guild_id: GuildId,
        user_id: UserId,
    ) -> Result<Option<MemberSnapshot>, ExternalError>;

    fn member_has_role(&self, member: &MemberSnapshot, role_id: RoleId) -> bool {
        member.has_role(role_id)
    }

    async fn add_role(
        &self,
        member: &MemberSnapshot,
        role_id: RoleId,
    ) -> Result<(), ExternalError>;

    async fn remove_role(
        &self,
        member: &MemberSnapshot,
        role_id: RoleId,
    ) -> Result<(), ExternalError>;
}
