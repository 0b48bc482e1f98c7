use serenity::all::{GuildId, Member, RoleId, UserId};

/// Live view of a guild member as reported by the role authority.
///
/// Decouples the expiry sweep from Serenity's `Member`, which carries far more state
/// than the sweep needs and cannot be constructed cheaply in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSnapshot {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub roles: Vec<RoleId>,
}

impl MemberSnapshot {
    /// Returns `true` if the member currently holds `role_id`.
    pub fn has_role(&self, role_id: RoleId) -> bool {
        self.roles.contains(&role_id)
    }
}

impl From<&Member> for MemberSnapshot {
    fn from(member: &Member) -> Self {
        Self {
            guild_id: member.guild_id,
            user_id: member.user.id,
            roles: member.roles.clone(),
        }
    }
}
