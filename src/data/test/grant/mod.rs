use crate::{
    data::grant::GrantStore,
    error::validation::ValidationError,
    model::grant::{CreateGrantParams, DEFAULT_GRANT_REASON},
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serenity::all::{GuildId, RoleId, UserId};

mod list_expired_as_of;
mod put;
mod remove;
mod stats;

const GUILD: GuildId = GuildId::new(100);
const OTHER_GUILD: GuildId = GuildId::new(200);
const MEMBER: UserId = UserId::new(10);
const OTHER_MEMBER: UserId = UserId::new(11);
const ADMIN: UserId = UserId::new(1);
const ROLE: RoleId = RoleId::new(50);
const OTHER_ROLE: RoleId = RoleId::new(51);

/// Fixed reference time used as `t=0` by the store tests.
fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

fn params(
    guild_id: GuildId,
    user_id: UserId,
    role_id: RoleId,
    duration_days: i64,
) -> CreateGrantParams {
    CreateGrantParams {
        guild_id,
        user_id,
        role_id,
        duration_days,
        granted_by: ADMIN,
        reason: None,
    }
}
