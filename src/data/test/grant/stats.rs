use super::*;

/// Tests stats for a guild with no grants.
///
/// Expected: all counts zero
#[test]
fn empty_guild_has_zero_stats() {
    let store = GrantStore::new();
    let stats = store.stats(GUILD, epoch());

    assert_eq!(stats.total_grants, 0);
    assert_eq!(stats.active_grants, 0);
    assert_eq!(stats.expiring_soon, 0);
    assert_eq!(stats.tracked_subjects, 0);
}

/// Tests active and expiring-soon counts.
///
/// Two days after granting, the 1 day grant is expired but not yet swept, the 3 day
/// grant expires within 24 hours and the 30 day grant is simply active. Grants in other
/// guilds are not counted.
///
/// Expected: total 3, active 2, expiring soon 1, subjects 2
#[test]
fn counts_active_and_expiring_grants() {
    let mut store = GrantStore::new();
    store.put(params(GUILD, MEMBER, ROLE, 1), epoch()).unwrap();
    store.put(params(GUILD, MEMBER, OTHER_ROLE, 3), epoch()).unwrap();
    store.put(params(GUILD, OTHER_MEMBER, ROLE, 30), epoch()).unwrap();
    store.put(params(OTHER_GUILD, MEMBER, ROLE, 3), epoch()).unwrap();

    let stats = store.stats(GUILD, epoch() + Duration::days(2));

    assert_eq!(stats.total_grants, 3);
    assert_eq!(stats.active_grants, 2);
    assert_eq!(stats.expiring_soon, 1);
    assert_eq!(stats.tracked_subjects, 2);
}
