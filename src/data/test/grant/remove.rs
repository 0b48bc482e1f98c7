use super::*;

/// Tests removing a tracked grant.
///
/// Expected: true on first removal, false on second
#[test]
fn removes_grant_once() {
    let mut store = GrantStore::new();
    store.put(params(GUILD, MEMBER, ROLE, 1), epoch()).unwrap();

    assert!(store.remove_one(GUILD, MEMBER, ROLE));
    assert!(!store.remove_one(GUILD, MEMBER, ROLE));
    assert!(store.find(GUILD, MEMBER, ROLE).is_none());
}

/// Tests removing an untracked grant.
///
/// Expected: false for unknown guild, member and role
#[test]
fn ignores_untracked_grant() {
    let mut store = GrantStore::new();
    store.put(params(GUILD, MEMBER, ROLE, 1), epoch()).unwrap();

    assert!(!store.remove_one(OTHER_GUILD, MEMBER, ROLE));
    assert!(!store.remove_one(GUILD, OTHER_MEMBER, ROLE));
    assert!(!store.remove_one(GUILD, MEMBER, OTHER_ROLE));
    assert_eq!(store.len(), 1);
}

/// Tests cleanup of empty containers.
///
/// Verifies that removing a member's last grant drops the member from the guild's
/// subject count, and removing the guild's last member stops tracking the guild.
///
/// Expected: subject count falls 2 -> 1 and the guild is untracked at the end
#[test]
fn removes_empty_parents() {
    let mut store = GrantStore::new();
    store.put(params(GUILD, MEMBER, ROLE, 1), epoch()).unwrap();
    store.put(params(GUILD, MEMBER, OTHER_ROLE, 1), epoch()).unwrap();
    store.put(params(GUILD, OTHER_MEMBER, ROLE, 1), epoch()).unwrap();
    assert_eq!(store.stats(GUILD, epoch()).tracked_subjects, 2);

    store.remove_one(GUILD, OTHER_MEMBER, ROLE);
    assert_eq!(store.stats(GUILD, epoch()).tracked_subjects, 1);

    store.remove_one(GUILD, MEMBER, ROLE);
    assert_eq!(store.stats(GUILD, epoch()).tracked_subjects, 1);

    store.remove_one(GUILD, MEMBER, OTHER_ROLE);
    assert!(store.is_empty());
}

/// Tests that cleanup after a sweep spares a replacement grant.
///
/// Expected: the stale grant is not removed once it has been re-granted
#[test]
fn remove_if_unchanged_spares_replacement() {
    let mut store = GrantStore::new();
    let swept = store.put(params(GUILD, MEMBER, ROLE, 1), epoch()).unwrap();
    let replacement = store
        .put(params(GUILD, MEMBER, ROLE, 5), epoch() + Duration::days(1))
        .unwrap();

    assert!(!store.remove_if_unchanged(&swept));
    assert_eq!(store.find(GUILD, MEMBER, ROLE), Some(&replacement));

    assert!(store.remove_if_unchanged(&replacement));
    assert!(store.is_empty());
}

/// Tests recognising a grant that has been replaced or removed.
///
/// Expected: only the grant currently stored for the triple is current
#[test]
fn is_current_tracks_latest_grant() {
    let mut store = GrantStore::new();
    let first = store.put(params(GUILD, MEMBER, ROLE, 1), epoch()).unwrap();
    assert!(store.is_current(&first));

    let replacement = store
        .put(params(GUILD, MEMBER, ROLE, 1), epoch() + Duration::hours(1))
        .unwrap();
    assert!(!store.is_current(&first));
    assert!(store.is_current(&replacement));

    store.remove_one(GUILD, MEMBER, ROLE);
    assert!(!store.is_current(&replacement));
}
