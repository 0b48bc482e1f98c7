use super::*;

/// Tests storing a grant.
///
/// Verifies that the grant starts at the supplied time, expires after the requested
/// number of days and records the actor and reason.
///
/// Expected: Ok with grant listed for the member
#[test]
fn stores_grant() {
    let mut store = GrantStore::new();
    let mut request = params(GUILD, MEMBER, ROLE, 1);
    request.reason = Some("trial".to_string());

    let grant = store.put(request, epoch()).unwrap();

    assert_eq!(grant.granted_at, epoch());
    assert_eq!(grant.expires_at, epoch() + Duration::days(1));
    assert_eq!(grant.granted_by, ADMIN);
    assert_eq!(grant.reason, "trial");
    assert_eq!(store.list_for_subject(GUILD, MEMBER), vec![grant]);
}

/// Tests the default reason.
///
/// Expected: missing and blank reasons both record the default text
#[test]
fn defaults_missing_reason() {
    let mut store = GrantStore::new();

    let grant = store.put(params(GUILD, MEMBER, ROLE, 7), epoch()).unwrap();
    assert_eq!(grant.reason, DEFAULT_GRANT_REASON);

    let mut request = params(GUILD, MEMBER, OTHER_ROLE, 7);
    request.reason = Some("   ".to_string());
    let grant = store.put(request, epoch()).unwrap();
    assert_eq!(grant.reason, DEFAULT_GRANT_REASON);
}

/// Tests the duration bounds.
///
/// Verifies that durations outside 1..=365 days are rejected and leave the store
/// untouched, while both bounds are accepted.
///
/// Expected: Err(DurationOutOfRange) for 0, -3, 366; Ok for 1 and 365
#[test]
fn rejects_out_of_range_durations() {
    let mut store = GrantStore::new();

    for days in [0, -3, 366, i64::MAX] {
        let result = store.put(params(GUILD, MEMBER, ROLE, days), epoch());
        assert_eq!(result, Err(ValidationError::DurationOutOfRange { days }));
        assert!(store.is_empty());
    }

    assert!(store.put(params(GUILD, MEMBER, ROLE, 1), epoch()).is_ok());
    assert!(store.put(params(GUILD, MEMBER, OTHER_ROLE, 365), epoch()).is_ok());
    assert_eq!(store.len(), 2);
}

/// Tests granting the same role twice.
///
/// Verifies that a second grant for the same guild, member and role replaces the first
/// instead of tracking a duplicate.
///
/// Expected: exactly one grant, carrying the second expiry
#[test]
fn replaces_duplicate_grant() {
    let mut store = GrantStore::new();
    store.put(params(GUILD, MEMBER, ROLE, 1), epoch()).unwrap();

    let later = epoch() + Duration::hours(5);
    let replacement = store.put(params(GUILD, MEMBER, ROLE, 30), later).unwrap();

    let grants = store.list_for_subject(GUILD, MEMBER);
    assert_eq!(grants.len(), 1);
    assert_eq!(grants[0], replacement);
    assert_eq!(grants[0].expires_at, later + Duration::days(30));
}

/// Tests that grants are scoped by guild.
///
/// Expected: the same member and role in two guilds are tracked separately
#[test]
fn scopes_grants_by_guild() {
    let mut store = GrantStore::new();
    store.put(params(GUILD, MEMBER, ROLE, 1), epoch()).unwrap();
    store.put(params(OTHER_GUILD, MEMBER, ROLE, 1), epoch()).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.list_for_subject(GUILD, MEMBER).len(), 1);
    assert_eq!(store.list_for_subject(OTHER_GUILD, MEMBER).len(), 1);
    assert!(store.list_for_subject(GUILD, OTHER_MEMBER).is_empty());
}
