use super::*;

/// Tests expiry boundaries for a one day grant.
///
/// A grant made at `t=0` is not expired at `t=0`, is expired exactly at one day and
/// remains expired afterwards.
///
/// Expected: empty at t=0, grant present at t=86400s and t=86401s
#[test]
fn lists_grant_once_expiry_is_reached() {
    let mut store = GrantStore::new();
    let grant = store.put(params(GUILD, MEMBER, ROLE, 1), epoch()).unwrap();

    assert!(store.list_expired_as_of(epoch()).is_empty());
    assert!(store
        .list_expired_as_of(epoch() + Duration::seconds(86_399))
        .is_empty());
    assert_eq!(
        store.list_expired_as_of(epoch() + Duration::seconds(86_400)),
        vec![grant.clone()]
    );
    assert_eq!(
        store.list_expired_as_of(epoch() + Duration::seconds(86_401)),
        vec![grant]
    );
}

/// Tests that expired grants are collected across guilds.
///
/// Expected: only the two expired grants, from both guilds
#[test]
fn lists_expired_grants_across_guilds() {
    let mut store = GrantStore::new();
    store.put(params(GUILD, MEMBER, ROLE, 1), epoch()).unwrap();
    store.put(params(OTHER_GUILD, OTHER_MEMBER, ROLE, 2), epoch()).unwrap();
    store.put(params(GUILD, MEMBER, OTHER_ROLE, 10), epoch()).unwrap();

    let mut expired = store.list_expired_as_of(epoch() + Duration::days(3));
    expired.sort_by_key(|grant| grant.guild_id);

    assert_eq!(expired.len(), 2);
    assert_eq!(expired[0].guild_id, GUILD);
    assert_eq!(expired[0].role_id, ROLE);
    assert_eq!(expired[1].guild_id, OTHER_GUILD);
}
