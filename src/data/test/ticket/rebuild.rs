use super::*;

/// Tests rebuilding from scanned entries.
///
/// Verifies that prior entries are discarded, lookups reflect exactly the supplied
/// entries, and a reservation for a scanned requester is settled.
///
/// Expected: only the rebuilt entry remains
#[test]
fn rebuild_replaces_state() {
    let mut registry = TicketRegistry::new();
    registry.open(REQUESTER, CHANNEL);
    registry.reserve(OTHER_REQUESTER);

    registry.rebuild([(OTHER_REQUESTER, OTHER_CHANNEL)]);

    assert_eq!(registry.lookup(REQUESTER), None);
    assert_eq!(registry.lookup(OTHER_REQUESTER), Some(OTHER_CHANNEL));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.reserve(REQUESTER), Reservation::Reserved);
}

/// Tests rebuilding with no entries.
///
/// Expected: empty registry
#[test]
fn rebuild_with_nothing_clears() {
    let mut registry = TicketRegistry::new();
    registry.open(REQUESTER, CHANNEL);

    registry.rebuild(Vec::new());

    assert!(registry.is_empty());
}

/// Tests a rebuild while a ticket channel is still being created.
///
/// Verifies that a reconnect rescan does not free the slot of a requester whose channel
/// the scan could not see yet, so a second click cannot create a duplicate.
///
/// Expected: the reservation stays pending until the ticket is opened
#[test]
fn rebuild_keeps_pending_reservation() {
    let mut registry = TicketRegistry::new();
    assert_eq!(registry.reserve(REQUESTER), Reservation::Reserved);

    registry.rebuild([(OTHER_REQUESTER, OTHER_CHANNEL)]);

    assert_eq!(registry.reserve(REQUESTER), Reservation::Pending);

    registry.open(REQUESTER, CHANNEL);
    assert_eq!(registry.reserve(REQUESTER), Reservation::AlreadyOpen(CHANNEL));
}
