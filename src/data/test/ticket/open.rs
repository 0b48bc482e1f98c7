use super::*;

/// Tests recording and looking up a ticket.
///
/// Expected: lookup returns the recorded channel, other requesters have none
#[test]
fn records_open_ticket() {
    let mut registry = TicketRegistry::new();
    registry.open(REQUESTER, CHANNEL);

    assert_eq!(registry.lookup(REQUESTER), Some(CHANNEL));
    assert_eq!(registry.lookup(OTHER_REQUESTER), None);
}

/// Tests that a second open overwrites the first.
///
/// Expected: last write wins
#[test]
fn last_open_wins() {
    let mut registry = TicketRegistry::new();
    registry.open(REQUESTER, CHANNEL);
    registry.open(REQUESTER, OTHER_CHANNEL);

    assert_eq!(registry.lookup(REQUESTER), Some(OTHER_CHANNEL));
    assert_eq!(registry.len(), 1);
}

/// Tests closing a ticket.
///
/// Expected: lookup after close is absent, closing again is a no-op
#[test]
fn close_frees_slot() {
    let mut registry = TicketRegistry::new();
    registry.open(REQUESTER, CHANNEL);

    assert_eq!(registry.close(REQUESTER), Some(CHANNEL));
    assert_eq!(registry.lookup(REQUESTER), None);
    assert_eq!(registry.close(REQUESTER), None);
}

/// Tests reverse lookup and eviction by channel.
///
/// Expected: the owner is found by channel and evicted; an unrelated channel evicts nothing
#[test]
fn closes_by_channel() {
    let mut registry = TicketRegistry::new();
    registry.open(REQUESTER, CHANNEL);
    registry.open(OTHER_REQUESTER, OTHER_CHANNEL);

    assert_eq!(registry.subject_for_channel(CHANNEL), Some(REQUESTER));
    assert_eq!(registry.close_by_channel(CHANNEL), Some(REQUESTER));
    assert_eq!(registry.close_by_channel(CHANNEL), None);
    assert_eq!(registry.lookup(OTHER_REQUESTER), Some(OTHER_CHANNEL));
}
