use super::*;

/// Tests that only one concurrent creation can reserve a requester's slot.
///
/// Expected: first Reserved, second Pending
#[test]
fn second_reservation_is_pending() {
    let mut registry = TicketRegistry::new();

    assert_eq!(registry.reserve(REQUESTER), Reservation::Reserved);
    assert_eq!(registry.reserve(REQUESTER), Reservation::Pending);
    assert_eq!(registry.reserve(OTHER_REQUESTER), Reservation::Reserved);
}

/// Tests that opening the ticket consumes the reservation.
///
/// Expected: reserving again reports the open channel
#[test]
fn open_consumes_reservation() {
    let mut registry = TicketRegistry::new();
    registry.reserve(REQUESTER);
    registry.open(REQUESTER, CHANNEL);

    assert_eq!(registry.reserve(REQUESTER), Reservation::AlreadyOpen(CHANNEL));

    registry.close(REQUESTER);
    assert_eq!(registry.reserve(REQUESTER), Reservation::Reserved);
}

/// Tests releasing a reservation after a failed creation.
///
/// Expected: the slot can be reserved again
#[test]
fn release_frees_reservation() {
    let mut registry = TicketRegistry::new();
    registry.reserve(REQUESTER);
    registry.release(REQUESTER);

    assert_eq!(registry.reserve(REQUESTER), Reservation::Reserved);
    assert_eq!(registry.lookup(REQUESTER), None);
}
