use serenity::all::{Permissions, RoleId};
use test_utils::serenity::create_test_member;

use crate::{
    bot::guard::{require_administrator, require_ticket_staff},
    error::auth::AuthError,
};

const GUILD: u64 = 100;
const STAFF_ROLE: u64 = 300;

/// Tests the administrator guard with an administrator.
///
/// Expected: Ok(())
#[test]
fn admits_administrator() {
    let member = create_test_member(GUILD, 1, &[], Some(Permissions::ADMINISTRATOR.bits()));

    assert_eq!(require_administrator(Some(&member)), Ok(()));
}

/// Tests the administrator guard with a member who can only manage roles.
///
/// Expected: Err(NotAdministrator)
#[test]
fn refuses_non_administrator() {
    let member = create_test_member(GUILD, 2, &[], Some(Permissions::MANAGE_ROLES.bits()));

    assert_eq!(
        require_administrator(Some(&member)),
        Err(AuthError::NotAdministrator)
    );
}

/// Tests the administrator guard when Discord sent no permission bits.
///
/// Expected: Err(NotAdministrator)
#[test]
fn refuses_member_without_permission_data() {
    let member = create_test_member(GUILD, 2, &[], None);

    assert_eq!(
        require_administrator(Some(&member)),
        Err(AuthError::NotAdministrator)
    );
}

/// Tests both guards outside a guild.
///
/// Expected: Err(NotInGuild)
#[test]
fn refuses_direct_message_interactions() {
    assert_eq!(require_administrator(None), Err(AuthError::NotInGuild));
    assert_eq!(
        require_ticket_staff(None, RoleId::new(STAFF_ROLE)),
        Err(AuthError::NotInGuild)
    );
}

/// Tests the ticket staff guard.
///
/// Administrators without the staff role are refused too, matching how the close
/// button has always worked.
///
/// Expected: Ok for the staff member, Err(NotTicketStaff) for everyone else
#[test]
fn checks_ticket_staff_role() {
    let staff = create_test_member(GUILD, 1, &[STAFF_ROLE], None);
    let admin = create_test_member(GUILD, 2, &[], Some(Permissions::ADMINISTRATOR.bits()));

    assert_eq!(
        require_ticket_staff(Some(&staff), RoleId::new(STAFF_ROLE)),
        Ok(())
    );
    assert_eq!(
        require_ticket_staff(Some(&admin), RoleId::new(STAFF_ROLE)),
        Err(AuthError::NotTicketStaff)
    );
}
