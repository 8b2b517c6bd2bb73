//! Access policy for booking status transitions.
//!
//! Decides, from the actor's role and booking ownership, whether a
//! transition request is permitted. The current status is
//! deliberately not consulted: the upstream behavior allows
//! re-cancelling and confirming a cancelled booking, and that gap is
//! reproduced here rather than silently fixed (see DESIGN.md).

use crate::domain::{BookingStatus, UserRole};

/// Transition table:
///
/// | requested | who may request it                       |
/// |-----------|------------------------------------------|
/// | Cancelled | the owner (any role), or Manager/Admin   |
/// | Confirmed | Manager/Admin (ownership irrelevant)     |
/// | Pending   | nobody                                   |
pub fn can_transition(actor_role: UserRole, is_owner: bool, requested: BookingStatus) -> bool {
    match requested {
        BookingStatus::Cancelled => is_owner || actor_role.is_elevated(),
        BookingStatus::Confirmed => actor_role.is_elevated(),
        BookingStatus::Pending => false,
    }
}

/// Cancellation entry point that takes no target status.
///
/// Same rule as the Cancelled row of the transition table.
pub fn can_cancel(actor_role: UserRole, is_owner: bool) -> bool {
    is_owner || actor_role.is_elevated()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_may_cancel_own_booking() {
        assert!(can_transition(UserRole::User, true, BookingStatus::Cancelled));
        assert!(can_cancel(UserRole::User, true));
    }

    #[test]
    fn plain_user_may_not_cancel_foreign_booking() {
        assert!(!can_transition(UserRole::User, false, BookingStatus::Cancelled));
        assert!(!can_cancel(UserRole::User, false));
    }

    #[test]
    fn manager_and_admin_may_cancel_any_booking() {
        assert!(can_transition(UserRole::Manager, false, BookingStatus::Cancelled));
        assert!(can_transition(UserRole::Admin, false, BookingStatus::Cancelled));
        assert!(can_cancel(UserRole::Manager, false));
        assert!(can_cancel(UserRole::Admin, false));
    }

    #[test]
    fn only_elevated_roles_may_confirm() {
        assert!(can_transition(UserRole::Manager, false, BookingStatus::Confirmed));
        assert!(can_transition(UserRole::Admin, false, BookingStatus::Confirmed));
        // Ownership does not help a plain user confirm, even their own
        assert!(!can_transition(UserRole::User, true, BookingStatus::Confirmed));
        assert!(!can_transition(UserRole::User, false, BookingStatus::Confirmed));
    }

    #[test]
    fn nobody_may_request_pending() {
        assert!(!can_transition(UserRole::Admin, true, BookingStatus::Pending));
        assert!(!can_transition(UserRole::User, true, BookingStatus::Pending));
    }
}
