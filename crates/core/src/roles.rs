//! Well-known role names.
//!
//! Roles are fixed at registration; there is no promotion path. The set here
//! must match the CHECK constraint on `users.role`.

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

/// Every role a user record may carry.
pub const ALL_ROLES: &[&str] = &[ROLE_USER, ROLE_ADMIN];

/// True when `role` is one of the enumerated role names.
pub fn is_valid_role(role: &str) -> bool {
    ALL_ROLES.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_are_valid() {
        assert!(is_valid_role(ROLE_USER));
        assert!(is_valid_role(ROLE_ADMIN));
    }

    #[test]
    fn unknown_roles_are_rejected() {
        assert!(!is_valid_role("superadmin"));
        assert!(!is_valid_role("Admin"));
        assert!(!is_valid_role(""));
    }
}
