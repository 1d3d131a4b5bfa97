use crate::UserRole;

/// Fixed attributes assigned to an identity at sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityProfile {
    pub id: &'static str,
    pub role: UserRole,
    pub name: &'static str,
    pub department: &'static str,
}

impl IdentityProfile {
    pub const HR: Self = Self {
        id: "hr-1",
        role: UserRole::Hr,
        name: "HR Manager",
        department: "Human Resources",
    };

    pub const EMPLOYEE: Self = Self {
        id: "emp-1",
        role: UserRole::Employee,
        name: "John Doe",
        department: "Engineering",
    };

    /// Picks the profile for a sign-in email. Only an exact match on the HR
    /// address yields the HR profile.
    pub fn for_email(email: &str, hr_email: &str) -> Self {
        if email == hr_email {
            Self::HR
        } else {
            Self::EMPLOYEE
        }
    }
}
