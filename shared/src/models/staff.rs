use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A staff account with access to the admin dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TeamMember {
    /// Store-unique identifier (format: "team-{n}")
    pub id: String,

    /// Staff member's display name
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Staff member's email address
    #[validate(email)]
    pub email: String,

    /// Avatar image URL
    #[validate(url)]
    pub avatar_url: String,

    /// Dashboard role determining which views the account may manage
    pub role: StaffRole,

    /// Date of the staff member's last sign-in
    #[serde(rename = "lastActive")]
    pub last_active: NaiveDate,
}

/// Dashboard roles, from broadest to narrowest access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    #[serde(rename = "Super Admin")]
    SuperAdmin,
    Admin,
    #[serde(rename = "Content Manager")]
    ContentManager,
    Moderator,
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StaffRole::SuperAdmin => write!(f, "Super Admin"),
            StaffRole::Admin => write!(f, "Admin"),
            StaffRole::ContentManager => write!(f, "Content Manager"),
            StaffRole::Moderator => write!(f, "Moderator"),
        }
    }
}
