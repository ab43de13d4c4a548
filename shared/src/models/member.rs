use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A paying member of the fan club
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Member {
    /// Store-unique identifier (format: "member-{n}" or a random token)
    pub id: String,

    /// Member's display name
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Member's email address
    #[validate(email)]
    pub email: String,

    /// Avatar image URL
    #[validate(url)]
    pub avatar_url: String,

    /// Subscription plan the member is on
    pub tier: PlanTier,

    /// Date the member joined the club
    #[serde(rename = "joinDate")]
    pub join_date: NaiveDate,

    /// Geographic region used for regional breakdowns
    pub region: Region,

    /// Whether the membership is currently active
    pub status: MemberStatus,

    /// Date of the member's last visit
    #[serde(rename = "lastActive")]
    pub last_active: NaiveDate,
}

impl Member {
    /// Creates a new member with validation
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        name: String,
        email: String,
        avatar_url: String,
        tier: PlanTier,
        join_date: NaiveDate,
        region: Region,
        status: MemberStatus,
        last_active: NaiveDate,
    ) -> Result<Self> {
        let member = Self {
            id,
            name,
            email,
            avatar_url,
            tier,
            join_date,
            region,
            status,
            last_active,
        };
        member.validate()?;
        Ok(member)
    }
}

/// Subscription plans sold by the club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanTier {
    #[serde(rename = "Rally Pass")]
    RallyPass,
    #[serde(rename = "Match Point")]
    MatchPoint,
    #[serde(rename = "Tour Insider")]
    TourInsider,
}

impl PlanTier {
    pub const ALL_TIERS: [PlanTier; 3] =
        [PlanTier::RallyPass, PlanTier::MatchPoint, PlanTier::TourInsider];
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanTier::RallyPass => write!(f, "Rally Pass"),
            PlanTier::MatchPoint => write!(f, "Match Point"),
            PlanTier::TourInsider => write!(f, "Tour Insider"),
        }
    }
}

/// Geographic regions members belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
    Central,
}

impl Region {
    pub const ALL_REGIONS: [Region; 5] = [
        Region::North,
        Region::South,
        Region::East,
        Region::West,
        Region::Central,
    ];
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::North => write!(f, "North"),
            Region::South => write!(f, "South"),
            Region::East => write!(f, "East"),
            Region::West => write!(f, "West"),
            Region::Central => write!(f, "Central"),
        }
    }
}

/// Membership standing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberStatus {
    Active,
    Inactive,
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberStatus::Active => write!(f, "Active"),
            MemberStatus::Inactive => write!(f, "Inactive"),
        }
    }
}
