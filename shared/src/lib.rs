pub mod models {
    pub mod member;
    pub mod staff;
    pub mod tier;
    pub mod matches;
    pub mod recap;
    pub mod analytics;
}

pub mod error;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export models
pub use models::{
    analytics::{
        MonthlyRevenue, MonthlyUsers, PlatformStats, RegionActivity, TierDistribution,
    },
    matches::{LiveMatch, MatchStatus},
    member::{Member, MemberStatus, PlanTier, Region},
    recap::GameRecap,
    staff::{StaffRole, TeamMember},
    tier::MembershipTier,
};
