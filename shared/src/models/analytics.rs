use serde::{Deserialize, Serialize};

use crate::models::member::Region;

/// Platform-wide membership and revenue statistics
///
/// Recomputed from the current stores on every request; nothing here is
/// cached or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformStats {
    /// Total number of members across all tiers
    pub total_members: usize,

    /// Members whose status is Active
    pub active_members: usize,

    /// Members whose status is Inactive
    pub inactive_members: usize,

    /// Subscriber count summed across all tiers
    pub total_subscribers: u32,

    /// Monthly revenue summed across all tiers, in USD
    pub monthly_revenue: f64,

    /// Mean monthly revenue per tier, in USD (0.0 when there are no tiers)
    pub average_tier_revenue: f64,
}

/// Subscriber count for one pricing tier, for the distribution chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierDistribution {
    pub name: String,
    pub subscribers: u32,
}

/// Member count for one region, for the regional bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionActivity {
    pub region: Region,
    pub members: usize,
}

/// One point of the monthly user-growth series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyUsers {
    /// Month label, e.g. "Nov"
    pub month: String,
    pub users: u32,
}

/// One point of the monthly revenue trend series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    /// Month label, e.g. "Nov"
    pub month: String,
    /// Revenue for the month, in USD
    pub revenue: f64,
}
