//! Insights view: platform-wide statistics derived from the live stores.
//!
//! Everything here is recomputed per call from the records it is handed;
//! the monthly trend series are seed data owned by the caller and are not
//! derived here.

use shared::{Member, MemberStatus, MembershipTier, PlatformStats, Region, RegionActivity, TierDistribution};

use crate::listing::summary::{average, count_where, sum};

/// Headline statistics for the Insights cards.
pub fn platform_stats(members: &[Member], tiers: &[MembershipTier]) -> PlatformStats {
    PlatformStats {
        total_members: members.len(),
        active_members: count_where(members, |m| m.status == MemberStatus::Active),
        inactive_members: count_where(members, |m| m.status == MemberStatus::Inactive),
        total_subscribers: tiers.iter().map(|t| t.subscriber_count).sum(),
        monthly_revenue: sum(tiers, |t| t.monthly_revenue),
        average_tier_revenue: average(tiers, |t| t.monthly_revenue),
    }
}

/// Subscriber share per tier, in catalog order, for the distribution chart.
pub fn tier_distribution(tiers: &[MembershipTier]) -> Vec<TierDistribution> {
    tiers
        .iter()
        .map(|tier| TierDistribution {
            name: tier.name.clone(),
            subscribers: tier.subscriber_count,
        })
        .collect()
}

/// Member count per region, in fixed region order, for the regional chart.
pub fn region_breakdown(members: &[Member]) -> Vec<RegionActivity> {
    Region::ALL_REGIONS
        .iter()
        .map(|region| RegionActivity {
            region: *region,
            members: count_where(members, |m| m.region == *region),
        })
        .collect()
}
