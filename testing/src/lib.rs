//! Shared fixtures for the integration tests.
//!
//! Scenario tests either use the real seed datasets from `dataload` or the
//! synthetic rosters built here when a test needs exact counts.

use chrono::NaiveDate;
use shared::{Member, MemberStatus, PlanTier, Region};

/// Builds a synthetic roster of `total` members, the first `inactive` of
/// which are Inactive. Tiers and regions cycle like the production seed.
pub fn synthetic_members(total: usize, inactive: usize) -> Vec<Member> {
    (0..total)
        .map(|i| Member {
            id: format!("member-{}", i + 1),
            name: format!("Synthetic Member {}", i + 1),
            email: format!("synthetic{}@example.com", i + 1),
            avatar_url: format!("https://api.dicebear.com/7.x/avataaars/svg?seed=s{i}"),
            tier: PlanTier::ALL_TIERS[i % 3],
            join_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            region: Region::ALL_REGIONS[i % 5],
            status: if i < inactive {
                MemberStatus::Inactive
            } else {
                MemberStatus::Active
            },
            last_active: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
        })
        .collect()
}
