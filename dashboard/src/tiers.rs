//! Membership pricing view: the tier catalog and its revenue roll-up.

use serde::{Deserialize, Serialize};
use shared::{MembershipTier, Result, SharedError};
use validator::Validate;

use crate::listing::filter::{FilterConfig, Listed};
use crate::listing::project::{project, Projection};
use crate::listing::summary::{average, sum};
use crate::store::{Keyed, RecordStore};

impl Keyed for MembershipTier {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Listed for MembershipTier {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn facet(&self, field: &str) -> Option<String> {
        match field {
            "active" => Some(if self.active { "Active" } else { "Archived" }.to_string()),
            _ => None,
        }
    }
}

/// Revenue roll-up shown above the pricing table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSummary {
    /// Subscribers summed across all tiers
    pub total_subscribers: u32,
    /// Monthly revenue summed across all tiers, in USD
    pub monthly_revenue: f64,
    /// Mean monthly revenue per tier, in USD (0.0 with no tiers)
    pub average_tier_revenue: f64,
}

/// The pricing tier catalog behind the Membership admin view.
#[derive(Debug, Clone, Default)]
pub struct TierCatalog {
    store: RecordStore<MembershipTier>,
}

impl TierCatalog {
    pub fn seed(tiers: Vec<MembershipTier>) -> Result<Self> {
        for tier in &tiers {
            tier.validate()?;
        }
        Ok(Self {
            store: RecordStore::seed(tiers)?,
        })
    }

    pub fn records(&self) -> &[MembershipTier] {
        self.store.records()
    }

    pub fn get(&self, id: &str) -> Option<&MembershipTier> {
        self.store.get(id)
    }

    pub fn page(
        &self,
        config: &FilterConfig,
        page: usize,
        page_size: usize,
    ) -> Projection<'_, MembershipTier> {
        project(self.store.records(), config, page, page_size)
    }

    pub fn add(&mut self, tier: MembershipTier) -> Result<()> {
        tier.validate()?;
        self.store.create(tier)
    }

    pub fn update(&mut self, id: &str, patch: impl FnOnce(&mut MembershipTier)) -> Result<()> {
        let mut edited = match self.store.get(id) {
            Some(tier) => tier.clone(),
            None => return Err(SharedError::NotFound(id.to_string())),
        };
        patch(&mut edited);
        edited.validate()?;
        self.store.update(id, |tier| *tier = edited)
    }

    pub fn remove(&mut self, id: &str) -> Result<MembershipTier> {
        self.store.delete(id)
    }

    /// Recomputes the revenue roll-up from the current catalog.
    pub fn revenue_summary(&self) -> RevenueSummary {
        let tiers = self.store.records();
        RevenueSummary {
            total_subscribers: tiers.iter().map(|t| t.subscriber_count).sum(),
            monthly_revenue: sum(tiers, |t| t.monthly_revenue),
            average_tier_revenue: average(tiers, |t| t.monthly_revenue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> TierCatalog {
        TierCatalog::seed(vec![
            MembershipTier {
                id: "tier-1".to_string(),
                name: "Rally Pass".to_string(),
                price: 9.99,
                features: vec!["Access to live match streams".to_string()],
                subscriber_count: 245,
                monthly_revenue: 2447.55,
                active: true,
            },
            MembershipTier {
                id: "tier-2".to_string(),
                name: "Match Point".to_string(),
                price: 19.99,
                features: vec!["All Rally Pass features".to_string()],
                subscriber_count: 182,
                monthly_revenue: 3638.18,
                active: true,
            },
            MembershipTier {
                id: "tier-3".to_string(),
                name: "Tour Insider".to_string(),
                price: 34.99,
                features: vec!["All Match Point features".to_string()],
                subscriber_count: 98,
                monthly_revenue: 3429.02,
                active: true,
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_revenue_summary_totals() {
        let summary = catalog().revenue_summary();
        assert_eq!(summary.total_subscribers, 525);
        assert!((summary.monthly_revenue - 9514.75).abs() < 1e-9);
        assert!((summary.average_tier_revenue - 3171.5833333333335).abs() < 1e-9);
    }

    #[test]
    fn test_empty_catalog_summary_is_all_zero() {
        let summary = TierCatalog::default().revenue_summary();
        assert_eq!(summary.total_subscribers, 0);
        assert_eq!(summary.monthly_revenue, 0.0);
        assert_eq!(summary.average_tier_revenue, 0.0);
    }

    #[test]
    fn test_name_search() {
        let catalog = catalog();
        let view = catalog.page(&FilterConfig::new().with_search("match"), 1, 10);
        assert_eq!(view.total_filtered, 1);
        assert_eq!(view.page_records[0].name, "Match Point");
    }

    #[test]
    fn test_archived_facet() {
        let mut catalog = catalog();
        catalog.update("tier-3", |t| t.active = false).unwrap();
        let view = catalog.page(&FilterConfig::new().with_facet("active", "Archived"), 1, 10);
        assert_eq!(view.total_filtered, 1);
        assert_eq!(view.page_records[0].id, "tier-3");
    }
}
