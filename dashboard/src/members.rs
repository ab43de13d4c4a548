//! Members admin view: the full member roster with tier/region/status
//! facets and free-text search over name and email.

use serde::{Deserialize, Serialize};
use shared::{Member, RegionActivity, Result};
use validator::Validate;

use crate::listing::filter::{FilterConfig, Listed};
use crate::listing::project::{project, Projection};
use crate::listing::summary::{count_where, group_count};
use crate::store::{Keyed, RecordStore};

impl Keyed for Member {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Listed for Member {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn facet(&self, field: &str) -> Option<String> {
        match field {
            "tier" => Some(self.tier.to_string()),
            "region" => Some(self.region.to_string()),
            "status" => Some(self.status.to_string()),
            _ => None,
        }
    }
}

/// Headline numbers for the Members view cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberOverview {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    /// Member count per plan tier, by tier display name
    pub by_tier: Vec<(String, usize)>,
    /// Member count per region
    pub by_region: Vec<RegionActivity>,
}

/// The member roster behind the Members admin view.
#[derive(Debug, Clone, Default)]
pub struct MemberDirectory {
    store: RecordStore<Member>,
}

impl MemberDirectory {
    /// Builds the directory from seed records, validating each one.
    pub fn seed(members: Vec<Member>) -> Result<Self> {
        for member in &members {
            member.validate()?;
        }
        Ok(Self {
            store: RecordStore::seed(members)?,
        })
    }

    pub fn records(&self) -> &[Member] {
        self.store.records()
    }

    pub fn get(&self, id: &str) -> Option<&Member> {
        self.store.get(id)
    }

    /// One visible page of the roster under the current filters.
    pub fn page(
        &self,
        config: &FilterConfig,
        page: usize,
        page_size: usize,
    ) -> Projection<'_, Member> {
        project(self.store.records(), config, page, page_size)
    }

    pub fn add(&mut self, member: Member) -> Result<()> {
        member.validate()?;
        self.store.create(member)
    }

    /// Applies `patch` to the member matching `id`, keeping the result valid.
    pub fn update(&mut self, id: &str, patch: impl FnOnce(&mut Member)) -> Result<()> {
        let mut edited = match self.store.get(id) {
            Some(member) => member.clone(),
            None => return Err(shared::SharedError::NotFound(id.to_string())),
        };
        patch(&mut edited);
        edited.validate()?;
        self.store.update(id, |member| *member = edited)
    }

    pub fn remove(&mut self, id: &str) -> Result<Member> {
        self.store.delete(id)
    }

    /// Headline counts, recomputed from the full roster on every call.
    pub fn overview(&self) -> MemberOverview {
        let records = self.store.records();
        let by_tier_counts = group_count(records, |m| m.tier.to_string());
        let by_tier = shared::PlanTier::ALL_TIERS
            .iter()
            .map(|tier| {
                let name = tier.to_string();
                let count = by_tier_counts.get(&name).copied().unwrap_or(0);
                (name, count)
            })
            .collect();

        let by_region = shared::Region::ALL_REGIONS
            .iter()
            .map(|region| RegionActivity {
                region: *region,
                members: count_where(records, |m| m.region == *region),
            })
            .collect();

        MemberOverview {
            total: records.len(),
            active: count_where(records, |m| m.status == shared::MemberStatus::Active),
            inactive: count_where(records, |m| m.status == shared::MemberStatus::Inactive),
            by_tier,
            by_region,
        }
    }
}
