//! Live matches view: the broadcast schedule with status and court facets.

use shared::{LiveMatch, MatchStatus, Result, SharedError};
use std::collections::HashMap;
use validator::Validate;

use crate::listing::filter::{FilterConfig, Listed};
use crate::listing::project::{project, Projection};
use crate::listing::summary::{count_where, group_count};
use crate::store::{Keyed, RecordStore};

impl Keyed for LiveMatch {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Listed for LiveMatch {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.player1, &self.player2]
    }

    fn facet(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.to_string()),
            "court" => Some(self.court.clone()),
            _ => None,
        }
    }
}

/// The broadcast schedule behind the Live Matches admin view.
#[derive(Debug, Clone, Default)]
pub struct MatchSchedule {
    store: RecordStore<LiveMatch>,
}

impl MatchSchedule {
    pub fn seed(matches: Vec<LiveMatch>) -> Result<Self> {
        for m in &matches {
            m.validate()?;
        }
        Ok(Self {
            store: RecordStore::seed(matches)?,
        })
    }

    pub fn records(&self) -> &[LiveMatch] {
        self.store.records()
    }

    pub fn page(
        &self,
        config: &FilterConfig,
        page: usize,
        page_size: usize,
    ) -> Projection<'_, LiveMatch> {
        project(self.store.records(), config, page, page_size)
    }

    pub fn add(&mut self, m: LiveMatch) -> Result<()> {
        m.validate()?;
        self.store.create(m)
    }

    pub fn update(&mut self, id: &str, patch: impl FnOnce(&mut LiveMatch)) -> Result<()> {
        let mut edited = match self.store.get(id) {
            Some(m) => m.clone(),
            None => return Err(SharedError::NotFound(id.to_string())),
        };
        patch(&mut edited);
        edited.validate()?;
        self.store.update(id, |m| *m = edited)
    }

    pub fn remove(&mut self, id: &str) -> Result<LiveMatch> {
        self.store.delete(id)
    }

    /// Number of matches currently on air.
    pub fn live_count(&self) -> usize {
        count_where(self.store.records(), |m| m.status == MatchStatus::Live)
    }

    /// Match count per broadcast status, by status display name.
    pub fn status_breakdown(&self) -> HashMap<String, usize> {
        group_count(self.store.records(), |m| m.status.to_string())
    }
}
