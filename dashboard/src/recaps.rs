//! Game recaps view: the published video library.

use serde::{Deserialize, Serialize};
use shared::{GameRecap, Result, SharedError};
use validator::Validate;

use crate::listing::filter::{FilterConfig, Listed};
use crate::listing::project::{project, Projection};
use crate::listing::summary::average;
use crate::store::{Keyed, RecordStore};

impl Keyed for GameRecap {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Listed for GameRecap {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }

    // Recaps carry no categorical fields; search is the only filter.
    fn facet(&self, _field: &str) -> Option<String> {
        None
    }
}

/// View-count roll-up for the library header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSummary {
    pub total_views: u64,
    /// Mean views per recap (0.0 with an empty library)
    pub average_views: f64,
}

/// The video library behind the Game Recaps admin view.
#[derive(Debug, Clone, Default)]
pub struct RecapLibrary {
    store: RecordStore<GameRecap>,
}

impl RecapLibrary {
    pub fn seed(recaps: Vec<GameRecap>) -> Result<Self> {
        for recap in &recaps {
            recap.validate()?;
        }
        Ok(Self {
            store: RecordStore::seed(recaps)?,
        })
    }

    pub fn records(&self) -> &[GameRecap] {
        self.store.records()
    }

    pub fn page(
        &self,
        config: &FilterConfig,
        page: usize,
        page_size: usize,
    ) -> Projection<'_, GameRecap> {
        project(self.store.records(), config, page, page_size)
    }

    pub fn add(&mut self, recap: GameRecap) -> Result<()> {
        recap.validate()?;
        self.store.create(recap)
    }

    pub fn update(&mut self, id: &str, patch: impl FnOnce(&mut GameRecap)) -> Result<()> {
        let mut edited = match self.store.get(id) {
            Some(recap) => recap.clone(),
            None => return Err(SharedError::NotFound(id.to_string())),
        };
        patch(&mut edited);
        edited.validate()?;
        self.store.update(id, |recap| *recap = edited)
    }

    pub fn remove(&mut self, id: &str) -> Result<GameRecap> {
        self.store.delete(id)
    }

    pub fn view_summary(&self) -> ViewSummary {
        let recaps = self.store.records();
        ViewSummary {
            total_views: recaps.iter().map(|r| r.views).sum(),
            average_views: average(recaps, |r| r.views as f64),
        }
    }
}
