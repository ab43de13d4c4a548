//! Team admin view: staff accounts with a role facet.

use shared::{Result, SharedError, TeamMember};
use std::collections::HashMap;
use validator::Validate;

use crate::listing::filter::{FilterConfig, Listed};
use crate::listing::project::{project, Projection};
use crate::listing::summary::group_count;
use crate::store::{Keyed, RecordStore};

impl Keyed for TeamMember {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Listed for TeamMember {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn facet(&self, field: &str) -> Option<String> {
        match field {
            "role" => Some(self.role.to_string()),
            _ => None,
        }
    }
}

/// The staff roster behind the Team admin view.
#[derive(Debug, Clone, Default)]
pub struct TeamRoster {
    store: RecordStore<TeamMember>,
}

impl TeamRoster {
    pub fn seed(staff: Vec<TeamMember>) -> Result<Self> {
        for member in &staff {
            member.validate()?;
        }
        Ok(Self {
            store: RecordStore::seed(staff)?,
        })
    }

    pub fn records(&self) -> &[TeamMember] {
        self.store.records()
    }

    pub fn page(
        &self,
        config: &FilterConfig,
        page: usize,
        page_size: usize,
    ) -> Projection<'_, TeamMember> {
        project(self.store.records(), config, page, page_size)
    }

    pub fn add(&mut self, member: TeamMember) -> Result<()> {
        member.validate()?;
        self.store.create(member)
    }

    pub fn update(&mut self, id: &str, patch: impl FnOnce(&mut TeamMember)) -> Result<()> {
        let mut edited = match self.store.get(id) {
            Some(member) => member.clone(),
            None => return Err(SharedError::NotFound(id.to_string())),
        };
        patch(&mut edited);
        edited.validate()?;
        self.store.update(id, |member| *member = edited)
    }

    pub fn remove(&mut self, id: &str) -> Result<TeamMember> {
        self.store.delete(id)
    }

    /// Staff count per role, by role display name.
    pub fn role_breakdown(&self) -> HashMap<String, usize> {
        group_count(self.store.records(), |m| m.role.to_string())
    }
}
