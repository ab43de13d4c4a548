use std::collections::HashMap;

/// Sentinel facet value meaning "no restriction on this field".
pub const ALL: &str = "all";

/// A record type that can appear in a filterable admin list.
///
/// `search_fields` designates the text fields matched by free-text search;
/// `facet` resolves a categorical field by name so the same filter machinery
/// works across every domain.
pub trait Listed {
    /// Fields matched (case-insensitively, as substrings) by free-text search.
    fn search_fields(&self) -> Vec<&str>;

    /// Value of the named categorical field, if this record type has one.
    fn facet(&self, field: &str) -> Option<String>;
}

/// Current filter selections for one admin list view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterConfig {
    /// Free-text search, matched against each record's search fields
    pub search: String,
    /// Facet selections keyed by field name; the value [`ALL`] disables one
    pub facets: HashMap<String, String>,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_facet(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.facets.insert(field.into(), value.into());
        self
    }
}

/// Decides whether one record belongs in the current view.
///
/// A record is included iff the search text occurs in at least one of its
/// search fields (vacuously true for an empty search) and every facet whose
/// selection is not [`ALL`] equals the record's field exactly. A facet naming
/// a field the record does not expose excludes the record.
pub fn matches_filter<R: Listed>(record: &R, config: &FilterConfig) -> bool {
    if !config.search.is_empty() {
        let needle = config.search.to_lowercase();
        let hit = record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));
        if !hit {
            return false;
        }
    }

    config.facets.iter().all(|(field, selected)| {
        selected == ALL || record.facet(field).as_deref() == Some(selected.as_str())
    })
}
