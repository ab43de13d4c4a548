//! List management core shared by every admin view.
//!
//! The generic pieces live in [`listing`] and [`store`]; each admin view gets
//! a thin service module (`members`, `staff`, `tiers`, `matches`, `recaps`)
//! that wires its record type into them. [`insights`] derives the dashboard
//! charts from the same stores.

pub mod listing {
    pub mod filter;
    pub mod project;
    pub mod summary;
}

pub mod store;

pub mod insights;
pub mod matches;
pub mod members;
pub mod recaps;
pub mod staff;
pub mod tiers;

pub use listing::filter::{matches_filter, FilterConfig, Listed, ALL};
pub use listing::project::{project, Projection};
pub use store::{new_record_id, Keyed, RecordStore};
