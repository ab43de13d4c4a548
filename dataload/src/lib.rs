//! Deterministic seed datasets for the admin dashboard.
//!
//! Every generator returns the same records on every call, so tests and the
//! seed binary see identical data. Stores are seeded once at view mount;
//! nothing here touches a store after that.

pub mod seed;

pub use seed::{
    revenue_trend, seed_matches, seed_members, seed_recaps, seed_team, seed_tiers, user_growth,
};
