use crate::error::Result;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A membership pricing tier sold on the platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MembershipTier {
    /// Store-unique identifier (format: "tier-{n}")
    pub id: String,

    /// Tier display name, e.g. "Rally Pass"
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Monthly price in USD
    #[validate(range(min = 0.01))]
    pub price: f64,

    /// Marketing bullet points shown on the pricing page
    #[validate(length(min = 1, message = "a tier needs at least one feature"))]
    pub features: Vec<String>,

    /// Current number of subscribers on this tier
    #[serde(rename = "subscriberCount")]
    pub subscriber_count: u32,

    /// Revenue attributed to this tier for the current month, in USD
    #[serde(rename = "monthlyRevenue")]
    #[validate(range(min = 0.0))]
    pub monthly_revenue: f64,

    /// Whether the tier is currently offered to new subscribers
    pub active: bool,
}

impl MembershipTier {
    /// Creates a new tier with validation
    pub fn new(
        id: String,
        name: String,
        price: f64,
        features: Vec<String>,
        subscriber_count: u32,
        monthly_revenue: f64,
        active: bool,
    ) -> Result<Self> {
        let tier = Self {
            id,
            name,
            price,
            features,
            subscriber_count,
            monthly_revenue,
            active,
        };
        tier.validate()?;
        Ok(tier)
    }
}
