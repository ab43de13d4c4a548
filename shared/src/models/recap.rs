use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    // "M:SS" or "MM:SS", e.g. "8:22" or "10:34"
    static ref DURATION_REGEX: Regex = Regex::new(r"^\d{1,2}:[0-5]\d$").unwrap();
}

/// A published match recap video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GameRecap {
    /// Store-unique identifier (format: "recap-{n}")
    pub id: String,

    /// Video title
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// Thumbnail image URL
    #[validate(url)]
    pub thumbnail_url: String,

    /// Video length as "M:SS" or "MM:SS"
    #[validate(regex = "DURATION_REGEX")]
    pub duration: String,

    /// Total view count
    pub views: u64,

    /// Date the recap was published
    #[serde(rename = "uploadDate")]
    pub upload_date: NaiveDate,

    /// Short teaser shown under the title
    #[validate(length(min = 1, max = 500))]
    pub description: String,
}
