use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A scheduled or in-progress match on the live schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LiveMatch {
    /// Store-unique identifier (format: "match-{n}")
    pub id: String,

    /// Billing title, e.g. "Championship Finals"
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// First competitor
    #[validate(length(min = 1, max = 100))]
    pub player1: String,

    /// Second competitor
    #[validate(length(min = 1, max = 100))]
    pub player2: String,

    /// Broadcast state of the match
    pub status: MatchStatus,

    /// Local start time at the venue
    #[serde(rename = "scheduledTime")]
    pub scheduled_time: NaiveDateTime,

    /// Court the match is played on
    #[validate(length(min = 1, max = 50))]
    pub court: String,
}

/// Broadcast state of a scheduled match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    Live,
    Upcoming,
    Completed,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Live => write!(f, "Live"),
            MatchStatus::Upcoming => write!(f, "Upcoming"),
            MatchStatus::Completed => write!(f, "Completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_match_title_cannot_be_empty() {
        let m = LiveMatch {
            id: "match-1".to_string(),
            title: String::new(),
            player1: "Ben Johns".to_string(),
            player2: "Tyson McGuffin".to_string(),
            status: MatchStatus::Live,
            scheduled_time: NaiveDate::from_ymd_opt(2024, 12, 1)
                .unwrap()
                .and_hms_opt(14, 0, 0)
                .unwrap(),
            court: "Center Court".to_string(),
        };
        assert!(m.validate().is_err());
    }
}
