use chrono::{NaiveDate, NaiveDateTime};
use shared::{
    GameRecap, LiveMatch, MatchStatus, Member, MemberStatus, MembershipTier, MonthlyRevenue,
    MonthlyUsers, PlanTier, Region, StaffRole, TeamMember,
};

/// Display names for the 52 seeded members, in roster order.
const MEMBER_NAMES: [&str; 52] = [
    "Sarah Johnson", "Michael Chen", "Emily Rodriguez", "James Wilson", "Amanda Lee",
    "David Brown", "Jessica Taylor", "Christopher Martinez", "Lauren Anderson", "Daniel Kim",
    "Rachel White", "Matthew Garcia", "Ashley Thompson", "Ryan Moore", "Jennifer Martin",
    "Kevin Jackson", "Michelle Lee", "Brandon Hall", "Stephanie Allen", "Justin Young",
    "Nicole Wright", "Eric Lopez", "Megan Hill", "Andrew Scott", "Samantha Green",
    "Joshua Adams", "Christina Baker", "Tyler Nelson", "Rebecca Carter", "Jonathan Mitchell",
    "Melissa Perez", "Nicholas Roberts", "Brittany Turner", "Alexander Phillips", "Amber Campbell",
    "Patrick Parker", "Danielle Evans", "Steven Edwards", "Heather Collins", "Timothy Stewart",
    "Kimberly Sanchez", "Brian Morris", "Angela Rogers", "Jacob Reed", "Kelly Cook",
    "Nathan Morgan", "Laura Bell", "Aaron Murphy", "Maria Bailey", "Kyle Rivera",
    "Hannah Cooper", "Zachary Richardson",
];

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("static seed date")
}

fn datetime(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, 0, 0)
        .expect("static seed time")
}

/// The 52-member roster: tiers cycle over three plans, regions over five,
/// and every seventh member starting with the first is Inactive.
pub fn seed_members() -> Vec<Member> {
    (0..52)
        .map(|i| Member {
            id: format!("member-{}", i + 1),
            name: MEMBER_NAMES[i % 52].to_string(),
            email: format!("user{}@example.com", i + 1),
            avatar_url: format!("https://api.dicebear.com/7.x/avataaars/svg?seed={i}"),
            tier: PlanTier::ALL_TIERS[i % 3],
            join_date: date(2024, (i as u32 / 10) + 1, (i as u32 % 28) + 1),
            region: Region::ALL_REGIONS[i % 5],
            status: if i % 7 == 0 {
                MemberStatus::Inactive
            } else {
                MemberStatus::Active
            },
            last_active: date(2024, 12, (i as u32 % 30) + 1),
        })
        .collect()
}

/// The five dashboard staff accounts.
pub fn seed_team() -> Vec<TeamMember> {
    let staff = [
        ("team-1", "Admin User", "admin@pickleball.com", "admin", StaffRole::SuperAdmin, date(2024, 12, 1)),
        ("team-2", "Jane Cooper", "jane.cooper@pickleball.com", "jane", StaffRole::Admin, date(2024, 12, 1)),
        ("team-3", "Mark Stevens", "mark.stevens@pickleball.com", "mark", StaffRole::ContentManager, date(2024, 11, 30)),
        ("team-4", "Lisa Anderson", "lisa.anderson@pickleball.com", "lisa", StaffRole::Moderator, date(2024, 11, 29)),
        ("team-5", "Tom Harris", "tom.harris@pickleball.com", "tom", StaffRole::Admin, date(2024, 11, 30)),
    ];
    staff
        .into_iter()
        .map(|(id, name, email, seed, role, last_active)| TeamMember {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            avatar_url: format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}"),
            role,
            last_active,
        })
        .collect()
}

/// The three-tier pricing catalog.
pub fn seed_tiers() -> Vec<MembershipTier> {
    vec![
        MembershipTier {
            id: "tier-1".to_string(),
            name: "Rally Pass".to_string(),
            price: 9.99,
            features: vec![
                "Access to live match streams".to_string(),
                "Basic match highlights".to_string(),
                "Community forum access".to_string(),
                "Monthly newsletter".to_string(),
            ],
            subscriber_count: 245,
            monthly_revenue: 2447.55,
            active: true,
        },
        MembershipTier {
            id: "tier-2".to_string(),
            name: "Match Point".to_string(),
            price: 19.99,
            features: vec![
                "All Rally Pass features".to_string(),
                "HD quality streams".to_string(),
                "Full match replays".to_string(),
                "Exclusive player interviews".to_string(),
                "Priority support".to_string(),
                "Member-only events".to_string(),
            ],
            subscriber_count: 182,
            monthly_revenue: 3638.18,
            active: true,
        },
        MembershipTier {
            id: "tier-3".to_string(),
            name: "Tour Insider".to_string(),
            price: 34.99,
            features: vec![
                "All Match Point features".to_string(),
                "4K ultra HD streams".to_string(),
                "Behind-the-scenes content".to_string(),
                "Early access to tickets".to_string(),
                "Exclusive merchandise discounts".to_string(),
                "Meet & greet opportunities".to_string(),
                "VIP tournament access".to_string(),
            ],
            subscriber_count: 98,
            monthly_revenue: 3429.02,
            active: true,
        },
    ]
}

/// The current broadcast schedule.
pub fn seed_matches() -> Vec<LiveMatch> {
    vec![
        LiveMatch {
            id: "match-1".to_string(),
            title: "Championship Finals".to_string(),
            player1: "Ben Johns".to_string(),
            player2: "Tyson McGuffin".to_string(),
            status: MatchStatus::Live,
            scheduled_time: datetime(2024, 12, 1, 14),
            court: "Center Court".to_string(),
        },
        LiveMatch {
            id: "match-2".to_string(),
            title: "Women's Semi-Finals".to_string(),
            player1: "Anna Leigh Waters".to_string(),
            player2: "Catherine Parenteau".to_string(),
            status: MatchStatus::Upcoming,
            scheduled_time: datetime(2024, 12, 1, 16),
            court: "Court 1".to_string(),
        },
        LiveMatch {
            id: "match-3".to_string(),
            title: "Mixed Doubles Final".to_string(),
            player1: "Riley Newman".to_string(),
            player2: "Matt Wright".to_string(),
            status: MatchStatus::Upcoming,
            scheduled_time: datetime(2024, 12, 1, 18),
            court: "Center Court".to_string(),
        },
    ]
}

/// The published recap videos.
pub fn seed_recaps() -> Vec<GameRecap> {
    vec![
        GameRecap {
            id: "recap-1".to_string(),
            title: "Incredible Rally at Championship".to_string(),
            thumbnail_url: "https://images.unsplash.com/photo-1554068865-24cecd4e34b8?w=400&h=300&fit=crop".to_string(),
            duration: "10:34".to_string(),
            views: 15234,
            upload_date: date(2024, 11, 28),
            description: "Watch the most intense rally of the tournament".to_string(),
        },
        GameRecap {
            id: "recap-2".to_string(),
            title: "Women's Doubles Highlights".to_string(),
            thumbnail_url: "https://images.unsplash.com/photo-1626224583764-f87db24ac4ea?w=400&h=300&fit=crop".to_string(),
            duration: "8:22".to_string(),
            views: 12891,
            upload_date: date(2024, 11, 27),
            description: "Best moments from the women's doubles match".to_string(),
        },
        GameRecap {
            id: "recap-3".to_string(),
            title: "Underdog Victory Story".to_string(),
            thumbnail_url: "https://images.unsplash.com/photo-1622279457486-62dcc4a431d6?w=400&h=300&fit=crop".to_string(),
            duration: "12:15".to_string(),
            views: 18456,
            upload_date: date(2024, 11, 26),
            description: "An inspiring comeback victory".to_string(),
        },
    ]
}

/// Six months of member-count growth for the Insights line chart.
pub fn user_growth() -> Vec<MonthlyUsers> {
    [
        ("Jun", 120), ("Jul", 180), ("Aug", 240), ("Sep", 320), ("Oct", 410), ("Nov", 525),
    ]
    .into_iter()
    .map(|(month, users)| MonthlyUsers {
        month: month.to_string(),
        users,
    })
    .collect()
}

/// Six months of revenue for the Insights trend chart.
pub fn revenue_trend() -> Vec<MonthlyRevenue> {
    [
        ("Jun", 3850.0), ("Jul", 5240.0), ("Aug", 6820.0), ("Sep", 7950.0), ("Oct", 8730.0), ("Nov", 9514.0),
    ]
    .into_iter()
    .map(|(month, revenue)| MonthlyRevenue {
        month: month.to_string(),
        revenue,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use validator::Validate;

    #[test]
    fn test_member_seed_shape() {
        let members = seed_members();
        assert_eq!(members.len(), 52);

        // Every seventh member starting with the first is inactive
        let inactive = members
            .iter()
            .filter(|m| m.status == MemberStatus::Inactive)
            .count();
        assert_eq!(inactive, 8);
        assert_eq!(members[0].status, MemberStatus::Inactive);
        assert_eq!(members[7].status, MemberStatus::Inactive);
        assert_eq!(members[1].status, MemberStatus::Active);
    }

    #[test]
    fn test_all_seed_records_validate() {
        for m in seed_members() {
            m.validate().unwrap();
        }
        for s in seed_team() {
            s.validate().unwrap();
        }
        for t in seed_tiers() {
            t.validate().unwrap();
        }
        for m in seed_matches() {
            m.validate().unwrap();
        }
        for r in seed_recaps() {
            r.validate().unwrap();
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let members = seed_members();
        let mut ids: Vec<&str> = members.iter().map(|m| m.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), members.len());
    }

    #[test]
    fn test_generators_are_deterministic() {
        assert_eq!(seed_members(), seed_members());
        assert_eq!(seed_tiers(), seed_tiers());
    }

    #[test]
    fn test_trend_series_have_six_points() {
        assert_eq!(user_growth().len(), 6);
        assert_eq!(revenue_trend().len(), 6);
        assert_eq!(user_growth().last().unwrap().users, 525);
    }
}
