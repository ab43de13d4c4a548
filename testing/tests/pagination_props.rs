//! Property tests for the projector invariants.

use dashboard::{project, FilterConfig};
use proptest::prelude::*;
use testing::synthetic_members;

proptest! {
    #[test]
    fn total_pages_is_the_ceiling(total in 0usize..150, page_size in 1usize..40) {
        let members = synthetic_members(total, 0);
        let view = project(&members, &FilterConfig::new(), 1, page_size);

        let expected = if total == 0 { 1 } else { total.div_ceil(page_size) };
        prop_assert_eq!(view.total_pages, expected);
        prop_assert_eq!(view.total_filtered, total);
    }

    #[test]
    fn effective_page_is_always_in_range(
        total in 0usize..150,
        page_size in 1usize..40,
        requested in 0usize..500,
    ) {
        let members = synthetic_members(total, 0);
        let view = project(&members, &FilterConfig::new(), requested, page_size);

        prop_assert!(view.effective_page >= 1);
        prop_assert!(view.effective_page <= view.total_pages);
        prop_assert!(view.page_records.len() <= page_size);
    }

    #[test]
    fn filtering_never_reorders(total in 0usize..150, inactive in 0usize..150) {
        let inactive = inactive.min(total);
        let members = synthetic_members(total, inactive);
        let config = FilterConfig::new().with_facet("status", "Active");
        let view = project(&members, &config, 1, total.max(1));

        let projected: Vec<&str> = view.page_records.iter().map(|m| m.id.as_str()).collect();
        let expected: Vec<&str> = members
            .iter()
            .filter(|m| m.status == shared::MemberStatus::Active)
            .map(|m| m.id.as_str())
            .collect();
        prop_assert_eq!(projected, expected);
    }

    #[test]
    fn projection_never_mutates_the_store(
        total in 0usize..80,
        page in 0usize..20,
        page_size in 1usize..20,
    ) {
        let members = synthetic_members(total, total / 4);
        let before = members.clone();
        let config = FilterConfig::new().with_search("synthetic");

        let first = project(&members, &config, page, page_size);
        let second = project(&members, &config, page, page_size);

        prop_assert_eq!(&members, &before);
        prop_assert_eq!(first.total_filtered, second.total_filtered);
        prop_assert_eq!(first.effective_page, second.effective_page);
        let a: Vec<&str> = first.page_records.iter().map(|m| m.id.as_str()).collect();
        let b: Vec<&str> = second.page_records.iter().map(|m| m.id.as_str()).collect();
        prop_assert_eq!(a, b);
    }
}
