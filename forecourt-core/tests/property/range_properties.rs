use forecourt_core::models::{ClosedRange, Selection};
use proptest::prelude::*;

proptest! {
    #[test]
    fn contains_implies_not_inverted(
        min in -5000i32..5000,
        max in -5000i32..5000,
        x in -5000i32..5000,
    ) {
        let range = ClosedRange::new(min, max);
        if range.contains(x) {
            prop_assert!(!range.is_inverted());
        }
    }

    #[test]
    fn endpoints_are_members_of_any_proper_range(min in -5000i32..5000, max in -5000i32..5000) {
        prop_assume!(min <= max);
        let range = ClosedRange::new(min, max);
        prop_assert!(range.contains(min));
        prop_assert!(range.contains(max));
    }

    #[test]
    fn inverted_range_contains_nothing(
        min in -5000i32..5000,
        max in -5000i32..5000,
        x in -5000i32..5000,
    ) {
        prop_assume!(min > max);
        let range = ClosedRange::new(min, max);
        prop_assert!(!range.contains(x));
    }

    #[test]
    fn selection_only_matches_exactly_itself(
        value in "[A-Za-z0-9 ]{1,20}",
        other in "[A-Za-z0-9 ]{1,20}",
    ) {
        let pick = Selection::Only(value.clone());
        prop_assert!(pick.admits(&value));
        prop_assert_eq!(pick.admits(&other), value == other);
        prop_assert!(!pick.admits_opt(None));
    }

    #[test]
    fn selection_all_admits_everything(value in ".{0,40}") {
        prop_assert!(Selection::All.admits(&value));
        prop_assert!(Selection::All.admits_opt(Some(value.as_str())));
        prop_assert!(Selection::All.admits_opt(None));
    }
}
