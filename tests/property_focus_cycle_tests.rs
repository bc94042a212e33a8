use proptest::prelude::*;
use timeline_rs::core::TimeScale;
use timeline_rs::interaction::DateFieldFocus;

proptest! {
    #[test]
    fn advancing_forward_max_tab_times_returns_to_start(
        start in 1u8..=5,
        has_subdaily in any::<bool>()
    ) {
        let max_tab = TimeScale::max_tab(has_subdaily);
        let start = start.min(max_tab);

        let mut focus = DateFieldFocus::default();
        focus.focus(start);
        for _ in 0..max_tab {
            let current = i32::from(focus.tab().expect("tab set"));
            focus.advance(current + 1, has_subdaily);
        }

        prop_assert_eq!(focus.tab(), Some(start));
    }

    #[test]
    fn retreating_backward_max_tab_times_returns_to_start(
        start in 1u8..=5,
        has_subdaily in any::<bool>()
    ) {
        let max_tab = TimeScale::max_tab(has_subdaily);
        let start = start.min(max_tab);

        let mut focus = DateFieldFocus::default();
        focus.focus(start);
        for _ in 0..max_tab {
            let current = i32::from(focus.tab().expect("tab set"));
            focus.advance(current - 1, has_subdaily);
        }

        prop_assert_eq!(focus.tab(), Some(start));
    }

    #[test]
    fn advance_always_lands_in_range(
        start in proptest::option::of(0u8..=20),
        requested in any::<i32>(),
        has_subdaily in any::<bool>()
    ) {
        let mut focus = DateFieldFocus::default();
        if let Some(tab) = start {
            focus.focus(tab);
        }

        let next = focus.advance(requested, has_subdaily);
        let max_tab = TimeScale::max_tab(has_subdaily);
        prop_assert!(next >= 1 && next <= max_tab);
        prop_assert_eq!(focus.tab(), Some(next));
    }
}
