use folio_page::Paginator;
use proptest::prelude::*;

// Paginators that pass validation: at least one full page, and the current
// page within the truncated page count.
fn valid_paginator() -> impl Strategy<Value = Paginator> {
    (1i64..=1_000, 1i64..=100_000)
        .prop_filter("at least one full page", |(epp, tot)| tot >= epp)
        .prop_flat_map(|(epp, tot)| (Just(epp), Just(tot), 1..=tot / epp))
        .prop_map(|(epp, tot, cur)| Paginator::new(epp, tot, cur))
}

// Positive sizes small enough to walk every page.
fn small_collection() -> impl Strategy<Value = (i64, i64)> {
    (1i64..=50, 1i64..=500)
}

fn any_paginator() -> impl Strategy<Value = Paginator> {
    (any::<i64>(), any::<i64>(), any::<i64>())
        .prop_map(|(epp, tot, cur)| Paginator::new(epp, tot, cur))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn valid_paginators_validate(paginator in valid_paginator()) {
        prop_assert_eq!(paginator.validate(), Ok(()));
    }

    #[test]
    fn valid_paginators_have_full_pages(paginator in valid_paginator()) {
        let entries = paginator.entries_on_this_page();

        prop_assert_eq!(entries, paginator.last() - paginator.first() + 1);
        prop_assert_eq!(entries, paginator.entries_per_page);
        prop_assert!(paginator.last() <= paginator.total_entries);
    }

    #[test]
    fn pages_cover_every_entry_once((epp, tot) in small_collection()) {
        let mut expected_first = 1;
        let mut total = 0;

        for page in Paginator::new(epp, tot, 1).pages() {
            let paginator = Paginator::new(epp, tot, page);

            prop_assert_eq!(paginator.first(), expected_first);
            prop_assert!(paginator.entries_on_this_page() >= 1);
            prop_assert!(paginator.entries_on_this_page() <= epp);

            expected_first = paginator.last() + 1;
            total += paginator.entries_on_this_page();
        }

        prop_assert_eq!(total, tot);
    }

    #[test]
    fn neighbors_stay_in_bounds(paginator in valid_paginator()) {
        let prev = paginator.prev_page();
        let next = paginator.next_page();

        prop_assert!(prev >= paginator.first_page());
        prop_assert!(prev <= paginator.current_page);
        prop_assert!(next >= paginator.current_page);
        prop_assert!(next <= paginator.last_page());
    }

    #[test]
    fn queries_never_panic(paginator in any_paginator()) {
        let _ = paginator.validate();
        let _ = paginator.first();
        let _ = paginator.last();
        let _ = paginator.entries_on_this_page();
        let _ = paginator.skipped();
        let _ = paginator.next_page();
        let _ = paginator.is_last_page();

        prop_assert!(paginator.last_page() >= 1);
        prop_assert!(paginator.prev_page() >= 1);
        prop_assert!(paginator.skipped() >= 0);
    }

    #[test]
    fn display_parses_back(paginator in any_paginator()) {
        prop_assert_eq!(paginator.to_string().parse::<Paginator>(), Ok(paginator));
    }
}
