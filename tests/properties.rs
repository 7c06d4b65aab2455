//! Property tests for table ordering and windowing

use proptest::prelude::*;
use tareas_cli::domain::{
    order, visible_window, FilterCriteria, OrderPolicy, Page, PageSize, Priority, Record,
    RecordFields, State,
};

fn priority() -> impl Strategy<Value = Priority> {
    prop::sample::select(vec![
        Priority::Urgente,
        Priority::Normal,
        Priority::Bajo,
        Priority::Other("Lista".to_string()),
    ])
}

fn state() -> impl Strategy<Value = State> {
    prop::sample::select(vec![State::Iniciada, State::EnProceso, State::Terminada])
}

fn policy() -> impl Strategy<Value = OrderPolicy> {
    prop::sample::select(vec![OrderPolicy::DurationFirst, OrderPolicy::CompletionFirst])
}

fn page_size() -> impl Strategy<Value = PageSize> {
    prop::sample::select(PageSize::ALL.to_vec())
}

/// Records named `r{index}` with a small set of durations so ties are common
fn records(max: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        (prop::sample::select(vec![5.0, 10.0, 15.0, 30.0]), priority(), state()),
        0..max,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (duration, priority, state))| {
                Record::new_task(RecordFields {
                    name: format!("r{}", i),
                    description: None,
                    duration,
                    priority,
                    state,
                })
            })
            .collect()
    })
}

fn index_of(record: &Record) -> usize {
    record.name[1..].parse().unwrap()
}

fn sorted_names(records: &[Record]) -> Vec<String> {
    let mut names: Vec<String> = records.iter().map(|r| r.name.clone()).collect();
    names.sort();
    names
}

proptest! {
    #[test]
    fn ordering_is_idempotent(items in records(30), policy in policy()) {
        let once = order(&items, policy);
        prop_assert_eq!(order(&once, policy), once);
    }

    #[test]
    fn ordering_is_a_permutation(items in records(30), policy in policy()) {
        let sorted = order(&items, policy);
        prop_assert_eq!(sorted_names(&sorted), sorted_names(&items));
    }

    #[test]
    fn unique_durations_come_out_ascending(durations in prop::collection::btree_set(1u32..1000, 0..20)) {
        // Reverse so the input is never already sorted
        let items: Vec<Record> = durations
            .iter()
            .rev()
            .map(|&d| Record::new_task(RecordFields {
                name: format!("r{}", d),
                description: None,
                duration: f64::from(d),
                priority: Priority::Normal,
                state: State::Iniciada,
            }))
            .collect();

        let sorted = order(&items, OrderPolicy::DurationFirst);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].duration < pair[1].duration);
        }
    }

    #[test]
    fn equal_keys_keep_input_order(items in records(30), policy in policy()) {
        let sorted = order(&items, policy);
        for pair in sorted.windows(2) {
            if policy.compare(&pair[0], &pair[1]) == std::cmp::Ordering::Equal {
                prop_assert!(index_of(&pair[0]) < index_of(&pair[1]));
            }
        }
    }

    #[test]
    fn empty_criteria_count_everything(items in records(30)) {
        let window = visible_window(&items, &FilterCriteria::default(), Page::new(0, PageSize::TwentyFive));
        prop_assert_eq!(window.total, items.len());
    }

    #[test]
    fn window_is_a_bounded_subset(
        items in records(40),
        search in prop::sample::select(vec!["", "r1", "R2", "x"]),
        priority in prop::option::of(priority()),
        state in prop::option::of(state()),
        index in 0usize..10,
        size in page_size(),
    ) {
        let criteria = FilterCriteria {
            search: search.to_string(),
            priority,
            state,
        };
        let window = visible_window(&items, &criteria, Page::new(index, size));

        prop_assert!(window.items.len() <= size.get());
        prop_assert!(window.total <= items.len());
        for item in &window.items {
            prop_assert!(items.contains(item));
            prop_assert!(criteria.matches(item));
        }

        let expected = window.total.saturating_sub(index * size.get()).min(size.get());
        prop_assert_eq!(window.items.len(), expected);
    }

    #[test]
    fn criteria_compose_as_and(
        items in records(30),
        priority in priority(),
        state in state(),
    ) {
        let both = FilterCriteria {
            search: String::new(),
            priority: Some(priority.clone()),
            state: Some(state.clone()),
        };
        let page = Page::new(0, PageSize::TwentyFive);

        let expected = items
            .iter()
            .filter(|r| r.priority == priority && r.state == state)
            .count();
        prop_assert_eq!(visible_window(&items, &both, page).total, expected);
    }
}
