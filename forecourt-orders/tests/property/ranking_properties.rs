use chrono::{Days, NaiveDate};
use forecourt_core::models::Order;
use forecourt_orders::{top_selling, OrderLog};
use proptest::prelude::*;

const CARS: &[&str] = &[
    "Toyota Corolla",
    "Ford Focus",
    "Volkswagen Golf",
    "Hyundai Tucson",
    "Ford Puma",
    "Nissan Leaf",
];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn arb_order() -> impl Strategy<Value = Order> {
    (prop::sample::select(CARS), 0u64..60).prop_map(|(name, offset)| {
        Order::new(name, base_date().checked_add_days(Days::new(offset)).unwrap())
    })
}

fn arb_window() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (0u64..60, 0u64..30).prop_map(|(start_off, span)| {
        let start = base_date().checked_add_days(Days::new(start_off)).unwrap();
        let end = start.checked_add_days(Days::new(span)).unwrap();
        (start, end)
    })
}

proptest! {
    #[test]
    fn ranking_is_bounded_positive_and_non_increasing(
        orders in prop::collection::vec(arb_order(), 0..80),
        (start, end) in arb_window(),
        limit in 0usize..10
    ) {
        let log = OrderLog::from_orders(orders);
        let top = top_selling(&log, start, end, limit).unwrap();
        prop_assert!(top.len() <= limit);
        for pair in top.windows(2) {
            prop_assert!(pair[0].order_count >= pair[1].order_count);
        }
        for entry in &top {
            prop_assert!(entry.order_count > 0);
        }
    }

    #[test]
    fn counts_conserve_the_windowed_orders(
        orders in prop::collection::vec(arb_order(), 0..80),
        (start, end) in arb_window()
    ) {
        let log = OrderLog::from_orders(orders.clone());
        let top = top_selling(&log, start, end, usize::MAX).unwrap();
        let counted: u64 = top.iter().map(|e| e.order_count).sum();
        let windowed = orders
            .iter()
            .filter(|o| o.order_date >= start && o.order_date <= end)
            .count() as u64;
        prop_assert_eq!(counted, windowed);
    }

    #[test]
    fn single_day_window_counts_only_that_day(
        orders in prop::collection::vec(arb_order(), 0..80),
        day_off in 0u64..60
    ) {
        let day = base_date().checked_add_days(Days::new(day_off)).unwrap();
        let log = OrderLog::from_orders(orders.clone());
        let top = top_selling(&log, day, day, usize::MAX).unwrap();
        let counted: u64 = top.iter().map(|e| e.order_count).sum();
        let on_day = orders.iter().filter(|o| o.order_date == day).count() as u64;
        prop_assert_eq!(counted, on_day);
    }

    #[test]
    fn ranking_is_deterministic(
        orders in prop::collection::vec(arb_order(), 0..80),
        (start, end) in arb_window(),
        limit in 0usize..10
    ) {
        let log = OrderLog::from_orders(orders);
        let first = top_selling(&log, start, end, limit).unwrap();
        let second = top_selling(&log, start, end, limit).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn inverted_windows_are_always_rejected(
        orders in prop::collection::vec(arb_order(), 0..20),
        start_off in 1u64..60,
        back in 1u64..30
    ) {
        let start = base_date().checked_add_days(Days::new(start_off)).unwrap();
        let end = start.checked_sub_days(Days::new(back.min(start_off))).unwrap();
        prop_assume!(start > end);
        let log = OrderLog::from_orders(orders);
        prop_assert!(top_selling(&log, start, end, 10).is_err());
    }
}
