use forecourt_catalog::Catalog;
use forecourt_core::models::{ClosedRange, FilterCriteria, Selection, Vehicle};
use forecourt_filter::{predicate, FilterEngine};
use proptest::prelude::*;

const MAKES: &[&str] = &["Toyota", "Ford", "Volkswagen", "Hyundai", "Nissan"];
const MODELS: &[&str] = &["Corolla", "Focus", "Golf", "Tucson", "Leaf", "Puma"];
const ENGINES: &[&str] = &["1.0L", "1.5L", "1.8L Hybrid", "2.0L TDI"];
const FUELS: &[&str] = &["Petrol", "Diesel", "Hybrid", "Electric"];
const BODIES: &[&str] = &["Hatchback", "Saloon", "SUV", "Estate"];

fn arb_vehicle() -> impl Strategy<Value = Vehicle> {
    (
        prop::sample::select(MAKES),
        prop::sample::select(MODELS),
        2000i32..2026,
        prop::option::of(prop::sample::select(ENGINES)),
        prop::option::of(prop::sample::select(FUELS)),
        prop::option::of(prop::sample::select(BODIES)),
        5_000i64..60_000,
    )
        .prop_map(
            |(make, model, year, engine, fuel_type, body, standard_price)| Vehicle {
                make: make.to_string(),
                model: model.to_string(),
                year,
                engine: engine.map(str::to_string),
                fuel_type: fuel_type.map(str::to_string),
                body: body.map(str::to_string),
                standard_price,
                image_url: None,
            },
        )
}

fn arb_selection(pool: &'static [&'static str]) -> impl Strategy<Value = Selection> {
    prop_oneof![
        2 => Just(Selection::All),
        1 => prop::sample::select(pool).prop_map(|s| Selection::Only(s.to_string())),
    ]
}

fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
    (
        arb_selection(MAKES),
        arb_selection(MODELS),
        arb_selection(ENGINES),
        arb_selection(FUELS),
        arb_selection(BODIES),
        (1990i32..2030, 0i32..40).prop_map(|(lo, span)| ClosedRange::new(lo, lo + span)),
        (0i64..50_000, 0i64..60_000).prop_map(|(lo, span)| ClosedRange::new(lo, lo + span)),
    )
        .prop_map(
            |(make, model, engine, fuel_type, body, year_range, price_range)| FilterCriteria {
                make,
                model,
                engine,
                fuel_type,
                body,
                year_range,
                price_range,
            },
        )
}

proptest! {
    #[test]
    fn wildcard_criteria_return_the_whole_catalog_in_order(
        vehicles in prop::collection::vec(arb_vehicle(), 0..40)
    ) {
        let catalog = Catalog::from_vehicles(vehicles.clone());
        let result = FilterEngine::new(&catalog).apply(&FilterCriteria::default()).unwrap();
        prop_assert_eq!(result, vehicles);
    }

    #[test]
    fn result_is_an_ordered_subsequence_of_the_catalog(
        vehicles in prop::collection::vec(arb_vehicle(), 0..40),
        criteria in arb_criteria()
    ) {
        let catalog = Catalog::from_vehicles(vehicles.clone());
        let result = FilterEngine::new(&catalog).apply(&criteria).unwrap();
        prop_assert!(result.len() <= vehicles.len());
        // Every matched row is consumed from the catalog in order: no row
        // is invented, duplicated, or reordered.
        let mut rows = vehicles.iter();
        for matched in &result {
            prop_assert!(rows.any(|v| v == matched));
        }
    }

    #[test]
    fn every_returned_row_satisfies_the_criteria(
        vehicles in prop::collection::vec(arb_vehicle(), 0..40),
        criteria in arb_criteria()
    ) {
        let catalog = Catalog::from_vehicles(vehicles);
        let result = FilterEngine::new(&catalog).apply(&criteria).unwrap();
        for v in &result {
            prop_assert!(predicate::matches(v, &criteria));
        }
    }

    #[test]
    fn apply_is_idempotent(
        vehicles in prop::collection::vec(arb_vehicle(), 0..40),
        criteria in arb_criteria()
    ) {
        let catalog = Catalog::from_vehicles(vehicles);
        let engine = FilterEngine::new(&catalog);
        let first = engine.apply(&criteria).unwrap();
        let second = engine.apply(&criteria).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn inverted_year_ranges_are_always_rejected(
        vehicles in prop::collection::vec(arb_vehicle(), 0..20),
        lo in 1990i32..2030,
        span in 1i32..40
    ) {
        let catalog = Catalog::from_vehicles(vehicles);
        let criteria = FilterCriteria::default()
            .with_year_range(ClosedRange::new(lo + span, lo));
        let result = FilterEngine::new(&catalog).apply(&criteria);
        prop_assert!(result.is_err());
    }

    #[test]
    fn inverted_price_ranges_are_always_rejected(
        vehicles in prop::collection::vec(arb_vehicle(), 0..20),
        lo in 0i64..50_000,
        span in 1i64..20_000
    ) {
        let catalog = Catalog::from_vehicles(vehicles);
        let criteria = FilterCriteria::default()
            .with_price_range(ClosedRange::new(lo + span, lo));
        let result = FilterEngine::new(&catalog).apply(&criteria);
        prop_assert!(result.is_err());
    }
}
