//! Property tests for education module
//!
//! Tuition monotonicity, faction discount factor, ineligibility reporting.

use proptest::prelude::*;
use serde_json::json;

use crate::education::academy::tests::{academy_json, campaign};
use crate::education::Academy;
use crate::personnel::Person;

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

fn academy_with(patch: serde_json::Value) -> Academy {
    let mut value = academy_json();
    if let (Some(target), Some(fields)) = (value.as_object_mut(), patch.as_object()) {
        for (key, field) in fields {
            target.insert(key.clone(), field.clone());
        }
    }
    serde_json::from_value(value).unwrap()
}

fn faction_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("LA"),
        Just("FS"),
        Just("DC"),
        Just("FWL"),
        Just("CC"),
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Adjusted tuition never decreases as the education level rises
    #[test]
    fn prop_tuition_monotonic(
        tuition in 0..=100_000i32,
        tier_min in 0..=10i32,
        level in -10..=20i32
    ) {
        let academy = academy_with(json!({ "tuition": tuition }));
        let lower = academy.tuition_adjusted(tier_min, level);
        let higher = academy.tuition_adjusted(tier_min, level + 1);
        prop_assert!(lower <= higher, "{} > {} at level {}", lower, higher, level);
    }

    /// Outsiders pay full price, members get the truncated percentage
    #[test]
    fn prop_discount_factor(
        discount in 0..=100i32,
        academy_faction in faction_strategy(),
        person_faction in faction_strategy()
    ) {
        let academy = academy_with(json!({
            "factionDiscount": discount,
            "academyFaction": academy_faction,
        }));
        let person = Person::new(1, "Cadet", person_faction);
        let factor = academy.faction_discount_adjusted(&campaign(), &person);

        if academy_faction == person_faction {
            prop_assert_eq!(factor, (discount / 100) as f64);
        } else {
            prop_assert_eq!(factor, 1.0);
        }
    }

    /// Anyone below the minimum education level is reported ineligible
    #[test]
    fn prop_ineligible_below_minimum(
        minimum in 0..=8i32,
        gap in 1..=8i32,
        course in 0..=1usize
    ) {
        let academy = academy_with(json!({
            "educationLevelMin": minimum,
            "educationLevelMax": minimum + 2,
        }));
        let person = Person::new(1, "Cadet", "LA").with_education(minimum - gap);
        let tooltip = academy.tooltip(&campaign(), &person, course).unwrap();
        prop_assert!(tooltip.is_ineligible());
        prop_assert!(tooltip.render_html().contains("Ineligible"));
    }

    /// At or above the minimum, the education level stays inside the tier span
    #[test]
    fn prop_education_level_within_span(
        minimum in 0..=8i32,
        span in 0..=4i32,
        education in 0..=16i32
    ) {
        let academy = academy_with(json!({
            "educationLevelMin": minimum,
            "educationLevelMax": minimum + span,
        }));
        let person = Person::new(1, "Cadet", "LA").with_education(education);
        match academy.education_level_for(&person) {
            None => prop_assert!(education < minimum),
            Some(level) => {
                prop_assert!(education >= minimum);
                prop_assert!((0..=span).contains(&level));
            }
        }
    }
}
