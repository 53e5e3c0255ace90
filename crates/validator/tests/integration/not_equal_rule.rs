//! `not_equal` across candidate categories.
//!
//! For every category: pass iff `candidate != operand`, and on failure the
//! stored `comparison_value` is the operand with its own type.

use std::collections::HashMap;

use assay_validator::foundation::{
    ATTRIBUTE_NAME, AttributeChain, COMPARISON_VALUE, Rule, ValidationState,
};
use assay_validator::rules::{NotEqual, not_equal};
use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{Order, run_not_equal};

const TEMPLATE: &str = "'$attribute_name' must not be equal to '$comparison_value'";

// ============================================================================
// SCALARS
// ============================================================================

#[rstest]
#[case("Widget", "Widget", false)]
#[case("Widget", "Gadget", true)]
#[case("Widget", "widget", true)]
#[case("", "", false)]
fn string_candidates(#[case] operand: &'static str, #[case] candidate: &str, #[case] passes: bool) {
    let (passed, stored) = run_not_equal(operand, &candidate);
    assert_eq!(passed, passes);
    assert_eq!(stored, (!passes).then_some(operand));
}

#[rstest]
#[case(0, 0, false)]
#[case(0, 1, true)]
#[case(-7, 7, true)]
#[case(i64::MAX, i64::MAX, false)]
fn integer_candidates(#[case] operand: i64, #[case] candidate: i64, #[case] passes: bool) {
    let (passed, stored) = run_not_equal(operand, &candidate);
    assert_eq!(passed, passes);
    assert_eq!(stored, (!passes).then_some(operand));
}

#[rstest]
#[case(1.5, 1.5, false)]
#[case(1.5, 1.25, true)]
#[case(0.0, -0.0, false)]
#[case(f64::NAN, f64::NAN, true)]
fn float_candidates(#[case] operand: f64, #[case] candidate: f64, #[case] passes: bool) {
    let (passed, stored) = run_not_equal(operand, &candidate);
    assert_eq!(passed, passes);
    assert_eq!(stored.is_some(), !passes);
}

#[cfg(feature = "complex")]
mod complex {
    use num_complex::Complex;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn equal_complex_fails_with_operand_stored() {
        let (passed, stored) =
            run_not_equal(Complex::new(1.0_f64, 1.0), &Complex::new(1.0_f64, 1.0));
        assert!(!passed);
        assert_eq!(stored, Some(Complex::new(1.0, 1.0)));
    }

    #[test]
    fn different_real_part_passes() {
        let (passed, stored) =
            run_not_equal(Complex::new(2.0_f64, 1.0), &Complex::new(1.0_f64, 1.0));
        assert!(passed);
        assert_eq!(stored, None);
    }

    #[test]
    fn different_imaginary_part_passes() {
        let (passed, _) =
            run_not_equal(Complex::new(1.0_f64, 2.0), &Complex::new(1.0_f64, 1.0));
        assert!(passed);
    }

    #[test]
    fn complex_renders_in_message() {
        let rule = not_equal(Complex::new(1_i32, 1));
        let chain = AttributeChain::from_parts(["impedance"]);
        let mut state = ValidationState::for_attribute(&(), &chain);

        assert!(!rule.validate(&mut state, &Complex::new(1_i32, 1)));
        assert_eq!(
            state.into_message(rule.template_message()).unwrap(),
            "'impedance' must not be equal to '1+1i'"
        );
    }
}

// ============================================================================
// SEQUENCES AND TUPLES
// ============================================================================

fn orders() -> Vec<Order> {
    vec![Order { id: 1, total: 9.5 }, Order { id: 2, total: 19.0 }]
}

#[test]
fn equal_sequences_fail() {
    let (passed, stored) = run_not_equal(orders(), &orders());
    assert!(!passed);
    assert_eq!(stored, Some(orders()));
}

#[test]
fn sequence_order_matters() {
    let mut reversed = orders();
    reversed.reverse();

    let (passed, stored) = run_not_equal(orders(), &reversed);
    assert!(passed);
    assert_eq!(stored, None);
}

#[test]
fn sequence_length_matters() {
    let (passed, _) = run_not_equal(orders(), &orders()[..1].to_vec());
    assert!(passed);
}

#[test]
fn slice_candidate_against_vec_operand() {
    let operand = vec![1_i32, 2, 3];
    let candidate: &[i32] = &[1, 2, 3];
    let (passed, _) = run_not_equal(operand, candidate);
    assert!(!passed);
}

#[rstest]
#[case((1, "a", 2.5), false)]
#[case((1, "a", 2.0), true)]
#[case((2, "a", 2.5), true)]
fn tuple_candidates(#[case] candidate: (i32, &'static str, f64), #[case] passes: bool) {
    let operand = (1, "a", 2.5);
    let (passed, stored) = run_not_equal(operand, &candidate);
    assert_eq!(passed, passes);
    assert_eq!(stored, (!passes).then_some(operand));
}

// ============================================================================
// MAPPINGS
// ============================================================================

#[test]
fn hash_map_insertion_order_is_ignored() {
    let mut operand = HashMap::new();
    operand.insert("en", "Widget");
    operand.insert("de", "Gerät");

    let mut candidate = HashMap::new();
    candidate.insert("de", "Gerät");
    candidate.insert("en", "Widget");

    let (passed, stored) = run_not_equal(operand.clone(), &candidate);
    assert!(!passed);
    assert_eq!(stored, Some(operand));
}

#[test]
fn index_map_insertion_order_is_ignored() {
    let operand = IndexMap::from([("en", "Widget"), ("de", "Gerät")]);
    let candidate = IndexMap::from([("de", "Gerät"), ("en", "Widget")]);

    let (passed, _) = run_not_equal(operand, &candidate);
    assert!(!passed);
}

#[test]
fn map_values_are_compared_per_key() {
    let operand = HashMap::from([("en", "Widget")]);
    let candidate = HashMap::from([("en", "Gadget")]);

    let (passed, stored) = run_not_equal(operand, &candidate);
    assert!(passed);
    assert_eq!(stored, None);
}

#[test]
fn map_with_extra_key_passes() {
    let operand = HashMap::from([("en", "Widget")]);
    let candidate = HashMap::from([("en", "Widget"), ("fr", "Bidule")]);

    let (passed, _) = run_not_equal(operand, &candidate);
    assert!(passed);
}

// ============================================================================
// TEMPLATE AND STATE
// ============================================================================

#[test]
fn template_is_independent_of_type_parameters() {
    assert_eq!(not_equal(1_u8).template_message().template(), TEMPLATE);
    assert_eq!(not_equal(orders()).template_message().template(), TEMPLATE);
    assert_eq!(
        Rule::<Order, str>::template_message(&not_equal(String::new())).template(),
        TEMPLATE
    );
    assert_eq!(NotEqual::<()>::TEMPLATE, TEMPLATE);
}

#[test]
fn failure_adds_exactly_one_placeholder() {
    let chain = AttributeChain::from_parts(["name"]);
    let mut state = ValidationState::for_attribute(&(), &chain);
    let before: Vec<_> = state.placeholders().names().map(str::to_owned).collect();
    assert_eq!(before, [ATTRIBUTE_NAME]);

    assert!(!not_equal("Widget").validate(&mut state, &"Widget"));
    let mut after: Vec<_> = state.placeholders().names().collect();
    after.sort_unstable();
    assert_eq!(after, [ATTRIBUTE_NAME, COMPARISON_VALUE]);
}

#[test]
fn success_leaves_state_untouched() {
    let chain = AttributeChain::from_parts(["name"]);
    let mut state = ValidationState::for_attribute(&(), &chain);

    assert!(not_equal("Widget").validate(&mut state, &"Gadget"));
    assert_eq!(state.placeholders().len(), 1);
    assert!(!state.placeholders().contains(COMPARISON_VALUE));
}

#[test]
fn validate_is_idempotent_on_fresh_states() {
    let rule = not_equal(vec![1_i32, 2]);
    let outcomes: Vec<_> = (0..2)
        .map(|_| {
            let mut state = ValidationState::new(&());
            let passed = rule.validate(&mut state, &vec![1_i32, 2]);
            (passed, state.placeholders().rendered(COMPARISON_VALUE))
        })
        .collect();

    assert_eq!(outcomes[0], outcomes[1]);
    assert_eq!(outcomes[0], (false, Some("[1, 2]".to_owned())));
}

#[test]
fn rule_is_shareable_across_threads() {
    let rule = std::sync::Arc::new(not_equal(0_u64));
    let handles: Vec<_> = (0..4_u64)
        .map(|candidate| {
            let rule = std::sync::Arc::clone(&rule);
            std::thread::spawn(move || {
                let mut state = ValidationState::new(&());
                rule.validate(&mut state, &candidate)
            })
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, [false, true, true, true]);
}
