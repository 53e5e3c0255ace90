//! The rest of the comparison family and message overrides.

use assay_validator::prelude::*;
use rstest::rstest;

fn price() -> AttributeChain {
    AttributeChain::from_parts(["price"])
}

#[rstest]
#[case(9.5, None)]
#[case(0.0, Some("'price' must be greater than '0'"))]
#[case(-1.0, Some("'price' must be greater than '0'"))]
fn greater_than_renders_operand(#[case] candidate: f64, #[case] expected: Option<&str>) {
    let rule = greater_than(0.0_f64);
    let message = evaluate(&(), &price(), &rule, &candidate).unwrap();
    assert_eq!(message.as_deref(), expected);
}

#[rstest]
#[case(equal(5_i32), 5, true)]
#[case(equal(5_i32), 6, false)]
fn equal_cases(#[case] rule: Equal<i32>, #[case] candidate: i32, #[case] passes: bool) {
    let mut state = ValidationState::new(&());
    assert_eq!(rule.validate(&mut state, &candidate), passes);
}

#[test]
fn ordering_rules_on_boundaries() {
    let at = |rule: &dyn Rule<(), u32>, candidate: u32| {
        let mut state = ValidationState::new(&());
        rule.validate(&mut state, &candidate)
    };

    assert!(at(&greater_than_or_equal(10_u32), 10));
    assert!(!at(&greater_than(10_u32), 10));
    assert!(at(&less_than_or_equal(10_u32), 10));
    assert!(!at(&less_than(10_u32), 10));
}

#[test]
fn each_rule_has_its_own_code_and_template() {
    let rules: Vec<(&str, &str)> = vec![
        (not_equal(1_i32).code(), NotEqual::<i32>::TEMPLATE),
        (equal(1_i32).code(), Equal::<i32>::TEMPLATE),
        (greater_than(1_i32).code(), GreaterThan::<i32>::TEMPLATE),
        (
            greater_than_or_equal(1_i32).code(),
            GreaterThanOrEqual::<i32>::TEMPLATE,
        ),
        (less_than(1_i32).code(), LessThan::<i32>::TEMPLATE),
        (
            less_than_or_equal(1_i32).code(),
            LessThanOrEqual::<i32>::TEMPLATE,
        ),
    ];

    let codes: Vec<_> = rules.iter().map(|(code, _)| *code).collect();
    assert_eq!(
        codes,
        [
            "not_equal",
            "equal",
            "greater_than",
            "greater_than_or_equal",
            "less_than",
            "less_than_or_equal"
        ]
    );
    for (_, template) in rules {
        assert!(template.starts_with("'$attribute_name' must "), "{template}");
        assert!(template.ends_with("'$comparison_value'"), "{template}");
    }
}

#[test]
fn with_message_uses_custom_template() {
    let rule =
        not_equal(String::from("TBD")).with_message("${attribute_name} is still a placeholder");
    let chain = AttributeChain::from_parts(["name"]);

    let message = evaluate(&(), &chain, &rule, "TBD").unwrap();
    assert_eq!(message.as_deref(), Some("name is still a placeholder"));
}

#[test]
fn with_code_keeps_template() {
    let rule = not_equal(0_u32).with_code("out_of_stock");
    assert_eq!(Rule::<(), u32>::code(&rule), "out_of_stock");
    assert_eq!(
        Rule::<(), u32>::template_message(&rule).template(),
        NotEqual::<u32>::TEMPLATE
    );
}

#[test]
fn template_referencing_unwritten_placeholder_is_a_contract_violation() {
    let rule = not_equal(0_u32).with_message("$attribute_name needs $minimum");
    let err = evaluate(&(), &price(), &rule, &0_u32).unwrap_err();

    assert_eq!(err.missing_name(), Some("minimum"));
    assert!(matches!(err, MessageError::MissingPlaceholder { .. }));
}

#[test]
fn passing_rule_never_renders() {
    // An unrenderable template is fine as long as the rule passes.
    let rule = not_equal(0_u32).with_message("$attribute_name needs $minimum");
    assert_eq!(evaluate(&(), &price(), &rule, &1_u32).unwrap(), None);
}
