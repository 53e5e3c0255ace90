//! Attribute chain construction, derivation and rendering.

use assay_validator::attribute_chain;
use assay_validator::foundation::{AttributeChain, ChainError};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{Product, product};

#[test]
fn default_chain_is_empty() {
    let chain = AttributeChain::new();
    assert!(chain.path_in_parts().is_empty());
    assert_eq!(chain.to_string(), "");
}

#[test]
fn explicit_parts_are_dot_joined() {
    let chain = AttributeChain::from_parts(["a", "b", "c"]);
    assert_eq!(chain.to_string(), "a.b.c");
}

#[test]
fn accessor_expression_yields_parts_in_order() {
    let chain = attribute_chain!(|x| x.product.currency.code);
    assert_eq!(chain.path_in_parts(), ["product", "currency", "code"]);
}

#[test]
fn typed_accessor_matches_untyped() {
    let typed = attribute_chain!(|p: Product| p.currency.code);
    let untyped = attribute_chain!(|p| p.currency.code);
    assert_eq!(typed, untyped);
}

#[rstest]
fn derived_chain_matches_parsed_chain(product: Product) {
    let derived = attribute_chain!(|p: Product| p.currency.code);
    let parsed: AttributeChain = "currency.code".parse().unwrap();

    assert_eq!(derived, parsed);
    assert_eq!(product.currency.code, "EUR");
}

#[rstest]
#[case("", &[])]
#[case("name", &["name"])]
#[case("currency.code", &["currency", "code"])]
#[case("_meta.v2", &["_meta", "v2"])]
fn parse_accepts_identifier_paths(#[case] path: &str, #[case] parts: &[&str]) {
    let chain = AttributeChain::parse(path).unwrap();
    assert_eq!(chain.path_in_parts(), parts);
    assert_eq!(chain.to_string(), path);
}

#[rstest]
#[case("orders[0]")]
#[case("name.len()")]
#[case("a b")]
#[case("9lives")]
fn parse_rejects_non_attribute_steps(#[case] path: &str) {
    let err = AttributeChain::parse(path).unwrap_err();
    assert!(matches!(err, ChainError::InvalidSegment { .. }), "{err}");
}

#[test]
fn parse_reports_empty_segment_position() {
    let err = AttributeChain::parse("a..b").unwrap_err();
    assert_eq!(
        err,
        ChainError::EmptySegment {
            path: "a..b".to_owned(),
            position: 1,
        }
    );
}

#[cfg(feature = "serde")]
#[test]
fn chain_serializes_as_list_of_parts() {
    let chain = AttributeChain::from_parts(["currency", "code"]);
    let json = serde_json::to_value(&chain).unwrap();
    assert_eq!(json, serde_json::json!(["currency", "code"]));

    let back: AttributeChain = serde_json::from_value(json).unwrap();
    assert_eq!(back, chain);
}
