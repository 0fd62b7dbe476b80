use super::*;
use esphp_ast::Member;
use serde_json::json;

fn member(value: serde_json::Value) -> Member {
    match Node::from_value(value).expect("member loads") {
        Node::MemberExpression(member) => member,
        other => panic!("expected MemberExpression, got {}", other.kind_name()),
    }
}

fn access(object: serde_json::Value, property: &str) -> serde_json::Value {
    json!({
        "type": "MemberExpression",
        "computed": false,
        "object": object,
        "property": { "type": "Identifier", "name": property }
    })
}

fn ident(name: &str) -> serde_json::Value {
    json!({ "type": "Identifier", "name": name })
}

#[test]
fn test_static_style_is_leading_uppercase() {
    assert!(is_static_style("Foo"));
    assert!(is_static_style("URL"));
    assert!(!is_static_style("foo"));
    assert!(!is_static_style("_Foo"));
    assert!(!is_static_style("$x"));
    assert!(!is_static_style(""));
}

#[test]
fn test_static_style_is_stable_across_calls() {
    for name in ["Alpha", "beta", "Ωmega", "9lives"] {
        assert_eq!(is_static_style(name), is_static_style(name));
    }
}

#[test]
fn test_connective_table() {
    assert_eq!(Connective::for_pair(true, true), Connective::Namespace);
    assert_eq!(Connective::for_pair(true, false), Connective::Static);
    assert_eq!(Connective::for_pair(false, true), Connective::Instance);
    assert_eq!(Connective::for_pair(false, false), Connective::Instance);
    assert_eq!(Connective::Namespace.as_str(), "\\");
    assert_eq!(Connective::Static.as_str(), "::");
    assert_eq!(Connective::Instance.as_str(), "->");
}

#[test]
fn test_plain_pair_classification() {
    let m = member(access(ident("Foo"), "bar"));
    let result = classify_member(&MemberLike::from_member(&m));
    assert!(result.object_static);
    assert!(!result.property_static);
    assert_eq!(result.connective, Connective::Static);

    let m = member(access(ident("obj"), "Method"));
    let result = classify_member(&MemberLike::from_member(&m));
    assert!(!result.object_static);
    assert_eq!(result.connective, Connective::Instance);
}

#[test]
fn test_collapsed_chain_keeps_namespace_only_for_static_tail() {
    let m = member(access(access(ident("A"), "B"), "c"));
    let result = classify_member(&MemberLike::from_member(&m));
    assert!(!result.object_static);
    assert_eq!(result.connective, Connective::Instance);

    let m = member(access(access(ident("A"), "B"), "C"));
    let result = classify_member(&MemberLike::from_member(&m));
    assert_eq!(result.connective, Connective::Namespace);

    let m = member(access(access(ident("A"), "b"), "C"));
    let result = classify_member(&MemberLike::from_member(&m));
    assert_eq!(result.connective, Connective::Instance);
}

#[test]
fn test_only_identifiers_are_static_style() {
    let this = Node::from_value(json!({ "type": "ThisExpression" })).expect("this loads");
    assert!(!node_is_static_style(&this));
    let literal =
        Node::from_value(json!({ "type": "Literal", "value": "Foo", "raw": "'Foo'" })).expect("literal loads");
    assert!(!node_is_static_style(&literal));
}
