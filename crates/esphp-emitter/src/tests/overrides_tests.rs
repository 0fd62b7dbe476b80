use super::*;
use crate::emitter::PrinterOptions;
use esphp_binder::NoopScopeRecorder;
use serde_json::json;

fn ident(name: &str) -> Node {
    Node::from_value(json!({ "type": "Identifier", "name": name })).expect("identifier loads")
}

fn string(value: &str) -> Node {
    Node::from_value(json!({ "type": "Literal", "value": value, "raw": format!("'{value}'") }))
        .expect("literal loads")
}

fn rewrite(property: &str, receiver: &Node, arguments: &[Node]) -> String {
    let mut recorder = NoopScopeRecorder;
    let mut printer = Printer::new(&mut recorder, PrinterOptions { open_tag: false });
    let rewrite = lookup_override(property).expect("override registered");
    rewrite(
        &mut printer,
        &OverrideCall {
            receiver,
            property,
            arguments,
        },
    )
}

#[test]
fn test_table_lists_every_builtin() {
    assert_eq!(
        override_names(),
        vec![
            "charAt",
            "join",
            "keys",
            "pop",
            "push",
            "replace",
            "shift",
            "split",
            "substr",
            "toLowerCase",
            "toString",
            "toUpperCase",
            "trim",
            "unshift",
        ]
    );
    assert!(is_override("push"));
    assert!(!is_override("map"));
    assert!(lookup_override("length").is_none());
}

#[test]
fn test_array_mutators_take_receiver_first() {
    let list = ident("list");
    assert_eq!(rewrite("push", &list, &[ident("x")]), "array_push($list, $x)");
    assert_eq!(rewrite("unshift", &list, &[ident("x"), ident("y")]), "array_unshift($list, $x, $y)");
    assert_eq!(rewrite("pop", &list, &[]), "array_pop($list)");
    assert_eq!(rewrite("shift", &list, &[]), "array_shift($list)");
}

#[test]
fn test_join_defaults_to_comma() {
    let parts = ident("parts");
    assert_eq!(rewrite("join", &parts, &[]), "implode(',', $parts)");
    assert_eq!(rewrite("join", &parts, &[string("-")]), "implode('-', $parts)");
}

#[test]
fn test_split_with_and_without_separator() {
    let s = ident("s");
    assert_eq!(rewrite("split", &s, &[string(",")]), "explode(',', $s)");
    assert_eq!(rewrite("split", &s, &[]), "array($s)");
}

#[test]
fn test_string_helpers() {
    let s = ident("s");
    assert_eq!(rewrite("toUpperCase", &s, &[]), "strtoupper($s)");
    assert_eq!(rewrite("toLowerCase", &s, &[]), "strtolower($s)");
    assert_eq!(rewrite("trim", &s, &[]), "trim($s)");
    assert_eq!(rewrite("toString", &s, &[]), "strval($s)");
    assert_eq!(rewrite("charAt", &s, &[]), "substr($s, 0, 1)");
    assert_eq!(rewrite("charAt", &s, &[ident("i")]), "substr($s, $i, 1)");
    assert_eq!(rewrite("substr", &s, &[ident("i")]), "substr($s, $i)");
    assert_eq!(
        rewrite("replace", &s, &[string("a"), string("b")]),
        "str_replace('a', 'b', $s)"
    );
}

#[test]
fn test_keys_reads_its_argument() {
    assert_eq!(rewrite("keys", &ident("Object"), &[ident("o")]), "array_keys($o)");
    assert_eq!(rewrite("keys", &ident("map"), &[]), "array_keys($map)");
}

#[test]
fn test_static_receiver_renders_bare() {
    assert_eq!(rewrite("pop", &ident("Stack"), &[]), "array_pop(Stack)");
}
