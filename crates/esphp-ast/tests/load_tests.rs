//! Loading ESTree JSON into typed nodes.

use esphp_ast::{AstError, Node, NodeKind};
use esphp_common::limits::MAX_TREE_DEPTH;
use serde_json::json;

fn ident(name: &str) -> serde_json::Value {
    json!({ "type": "Identifier", "name": name })
}

#[test]
fn test_loads_program_with_location_data_ignored() {
    let text = r#"{
        "type": "Program",
        "range": [0, 10],
        "loc": { "start": { "line": 1, "column": 0 }, "end": { "line": 1, "column": 10 } },
        "body": [
            {
                "type": "ExpressionStatement",
                "range": [0, 10],
                "expression": { "type": "Identifier", "name": "x", "range": [0, 1] }
            }
        ],
        "tokens": [{ "type": "Identifier", "value": "x" }]
    }"#;

    let node = Node::from_json(text).expect("program should load");
    let Node::Program(program) = node else {
        panic!("expected a Program node");
    };
    assert_eq!(program.body.len(), 1);
    assert_eq!(program.body[0].kind(), NodeKind::ExpressionStatement);
}

#[test]
fn test_unknown_kind_becomes_unsupported_with_position() {
    let value = json!({
        "type": "WithStatement",
        "range": [4, 20],
        "loc": { "start": { "line": 2, "column": 4 }, "end": { "line": 2, "column": 20 } },
        "object": ident("o"),
        "body": { "type": "BlockStatement", "body": [] }
    });

    let node = Node::from_value(value).expect("unsupported kinds still load");
    assert_eq!(node.kind(), NodeKind::Unsupported);
    assert_eq!(node.kind_name(), "WithStatement");
    let Node::Unsupported(unsupported) = node else {
        panic!("expected Unsupported");
    };
    assert_eq!(unsupported.range, Some([4, 20]));
    assert_eq!(unsupported.loc.map(|loc| loc.start.line), Some(2));
}

#[test]
fn test_missing_required_child_names_the_kind() {
    let value = json!({
        "type": "Program",
        "body": [
            { "type": "ExpressionStatement", "expression": { "type": "CallExpression", "arguments": [] } }
        ]
    });

    let err = Node::from_value(value).expect_err("a call without callee is malformed");
    let AstError::Malformed { kind, message } = &err else {
        panic!("expected Malformed, got {err:?}");
    };
    assert_eq!(kind, "Program");
    assert!(message.contains("malformed CallExpression node"), "{message}");
    assert!(message.contains("callee"), "{message}");
}

#[test]
fn test_missing_type_tag() {
    let err = Node::from_value(json!({ "name": "x" })).expect_err("no type tag");
    assert!(matches!(err, AstError::MissingType));
    assert_eq!(err.to_string(), "node without a `type` tag");
}

#[test]
fn test_invalid_json_is_reported() {
    let err = Node::from_json("{ not json").expect_err("invalid json");
    assert!(matches!(err, AstError::Json(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_optional_children_and_elisions() {
    let value = json!({
        "type": "ArrayExpression",
        "elements": [{ "type": "Literal", "value": 1, "raw": "1" }, null]
    });
    let Node::ArrayExpression(array) = Node::from_value(value).expect("array loads") else {
        panic!("expected ArrayExpression");
    };
    assert!(array.elements[0].is_some());
    assert!(array.elements[1].is_none());

    let value = json!({ "type": "ReturnStatement", "argument": null });
    let Node::ReturnStatement(ret) = Node::from_value(value).expect("return loads") else {
        panic!("expected ReturnStatement");
    };
    assert!(ret.argument.is_none());
}

#[test]
fn test_import_specifier_accepts_estree_field_names() {
    let value = json!({
        "type": "ImportSpecifier",
        "imported": ident("map"),
        "local": ident("m")
    });
    let Node::ImportSpecifier(spec) = Node::from_value(value).expect("specifier loads") else {
        panic!("expected ImportSpecifier");
    };
    assert_eq!(spec.id.identifier_name(), Some("map"));
    assert_eq!(spec.name.as_ref().and_then(|n| n.identifier_name()), Some("m"));
}

#[test]
fn test_method_static_flag_and_super_class() {
    let value = json!({
        "type": "ClassDeclaration",
        "id": ident("Dog"),
        "superClass": ident("Animal"),
        "body": {
            "type": "ClassBody",
            "body": [{
                "type": "MethodDefinition",
                "static": true,
                "key": ident("create"),
                "value": {
                    "type": "FunctionExpression",
                    "id": null,
                    "params": [],
                    "defaults": [],
                    "body": { "type": "BlockStatement", "body": [] }
                }
            }]
        }
    });
    let Node::ClassDeclaration(class) = Node::from_value(value).expect("class loads") else {
        panic!("expected ClassDeclaration");
    };
    assert_eq!(
        class.super_class.as_ref().and_then(|n| n.identifier_name()),
        Some("Animal")
    );
    let Node::ClassBody(body) = class.body.as_ref() else {
        panic!("expected ClassBody");
    };
    let Node::MethodDefinition(method) = &body.body[0] else {
        panic!("expected MethodDefinition");
    };
    assert!(method.is_static);
}

#[test]
fn test_name_text_for_identifiers_and_literals() {
    let string = Node::from_value(json!({ "type": "Literal", "value": "utils", "raw": "\"utils\"" }))
        .expect("literal loads");
    assert_eq!(string.name_text().as_deref(), Some("utils"));

    let number = Node::from_value(json!({ "type": "Literal", "value": 3, "raw": "3" }))
        .expect("literal loads");
    assert_eq!(number.name_text().as_deref(), Some("3"));

    let this = Node::from_value(json!({ "type": "ThisExpression" })).expect("this loads");
    assert_eq!(this.name_text(), None);
}

#[test]
fn test_identifier_accepts_value_field() {
    let node = Node::from_value(json!({ "type": "Identifier", "value": "x" }))
        .expect("identifier loads");
    assert_eq!(node.identifier_name(), Some("x"));
}

#[test]
fn test_long_operator_chain_loads_from_text() {
    let mut chain = json!({ "type": "Literal", "value": 0, "raw": "0" });
    for term in 1..200 {
        chain = json!({
            "type": "BinaryExpression",
            "operator": "+",
            "left": chain,
            "right": { "type": "Literal", "value": term, "raw": term.to_string() }
        });
    }
    let text = json!({ "type": "ExpressionStatement", "expression": chain }).to_string();

    let node = Node::from_json(&text).expect("a 200-term chain loads");
    let Node::ExpressionStatement(stmt) = node else {
        panic!("expected ExpressionStatement");
    };
    assert_eq!(stmt.expression.kind(), NodeKind::BinaryExpression);
}

#[test]
fn test_nesting_past_the_limit_is_rejected() {
    let depth = MAX_TREE_DEPTH + 1;
    let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));

    let err = Node::from_json(&text).expect_err("too deep");
    let AstError::TooDeep { depth: seen, limit } = err else {
        panic!("expected TooDeep, got {err:?}");
    };
    assert_eq!(seen, depth);
    assert_eq!(limit, MAX_TREE_DEPTH);
}

#[test]
fn test_brackets_inside_strings_do_not_count_as_nesting() {
    let raw = format!("\"[{}\\\"\"", "{[".repeat(MAX_TREE_DEPTH));
    let value = json!({ "type": "Literal", "value": raw, "raw": raw });

    let node = Node::from_json(&value.to_string()).expect("string content is not nesting");
    assert_eq!(node.kind(), NodeKind::Literal);
}
