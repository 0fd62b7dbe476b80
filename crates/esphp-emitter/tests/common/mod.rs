//! ESTree builders shared by the emitter integration tests.
#![allow(dead_code)]

use esphp_ast::Node;
use esphp_emitter::{PrinterOptions, Translation, translate};
use serde_json::{Value, json};

/// Load `program` and translate it without the open marker.
pub fn translate_json(program: Value) -> Translation {
    let root = Node::from_value(program).expect("fixture loads");
    translate(&root, PrinterOptions { open_tag: false })
}

/// Translated text of a program made of `body`.
pub fn emit(body: Vec<Value>) -> String {
    translate_json(program(body)).code
}

pub fn program(body: Vec<Value>) -> Value {
    json!({ "type": "Program", "body": body })
}

pub fn block(body: Vec<Value>) -> Value {
    json!({ "type": "BlockStatement", "body": body })
}

pub fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

pub fn num(value: i64) -> Value {
    json!({ "type": "Literal", "value": value, "raw": value.to_string() })
}

pub fn string(value: &str) -> Value {
    json!({ "type": "Literal", "value": value, "raw": format!("'{value}'") })
}

pub fn binary(operator: &str, left: Value, right: Value) -> Value {
    json!({ "type": "BinaryExpression", "operator": operator, "left": left, "right": right })
}

pub fn assign(left: Value, right: Value) -> Value {
    json!({ "type": "AssignmentExpression", "operator": "=", "left": left, "right": right })
}

pub fn expr(expression: Value) -> Value {
    json!({ "type": "ExpressionStatement", "expression": expression })
}

pub fn call(callee: Value, arguments: Vec<Value>) -> Value {
    json!({ "type": "CallExpression", "callee": callee, "arguments": arguments })
}

pub fn new_call(callee: Value, arguments: Vec<Value>) -> Value {
    json!({ "type": "NewExpression", "callee": callee, "arguments": arguments })
}

pub fn member(object: Value, property: &str) -> Value {
    json!({ "type": "MemberExpression", "computed": false, "object": object, "property": ident(property) })
}

pub fn index(object: Value, property: Value) -> Value {
    json!({ "type": "MemberExpression", "computed": true, "object": object, "property": property })
}

pub fn declarator(name: &str, init: Option<Value>) -> Value {
    json!({ "type": "VariableDeclarator", "id": ident(name), "init": init })
}

pub fn var(declarators: Vec<Value>) -> Value {
    json!({ "type": "VariableDeclaration", "kind": "var", "declarations": declarators })
}

pub fn function_declaration(name: &str, params: &[&str], body: Vec<Value>) -> Value {
    json!({
        "type": "FunctionDeclaration",
        "id": ident(name),
        "params": params.iter().map(|p| ident(p)).collect::<Vec<_>>(),
        "defaults": [],
        "body": block(body)
    })
}

pub fn function_expression(params: &[&str], body: Vec<Value>) -> Value {
    json!({
        "type": "FunctionExpression",
        "id": null,
        "params": params.iter().map(|p| ident(p)).collect::<Vec<_>>(),
        "defaults": [],
        "body": block(body)
    })
}

pub fn ret(argument: Option<Value>) -> Value {
    json!({ "type": "ReturnStatement", "argument": argument })
}

pub fn method(name: &str, params: &[&str], body: Vec<Value>, is_static: bool) -> Value {
    json!({
        "type": "MethodDefinition",
        "key": ident(name),
        "static": is_static,
        "kind": if name == "constructor" { "constructor" } else { "method" },
        "value": function_expression(params, body)
    })
}

pub fn class(name: &str, super_class: Option<&str>, methods: Vec<Value>) -> Value {
    json!({
        "type": "ClassDeclaration",
        "id": ident(name),
        "superClass": super_class.map(ident),
        "body": { "type": "ClassBody", "body": methods }
    })
}

pub fn unsupported(kind: &str) -> Value {
    json!({ "type": kind })
}
