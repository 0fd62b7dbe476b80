//! Node types for the ESTree subset the translator understands.
//!
//! Every struct derives `Deserialize` and ignores fields it does not use
//! (`loc`, `range`, token lists). Required children are plain fields, so a
//! tree missing one fails to load instead of reaching the emitter.

use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;

// =============================================================================
// Node
// =============================================================================

/// A node of the input tree, tagged by its ESTree `type`.
///
/// Binary, logical and assignment forms share one payload; so do
/// call/new expressions and function declarations/expressions.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Program(Program),
    BlockStatement(Block),
    ClassBody(Block),
    VariableDeclaration(VariableDeclaration),
    VariableDeclarator(VariableDeclarator),
    Identifier(Identifier),
    Punctuator(Punctuator),
    Literal(Literal),
    BinaryExpression(Binary),
    LogicalExpression(Binary),
    AssignmentExpression(Binary),
    ExpressionStatement(ExpressionStatement),
    CallExpression(Call),
    NewExpression(Call),
    MemberExpression(Member),
    FunctionDeclaration(Function),
    FunctionExpression(Function),
    ObjectExpression(ObjectExpression),
    ArrayExpression(ArrayExpression),
    Property(Property),
    ReturnStatement(ReturnStatement),
    ClassDeclaration(ClassDeclaration),
    MethodDefinition(MethodDefinition),
    ThisExpression,
    IfStatement(IfStatement),
    ForStatement(ForStatement),
    ForInStatement(ForInStatement),
    UpdateExpression(UpdateExpression),
    SwitchStatement(SwitchStatement),
    SwitchCase(SwitchCase),
    BreakStatement(BreakStatement),
    ModuleDeclaration(ModuleDeclaration),
    ExportDeclaration(ExportDeclaration),
    ImportDeclaration(ImportDeclaration),
    ImportSpecifier(ImportSpecifier),
    /// Any `type` tag outside the supported subset.
    Unsupported(UnsupportedNode),
}

/// Kind tag of a [`Node`], cheap to copy into emission context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    BlockStatement,
    ClassBody,
    VariableDeclaration,
    VariableDeclarator,
    Identifier,
    Punctuator,
    Literal,
    BinaryExpression,
    LogicalExpression,
    AssignmentExpression,
    ExpressionStatement,
    CallExpression,
    NewExpression,
    MemberExpression,
    FunctionDeclaration,
    FunctionExpression,
    ObjectExpression,
    ArrayExpression,
    Property,
    ReturnStatement,
    ClassDeclaration,
    MethodDefinition,
    ThisExpression,
    IfStatement,
    ForStatement,
    ForInStatement,
    UpdateExpression,
    SwitchStatement,
    SwitchCase,
    BreakStatement,
    ModuleDeclaration,
    ExportDeclaration,
    ImportDeclaration,
    ImportSpecifier,
    Unsupported,
}

impl NodeKind {
    /// The ESTree `type` tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::BlockStatement => "BlockStatement",
            Self::ClassBody => "ClassBody",
            Self::VariableDeclaration => "VariableDeclaration",
            Self::VariableDeclarator => "VariableDeclarator",
            Self::Identifier => "Identifier",
            Self::Punctuator => "Punctuator",
            Self::Literal => "Literal",
            Self::BinaryExpression => "BinaryExpression",
            Self::LogicalExpression => "LogicalExpression",
            Self::AssignmentExpression => "AssignmentExpression",
            Self::ExpressionStatement => "ExpressionStatement",
            Self::CallExpression => "CallExpression",
            Self::NewExpression => "NewExpression",
            Self::MemberExpression => "MemberExpression",
            Self::FunctionDeclaration => "FunctionDeclaration",
            Self::FunctionExpression => "FunctionExpression",
            Self::ObjectExpression => "ObjectExpression",
            Self::ArrayExpression => "ArrayExpression",
            Self::Property => "Property",
            Self::ReturnStatement => "ReturnStatement",
            Self::ClassDeclaration => "ClassDeclaration",
            Self::MethodDefinition => "MethodDefinition",
            Self::ThisExpression => "ThisExpression",
            Self::IfStatement => "IfStatement",
            Self::ForStatement => "ForStatement",
            Self::ForInStatement => "ForInStatement",
            Self::UpdateExpression => "UpdateExpression",
            Self::SwitchStatement => "SwitchStatement",
            Self::SwitchCase => "SwitchCase",
            Self::BreakStatement => "BreakStatement",
            Self::ModuleDeclaration => "ModuleDeclaration",
            Self::ExportDeclaration => "ExportDeclaration",
            Self::ImportDeclaration => "ImportDeclaration",
            Self::ImportSpecifier => "ImportSpecifier",
            Self::Unsupported => "Unsupported",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Program(_) => NodeKind::Program,
            Self::BlockStatement(_) => NodeKind::BlockStatement,
            Self::ClassBody(_) => NodeKind::ClassBody,
            Self::VariableDeclaration(_) => NodeKind::VariableDeclaration,
            Self::VariableDeclarator(_) => NodeKind::VariableDeclarator,
            Self::Identifier(_) => NodeKind::Identifier,
            Self::Punctuator(_) => NodeKind::Punctuator,
            Self::Literal(_) => NodeKind::Literal,
            Self::BinaryExpression(_) => NodeKind::BinaryExpression,
            Self::LogicalExpression(_) => NodeKind::LogicalExpression,
            Self::AssignmentExpression(_) => NodeKind::AssignmentExpression,
            Self::ExpressionStatement(_) => NodeKind::ExpressionStatement,
            Self::CallExpression(_) => NodeKind::CallExpression,
            Self::NewExpression(_) => NodeKind::NewExpression,
            Self::MemberExpression(_) => NodeKind::MemberExpression,
            Self::FunctionDeclaration(_) => NodeKind::FunctionDeclaration,
            Self::FunctionExpression(_) => NodeKind::FunctionExpression,
            Self::ObjectExpression(_) => NodeKind::ObjectExpression,
            Self::ArrayExpression(_) => NodeKind::ArrayExpression,
            Self::Property(_) => NodeKind::Property,
            Self::ReturnStatement(_) => NodeKind::ReturnStatement,
            Self::ClassDeclaration(_) => NodeKind::ClassDeclaration,
            Self::MethodDefinition(_) => NodeKind::MethodDefinition,
            Self::ThisExpression => NodeKind::ThisExpression,
            Self::IfStatement(_) => NodeKind::IfStatement,
            Self::ForStatement(_) => NodeKind::ForStatement,
            Self::ForInStatement(_) => NodeKind::ForInStatement,
            Self::UpdateExpression(_) => NodeKind::UpdateExpression,
            Self::SwitchStatement(_) => NodeKind::SwitchStatement,
            Self::SwitchCase(_) => NodeKind::SwitchCase,
            Self::BreakStatement(_) => NodeKind::BreakStatement,
            Self::ModuleDeclaration(_) => NodeKind::ModuleDeclaration,
            Self::ExportDeclaration(_) => NodeKind::ExportDeclaration,
            Self::ImportDeclaration(_) => NodeKind::ImportDeclaration,
            Self::ImportSpecifier(_) => NodeKind::ImportSpecifier,
            Self::Unsupported(_) => NodeKind::Unsupported,
        }
    }

    /// The `type` tag as read, including tags outside the supported subset.
    #[must_use]
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Unsupported(node) => &node.kind,
            other => other.kind().as_str(),
        }
    }

    /// Identifier name, if this node is an identifier.
    #[must_use]
    pub fn identifier_name(&self) -> Option<&str> {
        match self {
            Self::Identifier(ident) => Some(&ident.name),
            _ => None,
        }
    }

    /// Name-like text: identifier names and literal strings.
    ///
    /// Non-string literals fall back to their raw text.
    #[must_use]
    pub fn name_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Identifier(ident) => Some(Cow::Borrowed(&ident.name)),
            Self::Literal(lit) => match &lit.value {
                Value::String(text) => Some(Cow::Borrowed(text)),
                _ => lit.raw.as_deref().map(Cow::Borrowed),
            },
            _ => None,
        }
    }
}

// =============================================================================
// Payloads
// =============================================================================

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Program {
    pub body: Vec<Node>,
}

/// Statement sequence shared by `BlockStatement` and `ClassBody`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Block {
    pub body: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VariableDeclaration {
    pub declarations: Vec<Node>,
    #[serde(default)]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VariableDeclarator {
    pub id: Box<Node>,
    #[serde(default)]
    pub init: Option<Box<Node>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Identifier {
    #[serde(alias = "value")]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Punctuator {
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Literal {
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub raw: Option<String>,
}

impl Literal {
    /// Source text of the literal; falls back to the JSON form of `value`.
    #[must_use]
    pub fn text(&self) -> Cow<'_, str> {
        match &self.raw {
            Some(raw) => Cow::Borrowed(raw),
            None => match &self.value {
                Value::Null => Cow::Borrowed("null"),
                other => Cow::Owned(other.to_string()),
            },
        }
    }
}

/// Shared payload of binary, logical and assignment expressions.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Binary {
    pub operator: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExpressionStatement {
    pub expression: Box<Node>,
}

/// Shared payload of call and `new` expressions.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Call {
    pub callee: Box<Node>,
    #[serde(default)]
    pub arguments: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Member {
    pub object: Box<Node>,
    pub property: Box<Node>,
    #[serde(default)]
    pub computed: bool,
}

/// Shared payload of function declarations and function expressions.
///
/// `defaults` follows the esprima layout: one optional entry per parameter.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Function {
    #[serde(default)]
    pub id: Option<Box<Node>>,
    #[serde(default)]
    pub params: Vec<Node>,
    #[serde(default)]
    pub defaults: Vec<Option<Node>>,
    pub body: Box<Node>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ObjectExpression {
    pub properties: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ArrayExpression {
    /// `None` marks an elision such as `[1, , 3]`.
    pub elements: Vec<Option<Node>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Property {
    pub key: Box<Node>,
    pub value: Box<Node>,
    #[serde(default)]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ReturnStatement {
    #[serde(default)]
    pub argument: Option<Box<Node>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDeclaration {
    pub id: Box<Node>,
    #[serde(default)]
    pub super_class: Option<Box<Node>>,
    pub body: Box<Node>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MethodDefinition {
    pub key: Box<Node>,
    pub value: Box<Node>,
    #[serde(rename = "static", default)]
    pub is_static: bool,
    #[serde(default)]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IfStatement {
    pub test: Box<Node>,
    pub consequent: Box<Node>,
    #[serde(default)]
    pub alternate: Option<Box<Node>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ForStatement {
    #[serde(default)]
    pub init: Option<Box<Node>>,
    #[serde(default)]
    pub test: Option<Box<Node>>,
    #[serde(default)]
    pub update: Option<Box<Node>>,
    pub body: Box<Node>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ForInStatement {
    pub left: Box<Node>,
    pub right: Box<Node>,
    pub body: Box<Node>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UpdateExpression {
    pub operator: String,
    pub argument: Box<Node>,
    #[serde(default)]
    pub prefix: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SwitchStatement {
    pub discriminant: Box<Node>,
    #[serde(default)]
    pub cases: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SwitchCase {
    /// `None` for the `default:` clause.
    #[serde(default)]
    pub test: Option<Box<Node>>,
    #[serde(default)]
    pub consequent: Vec<Node>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BreakStatement {
    #[serde(default)]
    pub label: Option<Box<Node>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ModuleDeclaration {
    pub id: Box<Node>,
    pub body: Box<Node>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ExportDeclaration {
    #[serde(default)]
    pub declaration: Option<Box<Node>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ImportDeclaration {
    #[serde(default)]
    pub specifiers: Vec<Node>,
    pub source: Literal,
}

/// `import { id as name } from "source"`.
///
/// Accepts both the esprima-fb field names (`id`/`name`) and the ESTree
/// ones (`imported`/`local`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ImportSpecifier {
    #[serde(alias = "imported")]
    pub id: Box<Node>,
    #[serde(default, alias = "local")]
    pub name: Option<Box<Node>>,
}

// =============================================================================
// Unsupported kinds
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

/// A node whose `type` falls outside the supported subset.
///
/// Only the tag and position data are kept, for diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UnsupportedNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub loc: Option<SourceLocation>,
    #[serde(default)]
    pub range: Option<[u32; 2]>,
}
