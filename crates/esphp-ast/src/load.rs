//! Loading trees from ESTree JSON.
//!
//! Dispatch happens on the `type` tag. Supported tags deserialize into their
//! typed payload; a supported tag whose payload is missing a required child
//! is a hard [`AstError::Malformed`] naming the kind. The error message of a
//! nested failure carries every enclosing kind, outermost first.
//!
//! Text input is measured before parsing: trees deeper than
//! [`MAX_TREE_DEPTH`] are rejected with [`AstError::TooDeep`], and the rest
//! are parsed on a stack sized for their depth.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use esphp_common::limits::{MAX_TREE_DEPTH, STACK_GROWTH, STACK_RED_ZONE, load_stack_size};

use crate::node::{Node, UnsupportedNode};

/// Error produced while turning JSON into a [`Node`] tree.
#[derive(Debug)]
pub enum AstError {
    /// The input was not valid JSON.
    Json(serde_json::Error),
    /// An object in node position had no string `type` tag.
    MissingType,
    /// A supported kind lacked a required child or had a child of the wrong shape.
    Malformed { kind: String, message: String },
    /// The input nests deeper than the loader accepts.
    TooDeep { depth: usize, limit: usize },
}

impl AstError {
    fn malformed(kind: &str, err: &serde_json::Error) -> Self {
        Self::Malformed {
            kind: kind.to_string(),
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for AstError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid AST JSON: {err}"),
            Self::MissingType => f.write_str("node without a `type` tag"),
            Self::Malformed { kind, message } => write!(f, "malformed {kind} node: {message}"),
            Self::TooDeep { depth, limit } => {
                write!(f, "tree nesting depth {depth} exceeds the limit of {limit}")
            }
        }
    }
}

impl std::error::Error for AstError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl Node {
    /// Parse a tree from ESTree JSON text.
    pub fn from_json(text: &str) -> Result<Self, AstError> {
        let depth = nesting_depth(text);
        if depth > MAX_TREE_DEPTH {
            return Err(AstError::TooDeep {
                depth,
                limit: MAX_TREE_DEPTH,
            });
        }

        stacker::grow(load_stack_size(depth), || {
            let mut deserializer = serde_json::Deserializer::from_str(text);
            deserializer.disable_recursion_limit();
            let value = Value::deserialize(&mut deserializer).map_err(AstError::Json)?;
            deserializer.end().map_err(AstError::Json)?;
            Self::from_value(value)
        })
    }

    /// Build a tree from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, AstError> {
        let Some(tag) = value.get("type").and_then(Value::as_str) else {
            return Err(AstError::MissingType);
        };
        let tag = tag.to_string();

        macro_rules! typed {
            ($variant:ident) => {
                serde_json::from_value(value)
                    .map(Node::$variant)
                    .map_err(|err| AstError::malformed(&tag, &err))
            };
        }

        match tag.as_str() {
            "Program" => typed!(Program),
            "BlockStatement" => typed!(BlockStatement),
            "ClassBody" => typed!(ClassBody),
            "VariableDeclaration" => typed!(VariableDeclaration),
            "VariableDeclarator" => typed!(VariableDeclarator),
            "Identifier" => typed!(Identifier),
            "Punctuator" => typed!(Punctuator),
            "Literal" => typed!(Literal),
            "BinaryExpression" => typed!(BinaryExpression),
            "LogicalExpression" => typed!(LogicalExpression),
            "AssignmentExpression" => typed!(AssignmentExpression),
            "ExpressionStatement" => typed!(ExpressionStatement),
            "CallExpression" => typed!(CallExpression),
            "NewExpression" => typed!(NewExpression),
            "MemberExpression" => typed!(MemberExpression),
            "FunctionDeclaration" => typed!(FunctionDeclaration),
            "FunctionExpression" => typed!(FunctionExpression),
            "ObjectExpression" => typed!(ObjectExpression),
            "ArrayExpression" => typed!(ArrayExpression),
            "Property" => typed!(Property),
            "ReturnStatement" => typed!(ReturnStatement),
            "ClassDeclaration" => typed!(ClassDeclaration),
            "MethodDefinition" => typed!(MethodDefinition),
            "ThisExpression" => Ok(Node::ThisExpression),
            "IfStatement" => typed!(IfStatement),
            "ForStatement" => typed!(ForStatement),
            "ForInStatement" => typed!(ForInStatement),
            "UpdateExpression" => typed!(UpdateExpression),
            "SwitchStatement" => typed!(SwitchStatement),
            "SwitchCase" => typed!(SwitchCase),
            "BreakStatement" => typed!(BreakStatement),
            "ModuleDeclaration" => typed!(ModuleDeclaration),
            "ExportDeclaration" => typed!(ExportDeclaration),
            "ImportDeclaration" => typed!(ImportDeclaration),
            "ImportSpecifier" => typed!(ImportSpecifier),
            _ => serde_json::from_value::<UnsupportedNode>(value)
                .map(Node::Unsupported)
                .map_err(|err| AstError::malformed(&tag, &err)),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || {
            let value = Value::deserialize(deserializer)?;
            Node::from_value(value).map_err(D::Error::custom)
        })
    }
}

/// Deepest `[`/`{` nesting in `text`, skipping brackets inside strings.
///
/// Runs without recursion so that it can vet input before the parser does.
fn nesting_depth(text: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in text.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}
