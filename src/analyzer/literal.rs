//! Safe Literal Evaluation
//!
//! Evaluates default-value expressions to literal data, the way a
//! `literal_eval` front-end would: numbers, strings, booleans, `None`, and
//! displays built purely from those. Anything that would require executing
//! code - names, calls, attribute access, comprehensions - is rejected.

use serde_json::{Map, Number, Value};
use tree_sitter::Node;

/// An expression that is not a compile-time literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonLiteralExpr {
    pub expression: String,
}

impl NonLiteralExpr {
    fn from_node(node: Node, source: &[u8]) -> Self {
        Self {
            expression: node_text(node, source).to_string(),
        }
    }
}

impl std::fmt::Display for NonLiteralExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "non-literal expression `{}`", self.expression)
    }
}

impl std::error::Error for NonLiteralExpr {}

fn node_text<'a>(node: Node, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// Evaluate an expression node to literal data.
///
/// Tuples and sets map to JSON arrays; dictionary keys are stringified.
pub fn literal_eval(node: Node, source: &[u8]) -> Result<Value, NonLiteralExpr> {
    match node.kind() {
        "string" => Ok(Value::String(string_value(node, source))),
        "concatenated_string" => {
            let mut cursor = node.walk();
            let mut text = String::new();
            for part in node.named_children(&mut cursor) {
                if part.kind() == "string" {
                    text.push_str(&string_value(part, source));
                } else {
                    return Err(NonLiteralExpr::from_node(node, source));
                }
            }
            Ok(Value::String(text))
        }
        "integer" => parse_integer(node_text(node, source))
            .map(Value::from)
            .ok_or_else(|| NonLiteralExpr::from_node(node, source)),
        "float" => {
            let text = node_text(node, source).replace('_', "");
            text.parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .ok_or_else(|| NonLiteralExpr::from_node(node, source))
        }
        "true" => Ok(Value::Bool(true)),
        "false" => Ok(Value::Bool(false)),
        "none" => Ok(Value::Null),
        "unary_operator" => eval_unary(node, source),
        "parenthesized_expression" => {
            let inner = node
                .named_child(0)
                .ok_or_else(|| NonLiteralExpr::from_node(node, source))?;
            literal_eval(inner, source)
        }
        "list" | "tuple" | "set" => {
            let mut cursor = node.walk();
            let mut items = Vec::new();
            for child in node.named_children(&mut cursor) {
                items.push(literal_eval(child, source)?);
            }
            Ok(Value::Array(items))
        }
        "dictionary" => {
            let mut cursor = node.walk();
            let mut map = Map::new();
            for child in node.named_children(&mut cursor) {
                if child.kind() != "pair" {
                    return Err(NonLiteralExpr::from_node(node, source));
                }
                let key = child
                    .child_by_field_name("key")
                    .ok_or_else(|| NonLiteralExpr::from_node(child, source))?;
                let value = child
                    .child_by_field_name("value")
                    .ok_or_else(|| NonLiteralExpr::from_node(child, source))?;

                let key = match literal_eval(key, source)? {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                map.insert(key, literal_eval(value, source)?);
            }
            Ok(Value::Object(map))
        }
        _ => Err(NonLiteralExpr::from_node(node, source)),
    }
}

fn eval_unary(node: Node, source: &[u8]) -> Result<Value, NonLiteralExpr> {
    let operator = node
        .child_by_field_name("operator")
        .map(|op| node_text(op, source).to_string())
        .unwrap_or_default();
    let argument = node
        .child_by_field_name("argument")
        .ok_or_else(|| NonLiteralExpr::from_node(node, source))?;

    let value = literal_eval(argument, source)?;
    match (operator.as_str(), &value) {
        ("+", Value::Number(_)) => Ok(value),
        ("-", Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::from(-i))
            } else if let Some(f) = n.as_f64() {
                Number::from_f64(-f)
                    .map(Value::Number)
                    .ok_or_else(|| NonLiteralExpr::from_node(node, source))
            } else {
                Err(NonLiteralExpr::from_node(node, source))
            }
        }
        _ => Err(NonLiteralExpr::from_node(node, source)),
    }
}

/// Parse a Python integer literal: decimal, hex, octal, or binary,
/// with optional `_` separators.
fn parse_integer(text: &str) -> Option<i64> {
    let text = text.replace('_', "");
    let lower = text.to_lowercase();

    if let Some(hex) = lower.strip_prefix("0x") {
        i64::from_str_radix(hex, 16).ok()
    } else if let Some(oct) = lower.strip_prefix("0o") {
        i64::from_str_radix(oct, 8).ok()
    } else if let Some(bin) = lower.strip_prefix("0b") {
        i64::from_str_radix(bin, 2).ok()
    } else {
        text.parse::<i64>().ok()
    }
}

/// Cooked content of a `string` node: the text between its `string_start`
/// and `string_end` delimiters. Handles single, triple, and prefixed quotes.
pub fn string_value(node: Node, source: &[u8]) -> String {
    let mut cursor = node.walk();
    let mut start = None;
    let mut end = None;
    for child in node.children(&mut cursor) {
        match child.kind() {
            "string_start" => start = Some(child.end_byte()),
            "string_end" => end = Some(child.start_byte()),
            _ => {}
        }
    }

    match (start, end) {
        (Some(s), Some(e)) if s <= e => String::from_utf8_lossy(&source[s..e]).into_owned(),
        // Grammar did not expose delimiters; fall back to trimming quote chars.
        _ => node_text(node, source)
            .trim_matches(|c| c == '"' || c == '\'')
            .to_string(),
    }
}
