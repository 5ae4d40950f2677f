//! Python Module Extractor
//!
//! Walks a tree-sitter syntax tree and produces the normalized documentation
//! model for one source unit. Only top-level functions and classes are
//! considered; definitions nested inside function bodies are never examined.

use tree_sitter::Node;

use super::literal::{literal_eval, string_value};
use crate::constants::type_name;
use crate::model::{Argument, ClassDoc, FunctionDoc, ModuleDoc};
use crate::types::{DocError, Result};

/// Extraction policy flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Drop functions and classes without a docstring entirely.
    pub ignore_undocumented: bool,
}

pub struct PythonExtractor;

impl PythonExtractor {
    pub fn new() -> Result<Self> {
        // Validate that the grammar is available
        let _ = create_ts_parser()?;
        Ok(Self)
    }

    /// Extract the documentation model for one source unit.
    ///
    /// Returns `Ok(None)` for an empty source unit (skip, not an error).
    pub fn extract(
        &self,
        name: &str,
        content: &str,
        opts: &ExtractOptions,
    ) -> Result<Option<ModuleDoc>> {
        if content.is_empty() {
            return Ok(None);
        }

        let mut parser = create_ts_parser()?;
        let tree = parser
            .parse(content, None)
            .ok_or_else(|| DocError::parse(name, "failed to parse Python source"))?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(DocError::parse(name, "syntax error in Python source"));
        }

        let source = content.as_bytes();
        let mut module = ModuleDoc::new(name);

        let mut cursor = root.walk();
        for statement in root.named_children(&mut cursor) {
            match definition_node(statement) {
                Some(def) if def.kind() == "function_definition" => {
                    if let Some(func) = checked_function(def, source, false, opts)? {
                        module.functions.insert(func.name.clone(), func);
                    }
                }
                Some(def) if def.kind() == "class_definition" => {
                    if let Some(class) = extract_class(def, source, opts)? {
                        module.classes.insert(class.name.clone(), class);
                    }
                }
                _ => {}
            }
        }

        Ok(Some(module))
    }
}

/// Unwrap `decorated_definition` to the definition it decorates; a decorated
/// top-level def is still a top-level def.
fn definition_node(statement: Node) -> Option<Node> {
    match statement.kind() {
        "function_definition" | "class_definition" => Some(statement),
        "decorated_definition" => statement.child_by_field_name("definition"),
        _ => None,
    }
}

fn extract_class(node: Node, source: &[u8], opts: &ExtractOptions) -> Result<Option<ClassDoc>> {
    let name = field_text(node, "name", source);
    let body = node.child_by_field_name("body");

    let docstring = body.and_then(|b| docstring_of(b, source));
    if docstring.is_none() && opts.ignore_undocumented {
        return Ok(None);
    }

    let mut class = ClassDoc::new(name);
    class.docstring = docstring;

    // Methods are parsed with the identical routine used for top-level
    // functions, receiver excluded.
    if let Some(body) = body {
        let mut cursor = body.walk();
        for statement in body.named_children(&mut cursor) {
            if let Some(def) = definition_node(statement)
                && def.kind() == "function_definition"
                && let Some(method) = checked_function(def, source, true, opts)?
            {
                class.methods.insert(method.name.clone(), method);
            }
        }
    }

    Ok(Some(class))
}

/// Batch policy for non-literal defaults: the offending function is skipped
/// with a diagnostic instead of aborting the run. Other errors propagate.
fn checked_function(
    node: Node,
    source: &[u8],
    is_method: bool,
    opts: &ExtractOptions,
) -> Result<Option<FunctionDoc>> {
    match extract_function(node, source, is_method, opts) {
        Err(err @ DocError::NonLiteralDefault { .. }) => {
            tracing::warn!("skipping function: {}", err);
            Ok(None)
        }
        other => other,
    }
}

/// Extract one function definition.
///
/// Returns `Ok(None)` when the undocumented-entity filter drops it, and
/// `DocError::NonLiteralDefault` when a default expression cannot be
/// evaluated to literal data.
fn extract_function(
    node: Node,
    source: &[u8],
    is_method: bool,
    opts: &ExtractOptions,
) -> Result<Option<FunctionDoc>> {
    let name = field_text(node, "name", source);

    let docstring = node
        .child_by_field_name("body")
        .and_then(|body| docstring_of(body, source));
    if docstring.is_none() && opts.ignore_undocumented {
        return Ok(None);
    }

    let mut func = FunctionDoc::new(name.as_str());
    func.docstring = docstring;

    let mut defaults = Vec::new();
    if let Some(params) = node.child_by_field_name("parameters") {
        collect_parameters(params, source, is_method, &mut func.args, &mut defaults);
    }

    // The k-th-from-end default binds to the k-th-from-end argument,
    // reproducing Python's default-argument binding generically.
    let bound = func.args.len().min(defaults.len());
    let first = func.args.len() - bound;
    for (arg, default) in func.args[first..]
        .iter_mut()
        .zip(&defaults[defaults.len() - bound..])
    {
        let value = literal_eval(*default, source).map_err(|err| DocError::NonLiteralDefault {
            function: name.clone(),
            expression: err.expression,
        })?;
        arg.default = Some(value);
    }

    Ok(Some(func))
}

/// Collect positional parameters in declaration order, plus the default-value
/// expressions to be reverse-bound. Scanning stops at `*args` / `**kwargs` /
/// the bare `*` separator; a leading receiver is excluded in method context.
fn collect_parameters<'a>(
    params: Node<'a>,
    source: &[u8],
    is_method: bool,
    args: &mut Vec<Argument>,
    defaults: &mut Vec<Node<'a>>,
) {
    let mut cursor = params.walk();
    for (index, param) in params.named_children(&mut cursor).enumerate() {
        let (arg, default) = match param.kind() {
            "identifier" => (
                Argument::new(node_text(param, source), type_name::ANY),
                None,
            ),
            "typed_parameter" => {
                let Some(pattern) = param.named_child(0) else {
                    continue;
                };
                match pattern.kind() {
                    "identifier" => (
                        Argument::new(node_text(pattern, source), annotation_type(param, source)),
                        None,
                    ),
                    "list_splat_pattern" | "dictionary_splat_pattern" => break,
                    _ => continue,
                }
            }
            "default_parameter" => {
                let name = field_text(param, "name", source);
                (
                    Argument::new(name, type_name::ANY),
                    param.child_by_field_name("value"),
                )
            }
            "typed_default_parameter" => {
                let name = field_text(param, "name", source);
                (
                    Argument::new(name, annotation_type(param, source)),
                    param.child_by_field_name("value"),
                )
            }
            "positional_separator" => continue,
            // Positional parameters end here.
            "list_splat_pattern" | "dictionary_splat_pattern" | "keyword_separator" => break,
            _ => continue,
        };

        if index == 0 && is_method && (arg.name == "self" || arg.name == "cls") {
            continue;
        }

        args.push(arg);
        if let Some(default) = default {
            defaults.push(default);
        }
    }
}

/// Shallow static type summary of a parameter annotation: a bare identifier
/// yields its name, anything else is `"unknown"`.
fn annotation_type(param: Node, source: &[u8]) -> String {
    match param.child_by_field_name("type") {
        None => type_name::ANY.to_string(),
        Some(annotation) => {
            let expr = annotation.named_child(0).unwrap_or(annotation);
            if expr.kind() == "identifier" {
                node_text(expr, source).to_string()
            } else {
                type_name::UNKNOWN.to_string()
            }
        }
    }
}

/// The docstring of a body block. Only the very first statement is ever
/// inspected; if it is not a string expression there is no docstring.
fn docstring_of(body: Node, source: &[u8]) -> Option<String> {
    let mut cursor = body.walk();
    let first = body
        .named_children(&mut cursor)
        .find(|n| n.kind() != "comment")?;
    if first.kind() != "expression_statement" {
        return None;
    }
    let expr = first.named_child(0)?;
    if expr.kind() != "string" {
        return None;
    }
    Some(string_value(expr, source))
}

fn node_text<'a>(node: Node, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

fn field_text(node: Node, field: &str, source: &[u8]) -> String {
    node.child_by_field_name(field)
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default()
}

/// Create a tree-sitter parser configured for Python.
pub fn create_ts_parser() -> Result<tree_sitter::Parser> {
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&tree_sitter_python::LANGUAGE.into())
        .map_err(|e| DocError::Config(format!("failed to load Python grammar: {}", e)))?;
    Ok(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn extract(content: &str) -> ModuleDoc {
        extract_with(content, &ExtractOptions::default())
    }

    fn extract_with(content: &str, opts: &ExtractOptions) -> ModuleDoc {
        PythonExtractor::new()
            .unwrap()
            .extract("test.module", content, opts)
            .unwrap()
            .expect("non-empty module")
    }

    #[test]
    fn test_empty_source_is_skipped() {
        let extractor = PythonExtractor::new().unwrap();
        let result = extractor
            .extract("m", "", &ExtractOptions::default())
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_top_level_function() {
        let module = extract("def greet(name):\n    \"\"\"Say hello\"\"\"\n    pass\n");

        let func = &module.functions["greet"];
        assert_eq!(func.docstring.as_deref(), Some("Say hello"));
        assert_eq!(func.args.len(), 1);
        assert_eq!(func.args[0].name, "name");
        assert_eq!(func.args[0].type_name, "any");
        assert_eq!(func.args[0].default, None);
    }

    #[test]
    fn test_nested_functions_are_ignored() {
        let module = extract(
            "def outer():\n    \"\"\"doc\"\"\"\n    def inner():\n        pass\n    return inner\n",
        );

        assert!(module.functions.contains_key("outer"));
        assert!(!module.functions.contains_key("inner"));
    }

    #[test]
    fn test_default_binding_maps_trailing_arguments() {
        let module = extract("def f(a, b=5):\n    pass\n");

        let func = &module.functions["f"];
        assert_eq!(func.args[0].default, None);
        assert_eq!(func.args[1].default, Some(json!(5)));
    }

    #[test]
    fn test_default_binding_many_arguments() {
        let module = extract("def f(a, b, c, d='x', e=None):\n    pass\n");

        let func = &module.functions["f"];
        let defaults: Vec<Option<Value>> = func.args.iter().map(|a| a.default.clone()).collect();
        assert_eq!(
            defaults,
            vec![
                None,
                None,
                None,
                Some(json!("x")),
                Some(Value::Null),
            ]
        );
    }

    #[test]
    fn test_type_annotations() {
        let module = extract("def f(a, b: int, c: list[str], d: \"Forward\"):\n    pass\n");

        let types: Vec<&str> = module.functions["f"]
            .args
            .iter()
            .map(|a| a.type_name.as_str())
            .collect();
        assert_eq!(types, vec!["any", "int", "unknown", "unknown"]);
    }

    #[test]
    fn test_splat_parameters_end_positional_scan() {
        let module = extract("def f(a, *args, key=1, **kwargs):\n    pass\n");

        let func = &module.functions["f"];
        assert_eq!(func.args.len(), 1);
        assert_eq!(func.args[0].name, "a");
    }

    #[test]
    fn test_class_with_methods() {
        let module = extract(
            "class Greeter:\n    \"\"\"A greeter\"\"\"\n    def hello(self, name):\n        \"\"\"Say hello\"\"\"\n        pass\n",
        );

        let class = &module.classes["Greeter"];
        assert_eq!(class.docstring.as_deref(), Some("A greeter"));

        let method = &class.methods["hello"];
        assert_eq!(method.args.len(), 1);
        assert_eq!(method.args[0].name, "name");
    }

    #[test]
    fn test_receiver_excluded_only_for_methods() {
        let module = extract(
            "def free(self):\n    pass\nclass C:\n    def m(cls, x):\n        pass\n",
        );

        // Top-level functions keep a parameter that happens to be named self.
        assert_eq!(module.functions["free"].args.len(), 1);
        assert_eq!(module.classes["C"].methods["m"].args.len(), 1);
    }

    #[test]
    fn test_docstring_only_first_statement() {
        let module = extract("def f():\n    x = 1\n    \"\"\"not a docstring\"\"\"\n");
        assert_eq!(module.functions["f"].docstring, None);
    }

    #[test]
    fn test_multiline_docstring() {
        let module = extract("def f():\n    \"\"\"line one\n    line two\"\"\"\n    pass\n");
        assert_eq!(
            module.functions["f"].docstring.as_deref(),
            Some("line one\n    line two")
        );
    }

    #[test]
    fn test_decorated_definitions_are_top_level() {
        let module = extract(
            "@wraps\ndef f():\n    \"\"\"doc\"\"\"\n\n@register\nclass C:\n    \"\"\"doc\"\"\"\n",
        );

        assert!(module.functions.contains_key("f"));
        assert!(module.classes.contains_key("C"));
    }

    #[test]
    fn test_ignore_undocumented_drops_entities() {
        let source = "def documented():\n    \"\"\"doc\"\"\"\n\ndef bare():\n    pass\n\nclass Bare:\n    pass\n";

        let kept = extract_with(
            source,
            &ExtractOptions {
                ignore_undocumented: true,
            },
        );
        assert!(kept.functions.contains_key("documented"));
        assert!(!kept.functions.contains_key("bare"));
        assert!(kept.classes.is_empty());

        let all = extract(source);
        assert_eq!(all.functions.len(), 2);
        assert_eq!(all.functions["bare"].docstring, None);
        assert_eq!(all.classes.len(), 1);
    }

    #[test]
    fn test_non_literal_default_skips_function() {
        let module = extract("def ok(a=1):\n    pass\n\ndef bad(x=os.environ):\n    pass\n");

        assert!(module.functions.contains_key("ok"));
        assert!(!module.functions.contains_key("bad"));
    }

    #[test]
    fn test_syntax_error_is_a_parse_error() {
        let extractor = PythonExtractor::new().unwrap();
        let result = extractor.extract("broken", "def f(:\n", &ExtractOptions::default());
        assert!(matches!(result, Err(DocError::Parse { .. })));
    }

    proptest::proptest! {
        /// The k-th-from-end default always binds to the k-th-from-end
        /// argument, for any argument count and any trailing-default count.
        #[test]
        fn prop_default_binding(total in 1usize..8, defaults in 0usize..8) {
            let defaults = defaults.min(total);
            let first_default = total - defaults;

            let params: Vec<String> = (0..total)
                .map(|i| {
                    if i >= first_default {
                        format!("p{}={}", i, i * 10)
                    } else {
                        format!("p{}", i)
                    }
                })
                .collect();
            let source = format!("def f({}):\n    pass\n", params.join(", "));

            let module = extract(&source);
            let func = &module.functions["f"];
            proptest::prop_assert_eq!(func.args.len(), total);

            for (i, arg) in func.args.iter().enumerate() {
                if i >= first_default {
                    proptest::prop_assert_eq!(arg.default.clone(), Some(json!(i * 10)));
                } else {
                    proptest::prop_assert_eq!(arg.default.clone(), None);
                }
            }
        }
    }
}
