//! Tree-Text Renderer
//!
//! Renders a documentation set as an indented outline. Indentation is
//! strictly proportional to nesting depth: module at zero tabs, section
//! labels at one, names at two, docstring/argument labels and lines one and
//! two levels deeper. Class methods render two levels below top-level
//! functions.

use serde_json::Value;

use crate::constants::docstring::{PARAM_MARKER, RETURN_MARKER};
use crate::constants::render::EMPTY_MODULE_PLACEHOLDER;
use crate::constants::type_name;
use crate::model::{DocSet, FunctionDoc, ModuleDoc};

/// Render a full documentation set.
pub fn render_set(set: &DocSet) -> String {
    let mut out = String::new();
    for (_, module) in set.iter() {
        write_module(&mut out, module);
    }
    out
}

/// Render a single module entry.
pub fn render_module(module: &ModuleDoc) -> String {
    let mut out = String::new();
    write_module(&mut out, module);
    out
}

fn write_module(out: &mut String, module: &ModuleDoc) {
    out.push_str(&module.name);
    out.push('\n');

    if module.is_empty() {
        out.push('\t');
        out.push_str(EMPTY_MODULE_PLACEHOLDER);
        out.push_str("\n\n");
    }

    if !module.classes.is_empty() {
        out.push_str("\tClasses:\n");

        for (name, class) in &module.classes {
            out.push_str("\t\t");
            out.push_str(name);
            out.push('\n');

            if let Some(doc) = &class.docstring {
                out.push_str("\t\t\tDocstring:\n");
                for line in doc.lines() {
                    out.push_str("\t\t\t\t");
                    out.push_str(&line.replace('\t', ""));
                    out.push('\n');
                }
            }

            out.push_str("\t\t\tMethods:\n");
            for (method_name, method) in &class.methods {
                write_function(out, method_name, method, 4);
            }
        }
    }

    if !module.functions.is_empty() {
        out.push_str("\tFunctions:\n");
        for (func_name, func) in &module.functions {
            write_function(out, func_name, func, 2);
        }
    }
}

/// Render one function at the given tab depth. Explicit accumulator and
/// depth parameters; no captured state.
fn write_function(out: &mut String, name: &str, func: &FunctionDoc, depth: usize) {
    let base = "\t".repeat(depth);

    out.push_str(&base);
    out.push_str(name);
    out.push('\n');

    // A docstring that carries its own parameter/return markers already
    // enumerates the arguments; the block and labels are suppressed.
    let has_markers = func
        .docstring
        .as_deref()
        .is_some_and(|doc| doc.contains(PARAM_MARKER) || doc.contains(RETURN_MARKER));

    if let Some(doc) = &func.docstring {
        if !has_markers {
            out.push_str(&base);
            out.push_str("\tDocstring:\n");
        }
        for line in doc.lines() {
            let line = line
                .replace('\t', "")
                .replace(PARAM_MARKER, "")
                .replace(RETURN_MARKER, "");
            out.push_str(&base);
            out.push_str("\t\t");
            out.push_str(&line);
            out.push('\n');
        }
    }

    if !func.args.is_empty() && !has_markers {
        out.push_str(&base);
        out.push_str("\tArguments:\n");

        for arg in &func.args {
            out.push_str(&base);
            out.push_str("\t\t");
            out.push_str(&arg.name);
            if arg.type_name != type_name::ANY {
                out.push_str(" (");
                out.push_str(&arg.type_name);
                out.push(')');
            }
            if let Some(value) = &arg.default {
                out.push_str(" = ");
                out.push_str(&display_literal(value));
            }
            out.push('\n');
        }

        out.push('\n');
    }
}

/// Python-style display of a literal value: bare strings at the top level,
/// `repr` form inside collections.
pub fn display_literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => repr_literal(other),
    }
}

fn repr_literal(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => format!("'{}'", s),
        Value::Array(items) => {
            let inner: Vec<String> = items.iter().map(repr_literal).collect();
            format!("[{}]", inner.join(", "))
        }
        Value::Object(map) => {
            let inner: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("'{}': {}", k, repr_literal(v)))
                .collect();
            format!("{{{}}}", inner.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Argument, ClassDoc};
    use serde_json::json;

    fn greeter_module() -> ModuleDoc {
        let mut method = FunctionDoc::new("hello");
        method.docstring = Some("Say hello".to_string());
        method.args.push(Argument::new("name", "any"));

        let mut class = ClassDoc::new("Greeter");
        class.methods.insert("hello".into(), method);

        let mut module = ModuleDoc::new("greeting");
        module.classes.insert("Greeter".into(), class);
        module
    }

    #[test]
    fn test_greeter_scenario() {
        let output = render_module(&greeter_module());

        let greeter = output.find("Greeter").unwrap();
        let methods = output.find("Methods:").unwrap();
        let hello = output.find("hello").unwrap();
        assert!(greeter < methods && methods < hello);

        assert!(output.contains("Say hello"));
        assert!(output.contains("\t\t\t\t\t\tname\n"));
    }

    #[test]
    fn test_empty_module_placeholder() {
        let output = render_module(&ModuleDoc::new("hollow"));
        assert_eq!(
            output,
            "hollow\n\tThis File Does Not Contain Any Functions Or Classes.\n\n"
        );
    }

    #[test]
    fn test_argument_line_count_matches_arity() {
        let mut func = FunctionDoc::new("f");
        func.docstring = Some("plain docstring".to_string());
        func.args.push(Argument::new("a", "any"));
        func.args.push(Argument::new("b", "int"));
        func.args.push(Argument::new("c", "any").with_default(json!(3)));

        let mut module = ModuleDoc::new("m");
        module.functions.insert("f".into(), func);

        let output = render_module(&module);
        let arg_lines: Vec<&str> = output
            .lines()
            .skip_while(|l| !l.ends_with("Arguments:"))
            .skip(1)
            .take_while(|l| !l.is_empty())
            .collect();
        assert_eq!(arg_lines.len(), 3);
    }

    #[test]
    fn test_marker_docstring_suppresses_arguments_block() {
        let mut func = FunctionDoc::new("f");
        func.docstring = Some("Greets\n:param name: who to greet\n:return: nothing".to_string());
        func.args.push(Argument::new("name", "any"));

        let mut module = ModuleDoc::new("m");
        module.functions.insert("f".into(), func);

        let output = render_module(&module);
        assert!(!output.contains("Arguments:"));
        assert!(!output.contains("Docstring:"));
        assert!(!output.contains(":param "));
        assert!(!output.contains(":return:"));
        assert!(output.contains("name: who to greet"));
    }

    #[test]
    fn test_zero_argument_function_has_no_block() {
        let mut func = FunctionDoc::new("f");
        func.docstring = Some("doc".to_string());

        let mut module = ModuleDoc::new("m");
        module.functions.insert("f".into(), func);

        assert!(!render_module(&module).contains("Arguments:"));
    }

    #[test]
    fn test_type_and_default_suffixes() {
        let mut func = FunctionDoc::new("f");
        func.args.push(Argument::new("a", "any"));
        func.args.push(Argument::new("b", "int").with_default(json!(5)));
        func.args
            .push(Argument::new("c", "any").with_default(json!("hi")));

        let mut module = ModuleDoc::new("m");
        module.functions.insert("f".into(), func);

        let output = render_module(&module);
        assert!(output.contains("\t\t\ta\n"));
        assert!(output.contains("\t\t\tb (int) = 5\n"));
        assert!(output.contains("\t\t\tc = hi\n"));
    }

    #[test]
    fn test_display_literal_python_style() {
        assert_eq!(display_literal(&json!(null)), "None");
        assert_eq!(display_literal(&json!(true)), "True");
        assert_eq!(display_literal(&json!(5)), "5");
        assert_eq!(display_literal(&json!("raw")), "raw");
        assert_eq!(display_literal(&json!([1, "a"])), "[1, 'a']");
        assert_eq!(display_literal(&json!({"k": 1})), "{'k': 1}");
    }
}
