//! XML Renderer
//!
//! Wraps the tree-text content model in a fixed schema:
//! `<docs><module><class><docstring/><function>...</function></class>...</module></docs>`.
//! The missing-docstring sentinel surfaces here as element content.
//!
//! Attribute values are interpolated without escaping reserved XML
//! characters, preserving the historical output format (see DESIGN.md).

use crate::constants::docstring::MISSING;
use crate::model::{ClassDoc, DocSet, FunctionDoc, ModuleDoc};

use super::tree::display_literal;

use indexmap::IndexMap;

/// Render a full documentation set.
pub fn render_set(set: &DocSet) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<docs>\n");
    for (_, module) in set.iter() {
        write_module(&mut xml, module);
    }
    xml.push_str("</docs>");
    xml
}

/// Render a single module entry inside the `<docs>` wrapper.
pub fn render_module(module: &ModuleDoc) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<docs>\n");
    write_module(&mut xml, module);
    xml.push_str("</docs>");
    xml
}

fn write_module(xml: &mut String, module: &ModuleDoc) {
    xml.push_str(&format!("\t<module name='{}'>\n", module.name));
    write_classes(xml, &module.classes, 2);
    write_functions(xml, &module.functions, 2);
    xml.push_str("\t</module>\n");
}

fn write_classes(xml: &mut String, classes: &IndexMap<String, ClassDoc>, indent: usize) {
    for (name, class) in classes {
        let tabs = "\t".repeat(indent);
        xml.push_str(&format!("{}<class name='{}'>\n", tabs, name));
        xml.push_str(&format!(
            "{}\t<docstring>{}</docstring>\n",
            tabs,
            class.docstring.as_deref().unwrap_or(MISSING)
        ));
        write_functions(xml, &class.methods, indent + 1);
        xml.push_str(&format!("{}</class>\n", tabs));
    }
}

fn write_functions(xml: &mut String, functions: &IndexMap<String, FunctionDoc>, indent: usize) {
    for (name, func) in functions {
        let tabs = "\t".repeat(indent);
        xml.push_str(&format!("{}<function name='{}'>\n", tabs, name));
        xml.push_str(&format!(
            "{}\t<docstring>{}</docstring>\n",
            tabs,
            func.docstring.as_deref().unwrap_or(MISSING)
        ));

        for arg in &func.args {
            let value = arg
                .default
                .as_ref()
                .map(display_literal)
                .unwrap_or_else(|| "None".to_string());
            xml.push_str(&format!(
                "{}\t<arg name='{}' type='{}' value='{}'/>\n",
                tabs, arg.name, arg.type_name, value
            ));
        }

        xml.push_str(&format!("{}</function>\n", tabs));
    }
}
