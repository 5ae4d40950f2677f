//! JSON Renderer
//!
//! Serializes the documentation set verbatim; the model is data-equivalent
//! to JSON by construction, so the output round-trips losslessly.

use crate::model::DocSet;
use crate::types::Result;

pub fn render_set(set: &DocSet) -> Result<String> {
    Ok(serde_json::to_string(set)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Argument, ClassDoc, FunctionDoc, ModuleDoc};
    use serde_json::{Value, json};

    fn sample_set() -> DocSet {
        let mut func = FunctionDoc::new("f");
        func.docstring = Some("doc".to_string());
        func.args.push(Argument::new("a", "any"));
        func.args
            .push(Argument::new("b", "int").with_default(json!(5)));
        func.args
            .push(Argument::new("c", "any").with_default(Value::Null));

        let mut class = ClassDoc::new("C");
        class.methods.insert("f".into(), func.clone());

        let mut module = ModuleDoc::new("pkg.mod");
        module.functions.insert("f".into(), func);
        module.classes.insert("C".into(), class);

        let mut set = DocSet::new();
        set.insert(module);
        set.insert(ModuleDoc::new("pkg.empty"));
        set
    }

    #[test]
    fn test_round_trip_law() {
        let set = sample_set();
        let text = render_set(&set).unwrap();
        let back: DocSet = serde_json::from_str(&text).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn test_undocumented_entity_serializes_null_docstring() {
        let mut module = ModuleDoc::new("m");
        module.functions.insert("f".into(), FunctionDoc::new("f"));
        let mut set = DocSet::new();
        set.insert(module);

        let text = render_set(&set).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["m"]["functions"]["f"]["docstring"], Value::Null);
    }
}
