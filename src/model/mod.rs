//! Documentation Model
//!
//! The normalized in-memory representation of extracted source metadata:
//! module -> classes/functions -> arguments. Every renderer is a pure
//! projection of these types.
//!
//! All mappings are insertion-ordered (`IndexMap`) so that rendering and the
//! relational id assignment are deterministic for a given extraction order.
//! The model is data-equivalent to JSON by construction: mappings, ordered
//! sequences, strings, numbers, booleans, null.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One argument of a function or method.
///
/// Identity is the position within the owning function's argument list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    pub name: String,

    /// Shallow static type summary: `"any"` when unannotated, the identifier
    /// text for simple annotations, `"unknown"` for anything more complex.
    #[serde(rename = "type")]
    pub type_name: String,

    /// Default value as literal data. `None` means the argument has no
    /// default; `Some(Value::Null)` is an explicit `None` default. The two
    /// serialize differently (absent key vs `null`) so JSON round-trips.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_value"
    )]
    pub default: Option<Value>,
}

/// A present JSON `null` deserializes to `Some(Value::Null)`, not `None`.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Argument {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            default: None,
        }
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }
}

/// Documentation record for one function or method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDoc {
    pub name: String,

    /// `None` when no docstring was found. The `"N/A"` sentinel exists only
    /// at the rendering boundary.
    pub docstring: Option<String>,

    pub args: Vec<Argument>,
}

impl FunctionDoc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docstring: None,
            args: Vec::new(),
        }
    }
}

/// Documentation record for one class and its methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDoc {
    pub name: String,
    pub docstring: Option<String>,
    pub methods: IndexMap<String, FunctionDoc>,
}

impl ClassDoc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docstring: None,
            methods: IndexMap::new(),
        }
    }
}

/// Documentation record for one source unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDoc {
    /// Canonical dotted-path display name, derived from the file path
    /// relative to a configurable root.
    pub name: String,

    pub functions: IndexMap<String, FunctionDoc>,
    pub classes: IndexMap<String, ClassDoc>,
}

impl ModuleDoc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: IndexMap::new(),
            classes: IndexMap::new(),
        }
    }

    /// A module with neither classes nor functions renders as a placeholder.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.classes.is_empty()
    }
}

/// The full in-memory result of extracting all processed source units,
/// keyed by canonical module name.
///
/// Canonical names are unique within one set: inserting under an existing
/// name replaces the earlier entry (last-write-wins, accepted behavior).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocSet {
    modules: IndexMap<String, ModuleDoc>,
}

impl DocSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one module, replacing any earlier entry with the same name.
    pub fn insert(&mut self, module: ModuleDoc) {
        self.modules.insert(module.name.clone(), module);
    }

    pub fn get(&self, name: &str) -> Option<&ModuleDoc> {
        self.modules.get(name)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Modules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ModuleDoc)> {
        self.modules.iter()
    }
}

impl FromIterator<ModuleDoc> for DocSet {
    fn from_iter<I: IntoIterator<Item = ModuleDoc>>(iter: I) -> Self {
        let mut set = Self::new();
        for module in iter {
            set.insert(module);
        }
        set
    }
}
