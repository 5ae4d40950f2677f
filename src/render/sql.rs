//! Relational-SQL Renderer
//!
//! Emits the fixed four-table schema (`files`, `classes`, `functions`,
//! `args`) as DDL preceded by unconditional drop statements, followed by
//! batched INSERT statements. Function and class ids are globally monotonic
//! across the whole documentation set; argument rows carry a zero-based
//! declaration order. An entity with zero children emits no INSERT for the
//! child table.
//!
//! String values are single-quoted with embedded quotes doubled; values that
//! parse as integers or floats are emitted unquoted.

use indexmap::IndexMap;
use serde_json::Value;

use crate::constants::docstring::MISSING;
use crate::model::{ClassDoc, DocSet, FunctionDoc};

use super::tree::display_literal;

/// Schema emitted ahead of the INSERT statements. Kept byte-identical to the
/// historical output.
const CREATE_STATEMENT: &str = "
        DROP TABLE IF EXISTS `files`;
        DROP TABLE IF EXISTS `classes`;
        DROP TABLE IF EXISTS `functions`;
        DROP TABLE IF EXISTS `args`;
        CREATE TABLE `files` (
            `id` INT(11) NOT NULL AUTO_INCREMENT,
            `name` VARCHAR(50) NULL DEFAULT NULL,
            PRIMARY KEY (`id`)
        );
        CREATE TABLE `classes` (
            `id` INT(11) NOT NULL AUTO_INCREMENT,
            `fileId` INT(11) NOT NULL,
            `name` VARCHAR(50) NOT NULL,
            `docstring` LONGTEXT NULL,
            PRIMARY KEY (`id`)
        );
        CREATE TABLE `functions` (
            `id` INT(11) NOT NULL AUTO_INCREMENT,
            `classId` INT(11) NULL DEFAULT NULL,
            `fileId` INT(11) NOT NULL,
            `name` VARCHAR(50) NOT NULL,
            `docstring` LONGTEXT NULL,
            PRIMARY KEY (`id`)
        );
        CREATE TABLE `args` (
            `id` INT(11) NOT NULL AUTO_INCREMENT,
            `functionId` INT(11) NOT NULL,
            `order` INT(11) NOT NULL,
            `name` TEXT NOT NULL,
            `type` VARCHAR(50) NULL DEFAULT NULL,
            `value` VARCHAR(50) NULL DEFAULT NULL,
            PRIMARY KEY (`id`)
        );
    ";

/// Sequential id assignment for one rendering invocation.
///
/// File, function, and class ids are separate 1-based sequences; function
/// and class ids never reset across modules. Assigned ids are recorded under
/// `"<module>.<name>"` keys.
#[derive(Debug)]
pub struct IdAllocator {
    next_function: u32,
    next_class: u32,
    files: IndexMap<String, u32>,
    functions: IndexMap<String, u32>,
    classes: IndexMap<String, u32>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            next_function: 1,
            next_class: 1,
            files: IndexMap::new(),
            functions: IndexMap::new(),
            classes: IndexMap::new(),
        }
    }

    fn allocate_file(&mut self, module: &str) -> u32 {
        let id = self.files.len() as u32 + 1;
        self.files.insert(module.to_string(), id);
        id
    }

    fn allocate_function(&mut self, module: &str, name: &str) -> u32 {
        let id = self.next_function;
        self.next_function += 1;
        self.functions.insert(format!("{}.{}", module, name), id);
        id
    }

    fn allocate_class(&mut self, module: &str, name: &str) -> u32 {
        let id = self.next_class;
        self.next_class += 1;
        self.classes.insert(format!("{}.{}", module, name), id);
        id
    }

    fn file_id(&self, module: &str) -> u32 {
        self.files.get(module).copied().unwrap_or(0)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a full documentation set as SQL text.
pub fn render_set(set: &DocSet) -> String {
    let mut ids = IdAllocator::new();
    let mut sql = String::from(CREATE_STATEMENT);

    if set.is_empty() {
        return sql;
    }

    let file_rows: Vec<String> = set
        .iter()
        .map(|(name, _)| {
            let id = ids.allocate_file(name);
            format!("({}, '{}')", id, escape(name))
        })
        .collect();
    sql.push_str(&format!(
        "INSERT INTO files (id, name) VALUES {};\n",
        file_rows.join(", ")
    ));

    for (name, module) in set.iter() {
        insert_functions(&mut sql, &mut ids, name, &module.functions, None);
        insert_classes(&mut sql, &mut ids, name, &module.classes);
    }

    sql
}

fn insert_functions(
    sql: &mut String,
    ids: &mut IdAllocator,
    module: &str,
    functions: &IndexMap<String, FunctionDoc>,
    class_id: Option<u32>,
) {
    if functions.is_empty() {
        return;
    }

    let file_id = ids.file_id(module);
    let class_ref = class_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "null".to_string());

    let mut function_rows = Vec::new();
    let mut arg_rows = Vec::new();

    for (name, func) in functions {
        let id = ids.allocate_function(module, name);
        function_rows.push(format!(
            "({}, {}, {}, '{}', '{}')",
            id,
            class_ref,
            file_id,
            escape(name),
            escape(func.docstring.as_deref().unwrap_or(MISSING))
        ));

        for (order, arg) in func.args.iter().enumerate() {
            arg_rows.push(format!(
                "({}, {}, '{}', '{}', {})",
                id,
                order,
                escape(&arg.name),
                escape(&arg.type_name),
                value_literal(arg.default.as_ref())
            ));
        }
    }

    sql.push_str(&format!(
        "INSERT INTO functions VALUES {};\n",
        function_rows.join(", ")
    ));
    if !arg_rows.is_empty() {
        sql.push_str(&format!(
            "INSERT INTO args (`functionId`, `order`, `name`, `type`, `value`) VALUES {};\n",
            arg_rows.join(", ")
        ));
    }
}

fn insert_classes(
    sql: &mut String,
    ids: &mut IdAllocator,
    module: &str,
    classes: &IndexMap<String, ClassDoc>,
) {
    if classes.is_empty() {
        return;
    }

    let file_id = ids.file_id(module);
    let mut class_rows = Vec::new();
    let mut method_sql = String::new();

    for (name, class) in classes {
        let id = ids.allocate_class(module, name);
        class_rows.push(format!(
            "({}, {}, '{}', '{}')",
            id,
            file_id,
            escape(name),
            escape(class.docstring.as_deref().unwrap_or(MISSING))
        ));

        insert_functions(&mut method_sql, ids, module, &class.methods, Some(id));
    }

    sql.push_str(&format!(
        "INSERT INTO classes VALUES {};\n",
        class_rows.join(", ")
    ));
    sql.push_str(&method_sql);
}

/// A default value as a SQL literal: absent -> `null`, numeric text
/// unquoted, everything else single-quoted.
fn value_literal(default: Option<&Value>) -> String {
    match default {
        None | Some(Value::Null) => "null".to_string(),
        Some(value) => {
            let text = display_literal(value);
            if text.parse::<i64>().is_ok() || text.parse::<f64>().is_ok() {
                text
            } else {
                format!("'{}'", escape(&text))
            }
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('\'', "''")
}
