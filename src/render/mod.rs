//! Output Renderers
//!
//! Deterministic projections of the documentation model into each supported
//! output format. Every renderer is a pure function of the `DocSet`; HTML and
//! Markdown are textual post-passes over the tree-text rendering.

pub mod html;
pub mod json;
pub mod sql;
pub mod tree;
pub mod xml;

use serde::{Deserialize, Serialize};

use crate::model::DocSet;
use crate::types::Result;

/// Comma-separated list of accepted format tokens, for error messages.
pub const VALID_FORMATS: &str = "txt, json, xml, mysql, html, md";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    /// Indented plain-text tree
    #[default]
    #[serde(rename = "txt")]
    Text,
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "xml")]
    Xml,
    /// Relational-table INSERT statements
    #[serde(rename = "mysql")]
    Mysql,
    #[serde(rename = "html")]
    Html,
    #[serde(rename = "md")]
    Markdown,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "txt"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Xml => write!(f, "xml"),
            OutputFormat::Mysql => write!(f, "mysql"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Markdown => write!(f, "md"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "xml" => Ok(OutputFormat::Xml),
            "mysql" => Ok(OutputFormat::Mysql),
            "html" => Ok(OutputFormat::Html),
            "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "{} is an invalid format. Valid values: {}",
                s, VALID_FORMATS
            )),
        }
    }
}

/// Render a documentation set in the requested format.
pub fn render(set: &DocSet, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => tree::render_set(set),
        OutputFormat::Json => json::render_set(set)?,
        OutputFormat::Xml => xml::render_set(set),
        OutputFormat::Mysql => sql::render_set(set),
        OutputFormat::Html => html::render_html(set),
        OutputFormat::Markdown => html::render_markdown(set),
    })
}
