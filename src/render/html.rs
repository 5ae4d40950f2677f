//! HTML and Markdown Renderers
//!
//! Both are textual post-passes over the tree-text rendering: tabs become
//! four non-breaking spaces, line breaks become `<br>` (HTML, wrapped in one
//! `<div>`) or a doubled newline (Markdown).

use crate::constants::render::HTML_TAB;
use crate::model::DocSet;

use super::tree;

pub fn render_html(set: &DocSet) -> String {
    let text = tree::render_set(set);
    format!("<div>{}</div>", text.replace('\t', HTML_TAB).replace('\n', "<br>"))
}

pub fn render_markdown(set: &DocSet) -> String {
    tree::render_set(set)
        .replace('\t', HTML_TAB)
        .replace('\n', "\n\n")
}
