//! Description Assembler — turns a `Selection` into one ordered plain-text document.
//!
//! Section order is fixed: task statement, optional detail, boilerplate, audience,
//! style block, tool line, colour accents, size, language block, decoration,
//! optimization bullets, quality requirements. Sections are separated by single
//! newlines inside a group and a blank line between groups.

use crate::composer::prompts::{
    AUDIENCE_PREFIX, BOILERPLATE_EXAMPLES, BOILERPLATE_SPECIFIC, COLOR_ACCENT, DETAIL_PREFIX,
    OPTIMIZATION_BLOCK, QUALITY_BLOCK, TASK_PREFIX,
};
use crate::composer::selection::Selection;

/// Builds the unclamped document for `selection`, trimmed of surrounding whitespace.
pub fn assemble_description(selection: &Selection) -> String {
    let mut doc = format!("{TASK_PREFIX}{}.", selection.topic);

    if let Some(detail) = selection.detail() {
        doc.push_str(&format!("\n\n{DETAIL_PREFIX}{detail}"));
    }

    doc.push_str(&format!("\n{BOILERPLATE_SPECIFIC}"));
    doc.push_str(&format!("\n{BOILERPLATE_EXAMPLES}"));
    doc.push_str(&format!(
        "\n{AUDIENCE_PREFIX}{}.",
        selection.audience.description()
    ));

    doc.push_str(&format!("\n\n{}", selection.style.instruction()));
    doc.push_str(&format!("\n{}", selection.tool.instruction()));
    doc.push_str(&format!("\n{COLOR_ACCENT}"));

    doc.push_str(&format!("\n\n{}", selection.size.instruction()));

    doc.push_str(&format!("\n\n{}", selection.language.instruction()));
    doc.push_str(&format!("\n{}", selection.decoration.instruction()));

    doc.push_str(&format!("\n\n{OPTIMIZATION_BLOCK}"));
    doc.push_str(&format!("\n\n{QUALITY_BLOCK}"));

    doc.trim().to_string()
}
