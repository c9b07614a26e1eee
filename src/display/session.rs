//! Session display formatting
//!
//! Formats the lists and variables of a session for terminal output.

use crate::diagnostics::DiagnosticEntry;
use crate::models::{SessionData, SessionList, Variable};

/// Format a full dump of a session: every list, then every variable
pub fn format_session(data: &SessionData) -> String {
    if data.is_empty() {
        return "Session is empty.\n".to_string();
    }

    let mut output = String::new();

    output.push_str(&format!("Lists ({})\n", data.lists.len()));
    if data.lists.is_empty() {
        output.push_str("  (none)\n");
    }
    for list in &data.lists {
        output.push_str(&format_list(list));
    }

    output.push('\n');
    output.push_str(&format!("Variables ({})\n", data.variables.len()));
    if data.variables.is_empty() {
        output.push_str("  (none)\n");
    } else {
        output.push_str(&format_variables(&data.variables));
    }

    output
}

/// Format one list as an indented index/type/value table
pub fn format_list(list: &SessionList) -> String {
    let mut output = format!("  {} [{}]\n", list.name, list.len());

    let index_width = list
        .entries()
        .last()
        .map(|e| e.index.to_string().len())
        .unwrap_or(1)
        .max(1);

    for entry in list.entries() {
        output.push_str(&format!(
            "    {:>index_width$}  {:<7}  {}\n",
            entry.index,
            entry.kind.name(),
            entry.content,
            index_width = index_width,
        ));
    }

    output
}

/// Format variables as a name/type/value table
pub fn format_variables(variables: &[Variable]) -> String {
    let name_width = variables
        .iter()
        .map(|v| v.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "  {:<name_width$}  {:<7}  {}\n",
        "Name",
        "Type",
        "Value",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "  {:-<name_width$}  {:-<7}  {:-<5}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for var in variables {
        output.push_str(&format!(
            "  {:<name_width$}  {:<7}  {}\n",
            var.name,
            var.kind.name(),
            var.content,
            name_width = name_width,
        ));
    }

    output
}

/// Format journal entries, oldest first
pub fn format_history(entries: &[DiagnosticEntry]) -> String {
    if entries.is_empty() {
        return "No diagnostics recorded.\n".to_string();
    }

    entries
        .iter()
        .map(|e| format!("{}\n", e.format_human_readable()))
        .collect()
}
