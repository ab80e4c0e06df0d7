//! Workflow command formatting.
//!
//! Commands are single stdout lines of the form
//! `::command key=value,key=value::message`.

use super::OutputError;
use uuid::Uuid;

/// Formats a workflow command line, without the trailing newline.
pub(crate) fn format_command(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{command}");

    if !properties.is_empty() {
        let rendered: Vec<String> = properties
            .iter()
            .map(|(key, value)| format!("{key}={}", escape_property(value)))
            .collect();
        line.push(' ');
        line.push_str(&rendered.join(","));
    }

    line.push_str("::");
    line.push_str(&escape_data(message));
    line
}

/// Formats a `name<<delimiter` block for an environment file such as
/// `GITHUB_OUTPUT`.
pub(crate) fn format_file_entry(name: &str, value: &str) -> Result<String, OutputError> {
    let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());

    if name.contains(&delimiter) {
        return Err(OutputError::DelimiterInName { delimiter });
    }
    if value.contains(&delimiter) {
        return Err(OutputError::DelimiterInValue { delimiter });
    }

    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
