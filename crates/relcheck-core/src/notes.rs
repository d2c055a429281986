//! Turns the markdown-ish body of a release into the HTML fragment shown
//! next to an update notice.
//!
//! Only two line forms are rewritten: a top-level `# ` heading becomes a
//! `<strong>` line and a `- ` list item gets a bullet entity. The output is
//! not escaped, so it must be rendered in a context that tolerates
//! untrusted HTML.

const HEADING_PREFIX: &str = "# ";
const LIST_ITEM_PREFIX: &str = "- ";
const BULLET: &str = "&bull; ";

/// Format release notes for display, or `None` when there are none.
#[must_use]
pub fn format_release_notes(body: Option<&str>) -> Option<String> {
    let body = body.filter(|body| !body.is_empty())?;

    let lines: Vec<String> = body.split('\n').map(format_line).collect();
    Some(lines.join("\n"))
}

fn format_line(line: &str) -> String {
    if let Some(heading) = line.strip_prefix(HEADING_PREFIX) {
        format!("<strong>{heading}</strong>")
    } else if let Some(item) = line.strip_prefix(LIST_ITEM_PREFIX) {
        format!("{BULLET}{item}")
    } else {
        line.to_string()
    }
}
