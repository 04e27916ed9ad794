/// Placeholder replaced by the JSON report table.
pub const TABLE_PLACEHOLDER: &str = "table_json";

/// Substitute `$table_json` (or `${table_json}`) in `template`.
///
/// `$$` is an escaped dollar sign. Any other `$` is copied through untouched,
/// which keeps inline scripts in the template intact.
pub fn render_template(template: &str, table_json: &str) -> String {
    let mut out = String::with_capacity(template.len() + table_json.len());
    let mut rest = template;

    while let Some(at) = rest.find('$') {
        out.push_str(&rest[..at]);
        let after = &rest[at + 1..];

        if let Some(tail) = after.strip_prefix('$') {
            out.push('$');
            rest = tail;
        } else if let Some(tail) = after
            .strip_prefix('{')
            .and_then(|s| s.strip_prefix(TABLE_PLACEHOLDER))
            .and_then(|s| s.strip_prefix('}'))
        {
            out.push_str(table_json);
            rest = tail;
        } else if let Some(tail) = after
            .strip_prefix(TABLE_PLACEHOLDER)
            .filter(|s| !s.starts_with(is_identifier_char))
        {
            out.push_str(table_json);
            rest = tail;
        } else {
            out.push('$');
            rest = after;
        }
    }

    out.push_str(rest);
    out
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
