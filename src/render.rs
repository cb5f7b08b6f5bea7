//! Turn string tables and lists into text that reads well inside a log line.

/// Indentation placed before each `key: value` pair by [`render_map`].
const MAP_INDENT: &str = "\n        ";

/// Render each pair as `"\n        key: value"`, in the caller's iteration order.
///
/// Returns an empty string when there are no pairs. Works with
/// `&HashMap<String, String>`, `&BTreeMap<..>`, or any iterator of pairs.
pub fn render_map<I, K, V>(entries: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::new();
    for (key, value) in entries {
        out.push_str(MAP_INDENT);
        out.push_str(key.as_ref());
        out.push_str(": ");
        out.push_str(value.as_ref());
    }
    out
}

/// Join items with `", "`, in iteration order.
pub fn render_list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(item.as_ref());
    }
    out
}
