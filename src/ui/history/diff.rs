use crate::hotspot::FieldDiff;

/// One-line description of a field change.
pub fn describe_diff(diff: &FieldDiff) -> String {
    let field = field_label(&diff.key);
    match (diff.new_value.as_deref(), diff.old_value.as_deref()) {
        (Some(new), Some(old)) => format!("{field}: {new} (was {old})"),
        (Some(new), None) => format!("{field} changed to {new}"),
        (None, Some(old)) => format!("{field} removed (was {old})"),
        (None, None) => format!("{field} changed"),
    }
}

fn field_label(key: &str) -> String {
    let words = key.replace(['_', '-'], " ");
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
