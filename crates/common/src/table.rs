use serde::Serialize;
use serde_json::Value;

/// Column metadata for a generic table view.
///
/// `key` is a dotted path into the serialized row (`subject.name`, `roles.0.name`).
/// `label` is resolved when the header list is built; rebuild the list after a
/// locale change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableHeader {
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl TableHeader {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Implemented by every row type that is shown in a paginated table.
pub trait TableResource: Serialize {
    /// Ordered column descriptors with labels produced by `translate`.
    fn table_header(translate: &dyn Fn(&str) -> String) -> Vec<TableHeader>;
}

/// Looks up a dotted path in a serialized row.
pub fn cell_value<T: Serialize>(row: &T, key: &str) -> Option<Value> {
    let root = serde_json::to_value(row).ok()?;
    let mut current = &root;
    for segment in key.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current.clone())
}

/// Display text for a cell. Missing paths and nulls render empty.
pub fn cell_text<T: Serialize>(row: &T, key: &str) -> String {
    cell_value(row, key).map(|v| render(&v)).unwrap_or_default()
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(render).collect::<Vec<_>>().join(", "),
        // Nested entities show their name when they have one.
        Value::Object(map) => match map.get("name").or_else(|| map.get("fullName")) {
            Some(name) => render(name),
            None => value.to_string(),
        },
    }
}
