use indexmap::IndexMap;

/// Ordered HTML attributes.
///
/// A `None` value renders as a valueless attribute (`<div hidden>`). Inserting
/// a name that is already present replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<String, Option<String>>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), Some(value.into()));
    }

    /// Inserts `name` when `value` is present; otherwise leaves the set untouched.
    pub fn insert_opt(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.insert(name, value);
        }
    }

    /// Inserts a valueless attribute when `enabled` is true.
    pub fn insert_flag(&mut self, name: &str, enabled: bool) {
        if enabled {
            self.entries.insert(name.to_string(), None);
        }
    }

    /// Copies every entry of `other` into `self`, overriding existing names.
    pub fn extend(&mut self, other: &Attributes) {
        for (name, value) in &other.entries {
            self.entries.insert(name.clone(), value.clone());
        }
    }

    /// Returns `Some(None)` for a valueless attribute and `None` when absent.
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.entries.get(name).map(Option::as_deref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the attributes as they appear inside an opening tag, each
    /// preceded by a single space.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(name, value)| match value {
                Some(value) => format!(" {}=\"{}\"", name, escape_html(value)),
                None => format!(" {}", name),
            })
            .collect()
    }
}

/// Escapes text for use inside a double-quoted attribute value.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
