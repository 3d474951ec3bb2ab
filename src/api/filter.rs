//! SoftLayer object filter building
//!
//! Filters are declared against dotted property paths and folded into the
//! nested JSON document the API expects in `objectFilter`.

use serde_json::{Map, Value, json};

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    String(String),
    Integer(i64),
    Boolean(bool),
}

impl FilterValue {
    fn to_json(&self) -> Value {
        match self {
            FilterValue::String(s) => Value::String(s.clone()),
            FilterValue::Integer(i) => json!(i),
            FilterValue::Boolean(b) => Value::Bool(*b),
        }
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::String(s)
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::String(s.to_string())
    }
}

impl From<i64> for FilterValue {
    fn from(i: i64) -> Self {
        FilterValue::Integer(i)
    }
}

impl From<u64> for FilterValue {
    fn from(i: u64) -> Self {
        FilterValue::Integer(i as i64)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        FilterValue::Boolean(b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Eq(FilterValue),
    In(Vec<FilterValue>),
    DateAfter(String),
    OrderBy(SortDirection),
    /// Pre-rendered operation string such as `_= value` or `*= value`.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    path: String,
    operation: Operation,
}

impl Filter {
    pub fn eq(path: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self {
            path: path.into(),
            operation: Operation::Eq(value.into()),
        }
    }

    pub fn in_list<V: Into<FilterValue>>(path: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self {
            path: path.into(),
            operation: Operation::In(values.into_iter().map(Into::into).collect()),
        }
    }

    pub fn date_after(path: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            operation: Operation::DateAfter(date.into()),
        }
    }

    pub fn order_by(path: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            path: path.into(),
            operation: Operation::OrderBy(direction),
        }
    }

    /// Filter from free-form user input.
    ///
    /// `*foo*` matches a substring, `foo*` a prefix, `*foo` a suffix and
    /// anything else a case-insensitive exact match.
    pub fn query(path: impl Into<String>, input: &str) -> Self {
        let trimmed = input.trim();
        let starts = trimmed.starts_with('*');
        let ends = trimmed.ends_with('*') && trimmed.len() > 1;
        let value = trimmed.trim_matches('*');
        let operation = match (starts, ends) {
            (true, true) => format!("*= {}", value),
            (false, true) => format!("^= {}", value),
            (true, false) => format!("$= {}", value),
            (false, false) => format!("_= {}", value),
        };
        Self {
            path: path.into(),
            operation: Operation::Raw(operation),
        }
    }

    fn leaf(&self) -> Map<String, Value> {
        let mut leaf = Map::new();
        match &self.operation {
            Operation::Eq(value) => {
                leaf.insert("operation".into(), value.to_json());
            }
            Operation::In(values) => {
                leaf.insert("operation".into(), json!("in"));
                leaf.insert(
                    "options".into(),
                    json!([{ "name": "data", "value": values.iter().map(FilterValue::to_json).collect::<Vec<_>>() }]),
                );
            }
            Operation::DateAfter(date) => {
                leaf.insert("operation".into(), json!("greaterThanDate"));
                leaf.insert("options".into(), json!([{ "name": "date", "value": [date] }]));
            }
            Operation::OrderBy(direction) => {
                leaf.insert("operation".into(), json!("orderBy"));
                leaf.insert("options".into(), json!([{ "name": "sort", "value": [direction.as_str()] }]));
            }
            Operation::Raw(raw) => {
                leaf.insert("operation".into(), Value::String(raw.clone()));
            }
        }
        leaf
    }
}

/// A set of filters that build into one nested `objectFilter` document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectFilter {
    filters: Vec<Filter>,
}

impl ObjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn push(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn build(&self) -> Value {
        let mut root = Map::new();
        for filter in &self.filters {
            let segments: Vec<&str> = filter.path.split('.').collect();
            insert_at(&mut root, &segments, filter.leaf());
        }
        Value::Object(root)
    }

    pub fn to_json_string(&self) -> String {
        self.build().to_string()
    }
}

fn insert_at(node: &mut Map<String, Value>, segments: &[&str], leaf: Map<String, Value>) {
    match segments.split_first() {
        None => node.extend(leaf),
        Some((head, rest)) => {
            let child = node
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !child.is_object() {
                *child = Value::Object(Map::new());
            }
            if let Value::Object(map) = child {
                insert_at(map, rest, leaf);
            }
        }
    }
}
