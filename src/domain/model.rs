use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

use crate::utils::error::{Result, TourError};

/// A dynamically typed value as the tour prints it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
    Undefined,
    List(Vec<Value>),
}

impl Value {
    /// Category label printed next to a value, one per variant.
    pub fn type_label(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::Null => "null",
            Value::Undefined => "undefined",
            Value::List(_) => "list",
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Str(s) => !s.is_empty(),
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0 && !f.is_nan(),
            Value::Bool(b) => *b,
            Value::Null | Value::Undefined => false,
            Value::List(_) => true,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Inspection form used when a whole object is printed: strings quoted,
    /// lists bracketed.
    pub fn inspect(&self) -> String {
        match self {
            Value::Str(s) => format!("'{}'", s),
            Value::List(items) if items.is_empty() => "[]".to_string(),
            Value::List(items) => {
                let inner: Vec<String> = items.iter().map(Value::inspect).collect();
                format!("[ {} ]", inner.join(", "))
            }
            other => other.to_string(),
        }
    }
}

/// Renders a float the way the scripting host does: integral values without
/// a fraction, shortest round-trip digits otherwise.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let label = if value > 0.0 { "Infinity" } else { "-Infinity" };
        label.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => f.write_str(&format_number(*x)),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Null => f.write_str("null"),
            Value::Undefined => f.write_str("undefined"),
            Value::List(items) => {
                // null/undefined 在陣列轉字串時為空字串
                let parts: Vec<String> = items
                    .iter()
                    .map(|item| match item {
                        Value::Null | Value::Undefined => String::new(),
                        other => other.to_string(),
                    })
                    .collect();
                f.write_str(&parts.join(","))
            }
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

pub type MethodFn = Rc<dyn Fn(&Object) -> Value>;
pub type BoundFn = Rc<dyn Fn() -> Value>;

/// One entry of an [`Object`].
///
/// `Method` receives whichever object it is invoked on. `Bound` was closed
/// over its receiver when it was defined and never sees the call site.
#[derive(Clone)]
pub enum Member {
    Data(Value),
    Method(MethodFn),
    Bound(BoundFn),
}

impl Member {
    pub fn is_function(&self) -> bool {
        !matches!(self, Member::Data(_))
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Data(value) => f.debug_tuple("Data").field(value).finish(),
            Member::Method(_) => f.write_str("Method(..)"),
            Member::Bound(_) => f.write_str("Bound(..)"),
        }
    }
}

/// Keyed mapping that remembers insertion order.
#[derive(Debug, Clone, Default)]
pub struct Object {
    entries: IndexMap<String, Member>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut object = Self::new();
        for (key, value) in entries {
            object.set(key, value);
        }
        object
    }

    /// Adds a data entry, or overwrites it in place keeping its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), Member::Data(value.into()));
    }

    pub fn define_method(&mut self, key: impl Into<String>, method: impl Fn(&Object) -> Value + 'static) {
        self.entries.insert(key.into(), Member::Method(Rc::new(method)));
    }

    pub fn define_bound(&mut self, key: impl Into<String>, function: impl Fn() -> Value + 'static) {
        self.entries.insert(key.into(), Member::Bound(Rc::new(function)));
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        match self.entries.get(key)? {
            Member::Data(value) => Some(value),
            _ => None,
        }
    }

    /// Missing keys read as undefined.
    pub fn get_or_undefined(&self, key: &str) -> Value {
        self.get(key).cloned().unwrap_or(Value::Undefined)
    }

    pub fn remove(&mut self, key: &str) -> Option<Member> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Calls a function-valued member with this object as the receiver.
    pub fn call(&self, key: &str) -> Result<Value> {
        self.call_on(key, self)
    }

    /// Calls a member taken from this object against another receiver.
    pub fn call_on(&self, key: &str, receiver: &Object) -> Result<Value> {
        match self.entries.get(key) {
            Some(Member::Method(method)) => Ok(method(receiver)),
            Some(Member::Bound(function)) => Ok(function()),
            Some(Member::Data(_)) => Err(TourError::MemberError {
                key: key.to_string(),
                reason: "is not a function".to_string(),
            }),
            None => Err(TourError::MemberError {
                key: key.to_string(),
                reason: "is not defined".to_string(),
            }),
        }
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    pub fn values(&self) -> Vec<&Value> {
        self.data_entries().into_iter().map(|(_, value)| value).collect()
    }

    /// Key/value pairs, skipping function-valued members.
    pub fn data_entries(&self) -> Vec<(&str, &Value)> {
        self.entries
            .iter()
            .filter_map(|(key, member)| match member {
                Member::Data(value) => Some((key.as_str(), value)),
                _ => None,
            })
            .collect()
    }

    /// Copy of this object with extra entries appended (or overwritten).
    pub fn extended<K, V, I>(&self, extra: I) -> Object
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut copy = self.clone();
        for (key, value) in extra {
            copy.set(key, value);
        }
        copy
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return f.write_str("{}");
        }
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(key, member)| match member {
                Member::Data(value) => format!("{}: {}", key, value.inspect()),
                _ => format!("{}: [Function: {}]", key, key),
            })
            .collect();
        write!(f, "{{ {} }}", parts.join(", "))
    }
}

/// The thirteen demonstration blocks, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Variables,
    Control,
    Arithmetic,
    Functions,
    Sequences,
    Objects,
    Text,
    Errors,
    DateTime,
    Patterns,
    Advanced,
    Json,
    Performance,
}

impl Section {
    pub const ALL: [Section; 13] = [
        Section::Variables,
        Section::Control,
        Section::Arithmetic,
        Section::Functions,
        Section::Sequences,
        Section::Objects,
        Section::Text,
        Section::Errors,
        Section::DateTime,
        Section::Patterns,
        Section::Advanced,
        Section::Json,
        Section::Performance,
    ];

    pub fn number(self) -> usize {
        self as usize + 1
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Variables => "Variables and Data Types",
            Section::Control => "Control Structures",
            Section::Arithmetic => "Mathematical Operations",
            Section::Functions => "Functions",
            Section::Sequences => "Arrays",
            Section::Objects => "Objects",
            Section::Text => "String Operations",
            Section::Errors => "Error Handling",
            Section::DateTime => "Date and Time",
            Section::Patterns => "Regular Expressions",
            Section::Advanced => "Advanced Concepts",
            Section::Json => "JSON Operations",
            Section::Performance => "Performance Testing",
        }
    }

    pub fn heading(self) -> String {
        format!("\n--- {}. {} ---", self.number(), self.title())
    }

    /// Puts sections into execution order and drops duplicates.
    pub fn normalize(sections: &[Section]) -> Vec<Section> {
        let mut ordered = sections.to_vec();
        ordered.sort();
        ordered.dedup();
        ordered
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub users: Vec<UserRecord>,
    pub timestamp: i64,
}

impl Dataset {
    pub fn sample(timestamp: i64) -> Self {
        let user = |id: u32, name: &str, active: bool| UserRecord {
            id,
            name: name.to_string(),
            active,
        };
        Self {
            users: vec![
                user(1, "Alice", true),
                user(2, "Bob", false),
                user(3, "Charlie", true),
            ],
            timestamp,
        }
    }

    pub fn active_users(&self) -> usize {
        self.users.iter().filter(|u| u.active).count()
    }
}
