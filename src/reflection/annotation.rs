//! Annotation instances and their values.
//!
//! An [`Annotation`] is the reflected form of a marker attached to a class, property or method,
//! e.g. `@Stateless(name="UserProcessor")`. It carries the annotation name and a bag of named
//! values.

use std::collections::BTreeMap;

/// A single value passed to an annotation attribute
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationValue {
    /// Boolean value, e.g. `initOnStartup=true`
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// String value, e.g. `name="UserProcessor"`
    String(String),
    /// Array of values
    Array(Vec<AnnotationValue>),
}

impl AnnotationValue {
    /// Returns the string content, if this is a string value
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnnotationValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the boolean content, if this is a boolean value
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnnotationValue::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&str> for AnnotationValue {
    fn from(value: &str) -> Self {
        AnnotationValue::String(value.to_string())
    }
}

impl From<String> for AnnotationValue {
    fn from(value: String) -> Self {
        AnnotationValue::String(value)
    }
}

impl From<bool> for AnnotationValue {
    fn from(value: bool) -> Self {
        AnnotationValue::Bool(value)
    }
}

impl From<i64> for AnnotationValue {
    fn from(value: i64) -> Self {
        AnnotationValue::Integer(value)
    }
}

/// A reflected annotation with its name and value bag
///
/// # Examples
///
/// ```rust
/// use beanscope::reflection::Annotation;
///
/// let annotation = Annotation::new("EnterpriseBean")
///     .with_value("name", " UserProcessor ")
///     .with_value("lookup", "php:global/example/UserProcessor");
///
/// assert_eq!(annotation.get_str("name"), Some("UserProcessor"));
/// assert_eq!(annotation.get_str("description"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Annotation {
    name: String,
    values: BTreeMap<String, AnnotationValue>,
}

impl Annotation {
    /// Create a new annotation without any values
    #[must_use]
    pub fn new(name: &str) -> Self {
        Annotation {
            name: name.to_string(),
            values: BTreeMap::new(),
        }
    }

    /// Builder-style helper that adds (or replaces) a named value
    #[must_use]
    pub fn with_value(mut self, key: &str, value: impl Into<AnnotationValue>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    /// The annotation name, e.g. `Stateless`
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All values of this annotation
    #[must_use]
    pub fn values(&self) -> &BTreeMap<String, AnnotationValue> {
        &self.values
    }

    /// Get a raw value by attribute name
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AnnotationValue> {
        self.values.get(key)
    }

    /// Get a string attribute, trimmed.
    ///
    /// Blank strings count as not set, so callers can fall back to their defaults.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(AnnotationValue::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Get a boolean attribute
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(AnnotationValue::as_bool)
    }
}
