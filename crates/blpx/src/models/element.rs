//! The vendor's self-describing response format.
//!
//! Responses arrive as a schema-less tree of named elements. A field value
//! is a scalar string, an array of values, or a nested element; navigation
//! is by exact, case-sensitive field name. The accessors here encode the
//! adapter's coercion policy: a missing field reads as an empty string and
//! an array reads as the `", "`-join of its members.

use serde::{Deserialize, Serialize};

/// A value carried by one field of a response element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ElementValue {
    /// Single value, already in its vendor string representation.
    Scalar(String),

    /// Multi-valued field (bulk data rows, type tags).
    Array(Vec<ElementValue>),

    /// Nested element with its own named fields.
    Element(Element),
}

impl ElementValue {
    /// Array of scalar strings, the common multi-valued shape.
    pub fn array<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Array(values.into_iter().map(|v| Self::Scalar(v.into())).collect())
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[ElementValue]> {
        match self {
            Self::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// String rendering of the value: scalars as-is, arrays joined with
    /// `", "` into a single string. Nested elements have no scalar
    /// rendering and read as empty.
    pub fn as_joined_string(&self) -> String {
        match self {
            Self::Scalar(value) => value.clone(),
            Self::Array(values) => values
                .iter()
                .map(ElementValue::as_joined_string)
                .collect::<Vec<_>>()
                .join(", "),
            Self::Element(_) => String::new(),
        }
    }
}

impl From<&str> for ElementValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for ElementValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<Element> for ElementValue {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Vec<ElementValue>> for ElementValue {
    fn from(values: Vec<ElementValue>) -> Self {
        Self::Array(values)
    }
}

/// One element of a response message: named fields in vendor order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    fields: Vec<(String, ElementValue)>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ElementValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Append a field.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ElementValue>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Look up a field by exact name.
    pub fn get(&self, name: &str) -> Option<&ElementValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// String rendering of a field, empty when the field is absent.
    pub fn get_as_string(&self, name: &str) -> String {
        self.get(name)
            .map(ElementValue::as_joined_string)
            .unwrap_or_default()
    }

    /// Iterate fields in vendor order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &ElementValue)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A single response message: the operation that produced it plus the
/// root element of its payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    message_type: String,
    root: Element,
}

impl Message {
    pub fn new(message_type: impl Into<String>, root: Element) -> Self {
        Self {
            message_type: message_type.into(),
            root,
        }
    }

    pub fn message_type(&self) -> &str {
        &self.message_type
    }

    pub fn root(&self) -> &Element {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_reads_empty() {
        let element = Element::new().with("security", "AAPL US Equity");
        assert_eq!(element.get_as_string("security"), "AAPL US Equity");
        assert_eq!(element.get_as_string("description"), "");
    }

    #[test]
    fn test_field_lookup_is_case_sensitive() {
        let element = Element::new().with("Security", "AAPL US Equity");
        assert!(element.get("security").is_none());
        assert!(element.get("Security").is_some());
    }

    #[test]
    fn test_array_joins_with_comma() {
        let value = ElementValue::array(["CORP", "GOVT"]);
        assert_eq!(value.as_joined_string(), "CORP, GOVT");
    }

    #[test]
    fn test_single_element_array_has_no_separator() {
        let value = ElementValue::array(["CORP"]);
        assert_eq!(value.as_joined_string(), "CORP");
    }

    #[test]
    fn test_fields_iterate_in_insertion_order() {
        let element = Element::new().with("b", "2").with("a", "1");
        let names: Vec<&str> = element.fields().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
