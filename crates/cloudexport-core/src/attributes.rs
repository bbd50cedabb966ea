//! Host attribute values
//!
//! The host hands attribute values over as JSON objects. Nested objects are
//! encoded as lists of objects, so a single nested block is `[ { ... } ]`.

use crate::error::{CloudExportError, Result};
use serde_json::Value;

/// Attribute map as exchanged with the host
pub type Attributes = serde_json::Map<String, Value>;

/// Typed reads over an attribute map
///
/// `null` and absent values are treated alike, matching how the host reports
/// unset attributes.
pub trait AttributesExt {
    /// String value, or `""` when unset
    fn string_or_default(&self, name: &str) -> Result<String>;

    /// Bool value, or `false` when unset
    fn bool_or_default(&self, name: &str) -> Result<bool>;

    /// String value that must be set
    fn require_string(&self, name: &str) -> Result<String>;

    /// Bool value that must be set
    fn require_bool(&self, name: &str) -> Result<bool>;

    /// Elements of a nested block list; empty when unset
    fn block_list(&self, name: &str) -> Result<Vec<&Attributes>>;
}

impl AttributesExt for Attributes {
    fn string_or_default(&self, name: &str) -> Result<String> {
        match self.get(name) {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(invalid(name, "string")),
        }
    }

    fn bool_or_default(&self, name: &str) -> Result<bool> {
        match self.get(name) {
            None | Some(Value::Null) => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(invalid(name, "bool")),
        }
    }

    fn require_string(&self, name: &str) -> Result<String> {
        match self.get(name) {
            None | Some(Value::Null) => Err(CloudExportError::MissingAttribute(name.to_string())),
            Some(_) => self.string_or_default(name),
        }
    }

    fn require_bool(&self, name: &str) -> Result<bool> {
        match self.get(name) {
            None | Some(Value::Null) => Err(CloudExportError::MissingAttribute(name.to_string())),
            Some(_) => self.bool_or_default(name),
        }
    }

    fn block_list(&self, name: &str) -> Result<Vec<&Attributes>> {
        match self.get(name) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| item.as_object().ok_or_else(|| invalid(name, "list of objects")))
                .collect(),
            Some(_) => Err(invalid(name, "list of objects")),
        }
    }
}

fn invalid(name: &str, expected: &'static str) -> CloudExportError {
    CloudExportError::InvalidAttribute {
        name: name.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Attributes {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_unset_values_default() {
        let a = attrs(json!({ "description": null }));
        assert_eq!(a.string_or_default("description").unwrap(), "");
        assert_eq!(a.string_or_default("name").unwrap(), "");
        assert!(!a.bool_or_default("enabled").unwrap());
    }

    #[test]
    fn test_require_missing() {
        let a = attrs(json!({}));
        assert_eq!(
            a.require_string("bucket").unwrap_err(),
            CloudExportError::MissingAttribute("bucket".to_string())
        );
        assert!(a.require_bool("apply_bgp").is_err());
    }

    #[test]
    fn test_wrong_type() {
        let a = attrs(json!({ "enabled": "yes", "aws": {"bucket": "b"} }));
        assert!(matches!(
            a.bool_or_default("enabled"),
            Err(CloudExportError::InvalidAttribute { expected: "bool", .. })
        ));
        assert!(a.block_list("aws").is_err());
    }

    #[test]
    fn test_block_list() {
        let a = attrs(json!({ "ibm": [{ "bucket": "b" }] }));
        let blocks = a.block_list("ibm").unwrap();
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].require_string("bucket").unwrap(), "b");
        assert!(a.block_list("gce").unwrap().is_empty());
    }
}
