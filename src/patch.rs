//! RFC 6902 JSON-Patch operations.
//!
//! Every `update` endpoint in the API takes an ordered list of patch
//! operations with `Content-Type: application/json-patch+json`. Operations
//! serialize exactly as written, in order, with absent members omitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The RFC 6902 operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    /// Add a value at the target path.
    Add,
    /// Remove the value at the target path.
    Remove,
    /// Replace the value at the target path.
    Replace,
    /// Move a value from `from` to the target path.
    Move,
    /// Copy a value from `from` to the target path.
    Copy,
    /// Assert the value at the target path.
    Test,
}

/// One JSON-Patch step: an `(op, path, value)` triple.
///
/// ## Examples
///
/// ```rust
/// use watsonx_data::PatchOperation;
///
/// let patch = vec![PatchOperation::add("/description", "new")];
/// let json = serde_json::to_string(&patch).unwrap();
/// assert_eq!(json, r#"[{"op":"add","path":"/description","value":"new"}]"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    /// Operation kind.
    pub op: PatchOp,
    /// JSON-Pointer target path.
    pub path: String,
    /// Operand for add/replace/test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Source path for move/copy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}

impl PatchOperation {
    /// An `add` operation.
    pub fn add(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            op: PatchOp::Add,
            path: path.into(),
            value: Some(value.into()),
            from: None,
        }
    }

    /// A `replace` operation.
    pub fn replace(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            op: PatchOp::Replace,
            path: path.into(),
            value: Some(value.into()),
            from: None,
        }
    }

    /// A `remove` operation.
    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Remove,
            path: path.into(),
            value: None,
            from: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_serializes_without_from() {
        let op = PatchOperation::add("/tags", serde_json::json!(["a", "b"]));
        let json = serde_json::to_value(&op).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"op": "add", "path": "/tags", "value": ["a", "b"]})
        );
    }

    #[test]
    fn test_remove_omits_value() {
        let op = PatchOperation::remove("/description");
        let json = serde_json::to_string(&op).unwrap();
        assert_eq!(json, r#"{"op":"remove","path":"/description"}"#);
    }

    #[test]
    fn test_order_preserved() {
        let patch = vec![
            PatchOperation::replace("/engine_display_name", "presto-01"),
            PatchOperation::add("/tags", serde_json::json!(["prod"])),
        ];
        let json = serde_json::to_value(&patch).unwrap();
        let arr = json.as_array().unwrap();
        assert_eq!(arr[0]["op"], "replace");
        assert_eq!(arr[1]["op"], "add");
    }
}
