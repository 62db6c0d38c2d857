//! In-memory model of the OpenAPI document.
//!
//! Only the fields the catalog reads are modelled. Every field is optional
//! and unknown keys are ignored, so partially filled documents load as long
//! as the fields that are present have the expected shape. Maps use
//! [`IndexMap`] because declaration order is what every listing reports.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::de::Deserializer;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Media type whose schema and examples are rendered in detail reports.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Canonical HTTP method tokens that may key an operation on a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "mcp", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
    Trace,
}

impl HttpMethod {
    /// Every canonical method, in the order OpenAPI lists them.
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Put,
        HttpMethod::Post,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
        HttpMethod::Patch,
        HttpMethod::Trace,
    ];

    /// Lowercase token as it appears in the document.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
            HttpMethod::Trace => "trace",
        }
    }

    /// Upper-case form used in human-readable output.
    pub fn upper(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
        }
    }

    /// Match a path item key exactly. Keys such as `parameters` or `x-*`
    /// extensions return `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.as_str() == key)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(&s.trim().to_ascii_lowercase()).ok_or_else(|| Error::UnknownMethod {
            token: s.to_string(),
        })
    }
}

/// Root of the loaded document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openapi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<Info>,
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
}

impl Document {
    /// Lookup the path item registered under an exact path key.
    pub fn path_item(&self, path: &str) -> Option<&PathItem> {
        self.paths.get(path)
    }

    /// Total number of operations across all paths.
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|item| item.operations.len()).sum()
    }

    /// Document title from `info.title`, when declared.
    pub fn title(&self) -> Option<&str> {
        self.info.as_ref().and_then(|info| info.title.as_deref())
    }
}

/// Subset of the `info` object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Info {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Operations declared under a single path, plus the path-level parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    operations: IndexMap<HttpMethod, Operation>,
    parameters: Vec<Parameter>,
}

impl PathItem {
    /// Create an empty path item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper to register an operation.
    pub fn with_operation(mut self, method: HttpMethod, operation: Operation) -> Self {
        self.operations.insert(method, operation);
        self
    }

    /// Builder-style helper to add a shared path-level parameter.
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Operation registered for `method`, if any.
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        self.operations.get(&method)
    }

    /// Methods in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = HttpMethod> + '_ {
        self.operations.keys().copied()
    }

    /// Operations in declaration order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> + '_ {
        self.operations.iter().map(|(method, op)| (*method, op))
    }

    /// Parameters shared by every operation on this path.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }
}

impl TryFrom<IndexMap<String, Value>> for PathItem {
    type Error = String;

    fn try_from(raw: IndexMap<String, Value>) -> std::result::Result<Self, Self::Error> {
        let mut item = PathItem::default();
        for (key, value) in raw {
            if key == "parameters" {
                item.parameters = serde_json::from_value(value)
                    .map_err(|err| format!("path-level parameters: {err}"))?;
            } else if let Some(method) = HttpMethod::from_key(&key) {
                let operation = serde_json::from_value(value)
                    .map_err(|err| format!("{method} operation: {err}"))?;
                item.operations.insert(method, operation);
            }
        }
        Ok(item)
    }
}

impl<'de> Deserialize<'de> for PathItem {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        PathItem::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl Serialize for PathItem {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let shared = usize::from(!self.parameters.is_empty());
        let mut map = serializer.serialize_map(Some(self.operations.len() + shared))?;
        if !self.parameters.is_empty() {
            map.serialize_entry("parameters", &self.parameters)?;
        }
        for (method, operation) in &self.operations {
            map.serialize_entry(method.as_str(), operation)?;
        }
        map.end()
    }
}

/// A single operation (one method on one path).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<IndexMap<String, Response>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deprecated: bool,
}

/// Operation or path-level parameter.
///
/// `name` and `in` default to empty strings so unresolved `$ref` entries do
/// not abort loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "in", default)]
    pub location: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

impl Parameter {
    /// Parameters are identified by name and location.
    pub fn same_slot(&self, other: &Parameter) -> bool {
        self.name == other.name && self.location == other.location
    }
}

/// Body accepted by an operation, keyed by media type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

impl RequestBody {
    pub fn json_content(&self) -> Option<&MediaType> {
        self.content.get(JSON_CONTENT_TYPE)
    }
}

/// A response declared for a status code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaType>,
}

impl Response {
    pub fn json_content(&self) -> Option<&MediaType> {
        self.content.get(JSON_CONTENT_TYPE)
    }
}

/// Schema and examples for one media type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub examples: IndexMap<String, Example>,
}

/// Named example under a media type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Example {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// JSON-schema-like object. Property schemas reuse the same shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Schema>,
    #[serde(
        default,
        deserialize_with = "required_names",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub required: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

impl Schema {
    /// Whether `property` is listed in this schema's `required` set.
    pub fn requires(&self, property: &str) -> bool {
        self.required.iter().any(|name| name == property)
    }
}

/// `type` as a single name or, in OpenAPI 3.1, a list of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Union(Vec<String>),
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaType::Single(name) => f.write_str(name),
            SchemaType::Union(names) => f.write_str(&names.join(" | ")),
        }
    }
}

// Swagger 2 style `required: true` on a property schema carries no names.
fn required_names<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(name) => Some(name),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn method_keys_are_matched_exactly() {
        assert_eq!(HttpMethod::from_key("get"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::from_key("trace"), Some(HttpMethod::Trace));
        assert_eq!(HttpMethod::from_key("GET"), None);
        assert_eq!(HttpMethod::from_key("parameters"), None);
    }

    #[test]
    fn method_parsing_accepts_any_case() {
        assert_eq!("PATCH".parse::<HttpMethod>().unwrap(), HttpMethod::Patch);
        assert_eq!("options".parse::<HttpMethod>().unwrap(), HttpMethod::Options);
        let err = "fetch".parse::<HttpMethod>().unwrap_err();
        assert!(err.to_string().contains("fetch"));
    }

    #[test]
    fn path_item_keeps_method_order_and_skips_non_methods() {
        let item: PathItem = serde_json::from_value(json!({
            "summary": "shared summary",
            "post": { "summary": "create" },
            "parameters": [{ "name": "tenant", "in": "header" }],
            "get": { "summary": "list" },
            "x-internal": true
        }))
        .unwrap();

        let methods: Vec<_> = item.methods().collect();
        assert_eq!(methods, vec![HttpMethod::Post, HttpMethod::Get]);
        assert_eq!(item.parameters().len(), 1);
        assert_eq!(item.parameters()[0].name, "tenant");
    }

    #[test]
    fn path_item_reports_malformed_operation() {
        let err = serde_json::from_value::<PathItem>(json!({
            "get": { "tags": "not-a-list" }
        }))
        .unwrap_err();
        assert!(err.to_string().contains("get operation"));
    }

    #[test]
    fn schema_type_renders_unions() {
        let schema: Schema = serde_json::from_value(json!({ "type": ["string", "null"] })).unwrap();
        assert_eq!(schema.schema_type.unwrap().to_string(), "string | null");
    }

    #[test]
    fn boolean_required_is_ignored() {
        let schema: Schema =
            serde_json::from_value(json!({ "type": "string", "required": true })).unwrap();
        assert!(schema.required.is_empty());
    }

    #[test]
    fn document_without_paths_is_empty() {
        let doc: Document = serde_json::from_value(json!({ "openapi": "3.0.3" })).unwrap();
        assert!(doc.paths.is_empty());
        assert_eq!(doc.operation_count(), 0);
    }

    #[test]
    fn path_item_serializes_back_in_order() {
        let item = PathItem::new()
            .with_operation(HttpMethod::Delete, Operation::default())
            .with_operation(HttpMethod::Get, Operation::default());
        let text = serde_json::to_string(&item).unwrap();
        assert_eq!(text, r#"{"delete":{},"get":{}}"#);
    }
}
