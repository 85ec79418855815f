//! JSON-schema tree as attached to operations.
//!
//! This is not a general JSON Schema implementation; it models exactly the
//! shape the resolution stage emits for operation variables and responses:
//! objects with named properties, arrays, scalars, string enums, and `$ref`
//! references into `definitions`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node in the JSON-schema tree.
///
/// Property order is preserved (`IndexMap`), so visitors see properties in
/// declaration order.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JsonSchema {
    /// The `type` keyword: a single type name or a nullable-union array.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, JsonSchema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<JsonSchema>>,
    /// String enum values, when this node encodes a GraphQL enum.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// Name hint for the enum type, carried from the schema source.
    #[serde(rename = "x-graphql-enum-name", skip_serializing_if = "Option::is_none")]
    pub enum_name: Option<String>,
    /// Reference to a named definition, e.g. `#/definitions/PetInput`.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub definitions: IndexMap<String, JsonSchema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<bool>,
}

impl JsonSchema {
    /// An object schema with the given properties and required set.
    pub fn object(
        properties: impl IntoIterator<Item = (String, JsonSchema)>,
        required: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            schema_type: Some(SchemaType::single("object")),
            properties: properties.into_iter().collect(),
            required: required.into_iter().collect(),
            ..Self::default()
        }
    }

    /// A scalar schema of the given type name.
    pub fn scalar(name: &str) -> Self {
        Self {
            schema_type: Some(SchemaType::single(name)),
            ..Self::default()
        }
    }

    /// Whether `name` is listed in this node's required set.
    pub fn requires(&self, name: &str) -> bool {
        self.required.iter().any(|req| req == name)
    }

    /// The effective type name, after collapsing nullable unions.
    ///
    /// Returns `None` when the node has no `type` keyword at all.
    pub fn resolved_type(&self) -> Option<&str> {
        self.schema_type.as_ref().map(SchemaType::resolved)
    }
}

/// The `type` keyword: `"string"` or `["string", "null"]`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Union(Vec<String>),
}

impl SchemaType {
    pub fn single(name: &str) -> Self {
        SchemaType::Single(name.to_string())
    }

    /// Collapse a nullable-union encoding to its first non-null member.
    pub fn resolved(&self) -> &str {
        match self {
            SchemaType::Single(name) => name,
            SchemaType::Union(names) => names
                .iter()
                .map(String::as_str)
                .find(|name| *name != "null")
                .unwrap_or(""),
        }
    }
}
