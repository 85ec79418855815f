//! Merged-schema AST.
//!
//! The configuration-resolution stage merges all data sources into one
//! GraphQL schema and ships it here as structured AST data (parsing the SDL
//! text is the producer's concern). The operation-stub generator walks this
//! AST to enumerate root fields and synthesize default operation documents.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::OperationType;

const BUILTIN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

/// The merged API schema.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchemaDocument {
    pub types: Vec<TypeDefinition>,
    /// Name of the query root type; `Query` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_type: Option<String>,
}

impl SchemaDocument {
    /// Name of the root type for the given operation kind.
    pub fn root_type_name(&self, operation_type: OperationType) -> &str {
        match operation_type {
            OperationType::Query => self.query_type.as_deref().unwrap_or("Query"),
            OperationType::Mutation => self.mutation_type.as_deref().unwrap_or("Mutation"),
            OperationType::Subscription => {
                self.subscription_type.as_deref().unwrap_or("Subscription")
            }
        }
    }

    /// The root object type for the given operation kind, if declared.
    pub fn root_type(&self, operation_type: OperationType) -> Option<&ObjectType> {
        let name = self.root_type_name(operation_type);
        self.types.iter().find_map(|ty| match ty {
            TypeDefinition::Object(object) if object.name == name => Some(object),
            _ => None,
        })
    }
}

/// A named type in the merged schema.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum TypeDefinition {
    Object(ObjectType),
    InputObject(InputObjectType),
    Enum(EnumType),
    Scalar(ScalarType),
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Object(object) => &object.name,
            TypeDefinition::InputObject(input) => &input.name,
            TypeDefinition::Enum(en) => &en.name,
            TypeDefinition::Scalar(scalar) => &scalar.name,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectType {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputObjectType {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<InputValueDefinition>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumType {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalarType {
    pub name: String,
}

/// A field of an object type.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<InputValueDefinition>,
    pub field_type: TypeRef,
}

/// An argument or input-object field.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputValueDefinition {
    pub name: String,
    pub value_type: TypeRef,
    /// Default value rendered as a GraphQL literal, e.g. `10` or `"all"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

/// A type reference with list/non-null wrappers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "of")]
pub enum TypeRef {
    Named(String),
    NonNull(Box<TypeRef>),
    List(Box<TypeRef>),
}

impl TypeRef {
    /// The named type at the bottom of the wrapper chain.
    pub fn named_type(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::NonNull(inner) | TypeRef::List(inner) => inner.named_type(),
        }
    }

    /// Render in GraphQL syntax, e.g. `[String!]!`.
    pub fn render(&self) -> String {
        match self {
            TypeRef::Named(name) => name.clone(),
            TypeRef::NonNull(inner) => format!("{}!", inner.render()),
            TypeRef::List(inner) => format!("[{}]", inner.render()),
        }
    }
}

/// Type lookup index over a [`SchemaDocument`].
///
/// The "executable schema" of a generation run: built once per run, then
/// queried per field while synthesizing operation documents.
pub struct SchemaIndex<'a> {
    document: &'a SchemaDocument,
    types: HashMap<&'a str, &'a TypeDefinition>,
}

impl<'a> SchemaIndex<'a> {
    pub fn new(document: &'a SchemaDocument) -> Self {
        let types = document
            .types
            .iter()
            .map(|ty| (ty.name(), ty))
            .collect::<HashMap<_, _>>();
        Self { document, types }
    }

    pub fn document(&self) -> &'a SchemaDocument {
        self.document
    }

    pub fn type_by_name(&self, name: &str) -> Option<&'a TypeDefinition> {
        self.types.get(name).copied()
    }

    /// The object type behind `name`, when `name` is an object type.
    pub fn object_type(&self, name: &str) -> Option<&'a ObjectType> {
        match self.type_by_name(name) {
            Some(TypeDefinition::Object(object)) => Some(object),
            _ => None,
        }
    }

    /// Whether a field of this type is selected without a nested selection
    /// set: built-in scalars, declared scalars, enums, and types missing
    /// from the schema (treated as opaque).
    pub fn is_leaf_type(&self, name: &str) -> bool {
        if BUILTIN_SCALARS.contains(&name) {
            return true;
        }
        match self.type_by_name(name) {
            Some(TypeDefinition::Scalar(_)) | Some(TypeDefinition::Enum(_)) | None => true,
            Some(TypeDefinition::Object(_)) | Some(TypeDefinition::InputObject(_)) => false,
        }
    }
}
