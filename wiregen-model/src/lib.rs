//! Resolved application model for the wiregen code generator.
//!
//! This crate defines the immutable input of one generation run: the merged
//! API schema, the declared operations with their JSON schemas, and the
//! authentication/upload/CORS metadata. The model is produced by the
//! configuration-resolution stage and read here as a JSON artifact.
//!
//! # Architecture
//!
//! ```text
//! wiregen.toml + introspection → resolved model (JSON) → wiregen-model → codegen
//! ```
//!
//! The model types are designed to be:
//! - Read-only during generation (templates never mutate them)
//! - Language-agnostic (no TypeScript/Go-specific concerns)
//! - Self-contained (serde is the only dependency beyond std)

mod app;
mod graphql;
mod json_schema;

pub use app::{
    AuthenticationConfig, CorsConfiguration, Operation, OperationType, ResolvedApplication,
    S3UploadProvider,
};
pub use graphql::{
    EnumType, FieldDefinition, InputObjectType, InputValueDefinition, ObjectType, ScalarType,
    SchemaDocument, SchemaIndex, TypeDefinition, TypeRef,
};
pub use json_schema::{JsonSchema, SchemaType};
