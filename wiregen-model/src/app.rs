//! The resolved application: the immutable input of one generation run.

use serde::{Deserialize, Serialize};

use crate::{JsonSchema, SchemaDocument};

/// Fully resolved application configuration.
///
/// One instance is deserialized from the resolved-model JSON artifact at the
/// start of a run and shared read-only by every template.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedApplication {
    /// Application name, used for display and generated file banners.
    pub api_name: String,
    /// Merged API schema across all data sources.
    pub schema: SchemaDocument,
    /// Declared operations, in declaration order.
    #[serde(default)]
    pub operations: Vec<Operation>,
    /// Authentication and role metadata.
    #[serde(default)]
    pub authentication: AuthenticationConfig,
    /// Configured S3 upload providers.
    #[serde(default)]
    pub s3_upload_providers: Vec<S3UploadProvider>,
    /// CORS configuration of the gateway.
    #[serde(default)]
    pub cors: CorsConfiguration,
}

impl ResolvedApplication {
    /// Operations of the given kind, in declaration order.
    pub fn operations_of_type(
        &self,
        operation_type: OperationType,
    ) -> impl Iterator<Item = &Operation> {
        self.operations
            .iter()
            .filter(move |op| op.operation_type == operation_type)
    }
}

/// A declared operation (query, mutation, or subscription).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Operation name, unique within the application.
    pub name: String,
    pub operation_type: OperationType,
    /// The operation document text.
    pub content: String,
    /// JSON schema of the public variables.
    #[serde(default)]
    pub variables_schema: JsonSchema,
    /// JSON schema of the variables visible to server-side callers,
    /// including injected ones.
    #[serde(default)]
    pub internal_variables_schema: JsonSchema,
    /// JSON schema of the response envelope.
    #[serde(default)]
    pub response_schema: JsonSchema,
    /// Internal operations are only callable from server-side code.
    #[serde(default)]
    pub internal: bool,
    /// Whether the gateway requires an authenticated user.
    #[serde(default)]
    pub authentication_required: bool,
}

impl Operation {
    /// Whether the public variables schema declares any properties.
    pub fn has_input(&self) -> bool {
        !self.variables_schema.properties.is_empty()
    }

    /// Whether the internal variables schema declares any properties.
    pub fn has_internal_input(&self) -> bool {
        !self.internal_variables_schema.properties.is_empty()
    }
}

/// Kind of a declared operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    /// The GraphQL keyword for this operation kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }
}

/// Authentication metadata relevant to code generation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationConfig {
    /// Roles a user can be assigned; emitted as a literal union type.
    #[serde(default)]
    pub roles: Vec<String>,
}

/// An S3-compatible upload provider.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct S3UploadProvider {
    pub name: String,
    pub bucket_name: String,
    pub endpoint: String,
    #[serde(default)]
    pub use_ssl: bool,
}

/// CORS configuration of the gateway.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorsConfiguration {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    #[serde(default)]
    pub allowed_methods: Vec<String>,
    #[serde(default)]
    pub allowed_headers: Vec<String>,
    #[serde(default)]
    pub exposed_headers: Vec<String>,
    #[serde(default)]
    pub max_age: u64,
    #[serde(default)]
    pub allow_credentials: bool,
}
