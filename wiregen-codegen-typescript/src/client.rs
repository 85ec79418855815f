//! Client metadata template.

use eyre::Result;
use wiregen_codegen::{CodeBuilder, GenerationContext, Template, TemplateOutputFile};
use wiregen_model::Operation;

use crate::models::{TypeScriptInputModels, TypeScriptResponseModels};

/// Operation metadata tables and upload provider constants consumed by the
/// runtime client. Regenerated unconditionally; nothing in this file is
/// meant to be edited.
pub struct TypeScriptClient;

impl Template for TypeScriptClient {
    fn name(&self) -> String {
        "typescript-client".to_string()
    }

    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Vec<TemplateOutputFile>> {
        let mut builder = CodeBuilder::typescript();

        builder
            .push_line("export interface OperationMetadata {")
            .push_indent()
            .push_line("operationType: \"query\" | \"mutation\" | \"subscription\";")
            .push_line("requiresAuthentication: boolean;")
            .push_line("internal: boolean;")
            .push_dedent()
            .push_line("}")
            .push_blank();

        builder
            .push_line("export const operationMetadata: Record<string, OperationMetadata> = {")
            .push_indent();
        for operation in &ctx.app.operations {
            builder.push_line(&operation_entry(operation));
        }
        builder.push_dedent().push_line("};").push_blank();

        builder
            .push_line("export interface S3Provider {")
            .push_indent()
            .push_line("name: string;")
            .push_line("bucketName: string;")
            .push_line("endpoint: string;")
            .push_line("useSSL: boolean;")
            .push_dedent()
            .push_line("}")
            .push_blank();

        builder
            .push_line("export const s3Providers: S3Provider[] = [")
            .push_indent();
        for provider in &ctx.app.s3_upload_providers {
            builder.push_line(&format!(
                "{{ name: \"{}\", bucketName: \"{}\", endpoint: \"{}\", useSSL: {} }},",
                provider.name, provider.bucket_name, provider.endpoint, provider.use_ssl
            ));
        }
        builder.push_dedent().push_line("];");

        Ok(vec![TemplateOutputFile::always(
            "client.ts",
            builder.build(),
        )])
    }

    fn dependencies(&self) -> Vec<Box<dyn Template>> {
        vec![
            Box::new(TypeScriptInputModels),
            Box::new(TypeScriptResponseModels),
        ]
    }
}

fn operation_entry(operation: &Operation) -> String {
    format!(
        "{}: {{ operationType: \"{}\", requiresAuthentication: {}, internal: {} }},",
        operation.name,
        operation.operation_type.keyword(),
        operation.authentication_required,
        operation.internal
    )
}
