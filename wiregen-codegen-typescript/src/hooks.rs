//! Hooks scaffolding template.

use eyre::Result;
use wiregen_codegen::{CodeBuilder, GenerationContext, Template, TemplateOutputFile};
use wiregen_model::OperationType;

use crate::models::{TypeScriptInputModels, TypeScriptResponseModels};

/// Per-operation hook scaffolding.
///
/// Developers fill the hook bodies in, so the file is written with
/// customization protection: once the sentinel header is removed, the
/// pipeline never touches it again.
pub struct TypeScriptHooks;

impl Template for TypeScriptHooks {
    fn name(&self) -> String {
        "typescript-hooks".to_string()
    }

    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Vec<TemplateOutputFile>> {
        let mut builder = CodeBuilder::typescript();

        builder
            .push_line("export interface OperationHooks {")
            .push_indent()
            .push_line("preResolve?: (input: unknown) => Promise<unknown>;")
            .push_line("postResolve?: (response: unknown) => Promise<void>;")
            .push_line("mutatingPostResolve?: (response: unknown) => Promise<unknown>;")
            .push_dedent()
            .push_line("}")
            .push_blank()
            .push_line("export const hooks = {")
            .push_indent();

        for (section, operation_type) in [
            ("queries", OperationType::Query),
            ("mutations", OperationType::Mutation),
            ("subscriptions", OperationType::Subscription),
        ] {
            builder.push_line(&format!("{}: {{", section)).push_indent();
            for operation in ctx.app.operations_of_type(operation_type) {
                builder.push_line(&format!("{}: {{}} as OperationHooks,", operation.name));
            }
            builder.push_dedent().push_line("},");
        }

        builder.push_dedent().push_line("};");

        Ok(vec![TemplateOutputFile::protected(
            "hooks.ts",
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

#[cfg(test)]
mod tests {
    use wiregen_model::ResolvedApplication;

    use super::*;

    #[test]
    fn test_hooks_grouped_by_operation_type() {
        let app: ResolvedApplication = serde_json::from_value(serde_json::json!({
            "apiName": "pets",
            "schema": { "types": [] },
            "operations": [
                { "name": "MyReviews", "operationType": "query", "content": "" },
                { "name": "CreatePet", "operationType": "mutation", "content": "" },
                { "name": "NewPets", "operationType": "subscription", "content": "" }
            ]
        }))
        .unwrap();
        let ctx = GenerationContext { app: &app };
        let files = TypeScriptHooks.generate(&ctx).unwrap();

        let content = &files[0].content;
        let queries_at = content.find("queries: {").unwrap();
        let reviews_at = content.find("MyReviews: {} as OperationHooks,").unwrap();
        let mutations_at = content.find("mutations: {").unwrap();
        assert!(queries_at < reviews_at && reviews_at < mutations_at);
        assert!(content.contains("NewPets: {} as OperationHooks,"));
    }
}
