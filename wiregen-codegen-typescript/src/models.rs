//! Operation model templates.
//!
//! One interface per operation schema, rendered through the schema visitor.
//! Every model template depends on [`BaseTypeScriptDataModel`], which
//! provides the primitives the rendered interfaces refer to.

use eyre::Result;
use wiregen_codegen::{CodeBuilder, GenerationContext, Template, TemplateOutputFile};

use crate::helpers::{input_typename, internal_input_typename, response_typename};
use crate::interface::json_schema_to_interface;

/// Base types every generated model refers to: the JSON value primitives,
/// the error shape, and the role union derived from the authentication
/// configuration.
pub struct BaseTypeScriptDataModel;

impl Template for BaseTypeScriptDataModel {
    fn name(&self) -> String {
        "typescript-base-data-model".to_string()
    }

    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Vec<TemplateOutputFile>> {
        let roles = &ctx.app.authentication.roles;
        let role_union = if roles.is_empty() {
            "never".to_string()
        } else {
            roles
                .iter()
                .map(|role| format!("\"{}\"", role))
                .collect::<Vec<_>>()
                .join(" | ")
        };

        let mut builder = CodeBuilder::typescript();
        builder
            .push_line(
                "export type JSONValue = string | number | boolean | JSONObject | Array<JSONValue>;",
            )
            .push_blank()
            .push_line("export interface JSONObject {")
            .push_indent()
            .push_line("[key: string]: JSONValue;")
            .push_dedent()
            .push_line("}")
            .push_blank()
            .push_line("export interface GraphQLError {")
            .push_indent()
            .push_line("message: string;")
            .push_line("path?: Array<string | number>;")
            .push_dedent()
            .push_line("}")
            .push_blank()
            .push_line(&format!("export type Role = {};", role_union));

        Ok(vec![TemplateOutputFile::protected(
            "models/base.ts",
            builder.build(),
        )])
    }
}

/// Public input model per operation with declared variables.
pub struct TypeScriptInputModels;

impl Template for TypeScriptInputModels {
    fn name(&self) -> String {
        "typescript-input-models".to_string()
    }

    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Vec<TemplateOutputFile>> {
        let interfaces = ctx
            .app
            .operations
            .iter()
            .filter(|op| op.has_input())
            .map(|op| {
                json_schema_to_interface(&op.variables_schema, &input_typename(op), false)
            })
            .collect::<Vec<_>>();

        Ok(vec![TemplateOutputFile::protected(
            "models/inputs.ts",
            model_file(&interfaces),
        )])
    }

    fn dependencies(&self) -> Vec<Box<dyn Template>> {
        vec![Box::new(BaseTypeScriptDataModel)]
    }
}

/// Server-side input model per operation, including injected variables.
pub struct TypeScriptInternalInputModels;

impl Template for TypeScriptInternalInputModels {
    fn name(&self) -> String {
        "typescript-internal-input-models".to_string()
    }

    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Vec<TemplateOutputFile>> {
        let interfaces = ctx
            .app
            .operations
            .iter()
            .filter(|op| op.has_internal_input())
            .map(|op| {
                json_schema_to_interface(
                    &op.internal_variables_schema,
                    &internal_input_typename(op),
                    false,
                )
            })
            .collect::<Vec<_>>();

        Ok(vec![TemplateOutputFile::protected(
            "models/internal-inputs.ts",
            model_file(&interfaces),
        )])
    }

    fn dependencies(&self) -> Vec<Box<dyn Template>> {
        vec![Box::new(BaseTypeScriptDataModel)]
    }
}

/// Response envelope model per operation.
pub struct TypeScriptResponseModels;

impl Template for TypeScriptResponseModels {
    fn name(&self) -> String {
        "typescript-response-models".to_string()
    }

    fn generate(&self, ctx: &GenerationContext<'_>) -> Result<Vec<TemplateOutputFile>> {
        let interfaces = ctx
            .app
            .operations
            .iter()
            .map(|op| json_schema_to_interface(&op.response_schema, &response_typename(op), true))
            .collect::<Vec<_>>();

        Ok(vec![TemplateOutputFile::protected(
            "models/responses.ts",
            model_file(&interfaces),
        )])
    }

    fn dependencies(&self) -> Vec<Box<dyn Template>> {
        vec![Box::new(BaseTypeScriptDataModel)]
    }
}

fn model_file(interfaces: &[String]) -> String {
    let mut content = String::from("import type { GraphQLError, JSONObject, JSONValue } from \"./base\";\n\n");
    content.push_str(&interfaces.join("\n\n"));
    content.push('\n');
    content
}
