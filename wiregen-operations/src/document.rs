//! Default operation-document synthesis.
//!
//! For a selected root field, builds the operation a developer would write
//! as a starting point: every argument becomes a variable (schema defaults
//! carried over), and the selection set expands to all reachable leaf
//! fields within the configured depth and circular-reference bounds.

use eyre::{Result, bail};
use wiregen_codegen::CodeBuilder;
use wiregen_model::{FieldDefinition, ObjectType, SchemaIndex};

use crate::{FieldConfig, SelectionOptions};

/// Synthesize the operation document for `field`, without the sentinel
/// header.
pub fn build_operation_document(
    index: &SchemaIndex<'_>,
    field: &FieldConfig,
    options: &SelectionOptions,
) -> Result<String> {
    let root_name = index.document().root_type_name(field.operation_type);
    let Some(root) = index.object_type(root_name) else {
        bail!("schema declares no '{}' root type", root_name);
    };
    let Some(definition) = root
        .fields
        .iter()
        .find(|candidate| candidate.name == field.root_field_name)
    else {
        bail!(
            "root type '{}' has no field '{}'",
            root_name,
            field.root_field_name
        );
    };

    let mut builder = CodeBuilder::graphql();
    builder
        .push_line(&format!(
            "{} {}{} {{",
            field.operation_type.keyword(),
            field.stub_name(),
            variable_definitions(definition, options)
        ))
        .push_indent();

    let arguments = argument_list(definition, options);
    let field_type = definition.field_type.named_type();
    let selection = match index.object_type(field_type) {
        Some(object) => {
            let mut ancestors = vec![object.name.clone()];
            select_fields(index, object, options, &mut ancestors)
        }
        None => Vec::new(),
    };

    if selection.is_empty() {
        // Leaf root field, or a selection that collapsed entirely under the
        // limits; emit the bare field so the stub is visibly incomplete.
        builder.push_line(&format!("{}{}", field.root_field_name, arguments));
    } else {
        builder
            .push_line(&format!("{}{} {{", field.root_field_name, arguments))
            .push_indent();
        emit_selection(&mut builder, &selection);
        builder.push_dedent().push_line("}");
    }

    builder.push_dedent().push_line("}");
    Ok(builder.build())
}

enum Selection {
    Leaf(String),
    Nested { name: String, children: Vec<Selection> },
}

/// Expand the selection set for `object`.
///
/// `ancestors` holds the named types on the path down to (and including)
/// `object`; it bounds both nesting depth and circular re-entry.
fn select_fields(
    index: &SchemaIndex<'_>,
    object: &ObjectType,
    options: &SelectionOptions,
    ancestors: &mut Vec<String>,
) -> Vec<Selection> {
    let mut selection = Vec::new();
    for field in &object.fields {
        if options.ignores_field(&field.name) {
            continue;
        }
        let type_name = field.field_type.named_type();
        if index.is_leaf_type(type_name) {
            selection.push(Selection::Leaf(field.name.clone()));
            continue;
        }
        let Some(nested) = index.object_type(type_name) else {
            // Non-object composite in an output position; keep it opaque.
            selection.push(Selection::Leaf(field.name.clone()));
            continue;
        };
        if ancestors.len() >= options.depth_limit {
            continue;
        }
        let occurrences = ancestors
            .iter()
            .filter(|ancestor| ancestor.as_str() == type_name)
            .count();
        if occurrences >= options.circular_reference_depth {
            continue;
        }
        ancestors.push(type_name.to_string());
        let children = select_fields(index, nested, options, ancestors);
        ancestors.pop();
        if children.is_empty() {
            continue;
        }
        selection.push(Selection::Nested {
            name: field.name.clone(),
            children,
        });
    }
    selection
}

fn emit_selection(builder: &mut CodeBuilder, selection: &[Selection]) {
    for node in selection {
        match node {
            Selection::Leaf(name) => {
                builder.push_line(name);
            }
            Selection::Nested { name, children } => {
                builder.push_line(&format!("{} {{", name)).push_indent();
                emit_selection(builder, children);
                builder.push_dedent().push_line("}");
            }
        }
    }
}

fn variable_definitions(definition: &FieldDefinition, options: &SelectionOptions) -> String {
    let variables: Vec<String> = definition
        .arguments
        .iter()
        .filter(|arg| options.keeps_argument(&arg.name))
        .map(|arg| {
            let default = arg
                .default_value
                .as_ref()
                .map(|value| format!(" = {}", value))
                .unwrap_or_default();
            format!("${}: {}{}", arg.name, arg.value_type.render(), default)
        })
        .collect();
    if variables.is_empty() {
        String::new()
    } else {
        format!("({})", variables.join(", "))
    }
}

fn argument_list(definition: &FieldDefinition, options: &SelectionOptions) -> String {
    let arguments: Vec<String> = definition
        .arguments
        .iter()
        .filter(|arg| options.keeps_argument(&arg.name))
        .map(|arg| format!("{}: ${}", arg.name, arg.name))
        .collect();
    if arguments.is_empty() {
        String::new()
    } else {
        format!("({})", arguments.join(", "))
    }
}
