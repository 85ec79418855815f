//! Recursive-descent JSON-schema visitor.
//!
//! Every type-emitting template renders through this walker: it traverses an
//! operation's variables or response schema and dispatches to the visitor's
//! callbacks per node, carrying down whether the property is required and
//! whether it was reached through an array wrapper. The visitor itself
//! produces nothing; callbacks accumulate output by side effect.

use wiregen_model::JsonSchema;

/// Callbacks invoked during schema traversal.
///
/// All methods default to no-ops, so implementors only override the shapes
/// they care about. `name` is the property name under which the node was
/// reached; array items are visited under the empty name.
pub trait SchemaVisitor {
    fn enter_root(&mut self) {}
    fn leave_root(&mut self) {}

    fn enter_object(&mut self, name: &str, required: bool, is_array: bool) {
        let _ = (name, required, is_array);
    }
    fn leave_object(&mut self, name: &str, required: bool, is_array: bool) {
        let _ = (name, required, is_array);
    }

    fn enter_array(&mut self, name: &str, required: bool, is_array: bool) {
        let _ = (name, required, is_array);
    }
    fn leave_array(&mut self, name: &str, required: bool, is_array: bool) {
        let _ = (name, required, is_array);
    }

    fn visit_string(
        &mut self,
        name: &str,
        required: bool,
        is_array: bool,
        enum_values: Option<&[String]>,
        enum_name: Option<&str>,
    ) {
        let _ = (name, required, is_array, enum_values, enum_name);
    }

    fn visit_number(&mut self, name: &str, required: bool, is_array: bool) {
        let _ = (name, required, is_array);
    }

    fn visit_boolean(&mut self, name: &str, required: bool, is_array: bool) {
        let _ = (name, required, is_array);
    }

    /// Fallback for nodes without a recognized shape.
    fn visit_any(&mut self, name: &str, required: bool, is_array: bool) {
        let _ = (name, required, is_array);
    }

    /// A `$ref` to a named definition. The referenced schema itself is not
    /// descended into; only the definition name is reported.
    fn visit_custom_type(&mut self, name: &str, type_name: &str, required: bool, is_array: bool) {
        let _ = (name, type_name, required, is_array);
    }
}

/// Walk `schema` with `visitor`.
///
/// The root is expected to be an object schema; its properties are visited
/// in declaration order between `enter_root` and `leave_root`.
pub fn visit_json_schema(schema: &JsonSchema, visitor: &mut dyn SchemaVisitor) {
    visitor.enter_root();
    visit_properties(schema, visitor);
    visitor.leave_root();
}

fn visit_properties(schema: &JsonSchema, visitor: &mut dyn SchemaVisitor) {
    for (name, property) in &schema.properties {
        let required = schema.requires(name);
        visit_schema(property, visitor, name, required, false);
    }
}

fn visit_schema(
    schema: &JsonSchema,
    visitor: &mut dyn SchemaVisitor,
    name: &str,
    required: bool,
    is_array: bool,
) {
    if let Some(reference) = &schema.reference {
        let type_name = reference
            .rsplit('/')
            .next()
            .unwrap_or(reference.as_str());
        visitor.visit_custom_type(name, type_name, required, is_array);
        return;
    }

    match schema.resolved_type() {
        Some("number") | Some("integer") => visitor.visit_number(name, required, is_array),
        Some("boolean") => visitor.visit_boolean(name, required, is_array),
        Some("string") => visitor.visit_string(
            name,
            required,
            is_array,
            schema.enum_values.as_deref(),
            schema.enum_name.as_deref(),
        ),
        Some("object") => {
            visitor.enter_object(name, required, is_array);
            visit_properties(schema, visitor);
            visitor.leave_object(name, required, is_array);
        }
        Some("array") => {
            visitor.enter_array(name, required, is_array);
            match &schema.items {
                // Items keep the array's required flag; they are reached
                // through the wrapper, so is_array flips on.
                Some(items) => visit_schema(items, visitor, "", required, true),
                None => visitor.visit_any("", required, true),
            }
            visitor.leave_array(name, required, is_array);
        }
        // Underspecified nodes degrade to `any`; one malformed field must
        // never abort a whole generation run.
        _ => visitor.visit_any(name, required, is_array),
    }
}
