//! JSON schema to TypeScript interface rendering.

use wiregen_codegen::{SchemaVisitor, visit_json_schema};
use wiregen_model::JsonSchema;

/// Render `schema` as an exported TypeScript interface named `name`.
///
/// `with_errors` appends the `errors` member every response envelope
/// carries. Underspecified schemas (no type, no properties, no `$ref`)
/// collapse to an alias of `JSONObject` instead of an empty interface.
pub fn json_schema_to_interface(schema: &JsonSchema, name: &str, with_errors: bool) -> String {
    if schema.schema_type.is_none() && schema.properties.is_empty() && schema.reference.is_none() {
        return format!("export type {} = JSONObject;", name);
    }

    let mut writer = InterfaceWriter::new(name, with_errors);
    visit_json_schema(schema, &mut writer);
    writer.out
}

/// Schema visitor that accumulates interface source text.
///
/// Members reached through an array wrapper render inline (the array
/// callbacks own the member line); everything else renders as one
/// `name?: type;` line at the current nesting depth.
struct InterfaceWriter {
    out: String,
    interface_name: String,
    with_errors: bool,
    level: usize,
}

impl InterfaceWriter {
    fn new(interface_name: &str, with_errors: bool) -> Self {
        Self {
            out: String::new(),
            interface_name: interface_name.to_string(),
            with_errors,
            level: 0,
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.level {
            self.out.push_str("  ");
        }
    }

    fn write_member(&mut self, name: &str, required: bool, type_name: &str) {
        self.write_indent();
        let optional = if required { "" } else { "?" };
        self.out
            .push_str(&format!("{}{}: {};\n", name, optional, type_name));
    }

    fn write_leaf(&mut self, name: &str, required: bool, is_array: bool, type_name: &str) {
        if is_array {
            self.out.push_str(type_name);
        } else {
            self.write_member(name, required, type_name);
        }
    }
}

fn enum_union(values: &[String]) -> String {
    values
        .iter()
        .map(|value| format!("\"{}\"", value))
        .collect::<Vec<_>>()
        .join(" | ")
}

impl SchemaVisitor for InterfaceWriter {
    fn enter_root(&mut self) {
        self.out
            .push_str(&format!("export interface {} {{\n", self.interface_name));
        self.level = 1;
    }

    fn leave_root(&mut self) {
        if self.with_errors {
            self.write_member("errors", false, "GraphQLError[]");
        }
        self.level = 0;
        self.out.push('}');
    }

    fn enter_object(&mut self, name: &str, required: bool, is_array: bool) {
        if is_array {
            self.out.push_str("{\n");
        } else {
            self.write_indent();
            let optional = if required { "" } else { "?" };
            self.out.push_str(&format!("{}{}: {{\n", name, optional));
        }
        self.level += 1;
    }

    fn leave_object(&mut self, _name: &str, _required: bool, is_array: bool) {
        self.level -= 1;
        self.write_indent();
        self.out.push('}');
        if !is_array {
            self.out.push_str(";\n");
        }
    }

    fn enter_array(&mut self, name: &str, required: bool, _is_array: bool) {
        if name.is_empty() {
            return;
        }
        self.write_indent();
        let optional = if required { "" } else { "?" };
        self.out.push_str(&format!("{}{}: ", name, optional));
    }

    fn leave_array(&mut self, name: &str, _required: bool, _is_array: bool) {
        if name.is_empty() {
            self.out.push_str("[]");
        } else {
            self.out.push_str("[];\n");
        }
    }

    fn visit_string(
        &mut self,
        name: &str,
        required: bool,
        is_array: bool,
        enum_values: Option<&[String]>,
        _enum_name: Option<&str>,
    ) {
        match enum_values {
            Some(values) => {
                let union = enum_union(values);
                if is_array {
                    self.out.push_str(&format!("({})", union));
                } else {
                    self.write_member(name, required, &union);
                }
            }
            None => self.write_leaf(name, required, is_array, "string"),
        }
    }

    fn visit_number(&mut self, name: &str, required: bool, is_array: bool) {
        self.write_leaf(name, required, is_array, "number");
    }

    fn visit_boolean(&mut self, name: &str, required: bool, is_array: bool) {
        self.write_leaf(name, required, is_array, "boolean");
    }

    fn visit_any(&mut self, name: &str, required: bool, is_array: bool) {
        self.write_leaf(name, required, is_array, "JSONValue");
    }

    fn visit_custom_type(&mut self, name: &str, type_name: &str, required: bool, is_array: bool) {
        if is_array {
            self.out.push_str(type_name);
        } else {
            self.write_member(name, required, type_name);
        }
    }
}
