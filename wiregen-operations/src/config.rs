//! Root-field selection and per-namespace options.

use wiregen_core::capitalize_first;
use wiregen_model::{OperationType, SchemaDocument, TypeDefinition};

/// Default bound on selection-set nesting.
pub const DEFAULT_DEPTH_LIMIT: usize = 6;

/// Default number of times a named type may appear in the ancestor chain
/// before it is no longer re-entered.
pub const DEFAULT_CIRCULAR_REFERENCE_DEPTH: usize = 1;

/// Per-namespace options for operation-document synthesis.
#[derive(Debug, Clone)]
pub struct SelectionOptions {
    /// Maximum selection-set nesting, counted from the root field's type.
    pub depth_limit: usize,
    /// How many times a named type may already appear in the ancestor chain
    /// before a field of that type is skipped.
    pub circular_reference_depth: usize,
    /// Allow-list of argument names turned into operation variables; `None`
    /// keeps every argument.
    pub arg_names: Option<Vec<String>>,
    /// Field names never selected.
    pub ignore: Vec<String>,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            depth_limit: DEFAULT_DEPTH_LIMIT,
            circular_reference_depth: DEFAULT_CIRCULAR_REFERENCE_DEPTH,
            arg_names: None,
            ignore: Vec::new(),
        }
    }
}

impl SelectionOptions {
    /// Whether `name` passes the argument allow-list.
    pub fn keeps_argument(&self, name: &str) -> bool {
        match &self.arg_names {
            Some(allowed) => allowed.iter().any(|allow| allow == name),
            None => true,
        }
    }

    /// Whether `name` is on the ignore list.
    pub fn ignores_field(&self, name: &str) -> bool {
        self.ignore.iter().any(|ignored| ignored == name)
    }
}

/// One selected root field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldConfig {
    pub operation_type: OperationType,
    /// Field name as declared on the root type, e.g. `spacex_capsules`.
    pub root_field_name: String,
    /// API namespace, the prefix before the first `_`; empty when the field
    /// carries none.
    pub namespace: String,
}

impl FieldConfig {
    /// The stub name: the field name with the namespace prefix stripped and
    /// the first letter upper-cased. An empty namespace strips nothing.
    pub fn stub_name(&self) -> String {
        let stripped = if self.namespace.is_empty() {
            self.root_field_name.as_str()
        } else {
            self.root_field_name
                .strip_prefix(&format!("{}_", self.namespace))
                .unwrap_or(self.root_field_name.as_str())
        };
        capitalize_first(stripped)
    }

    /// The stub file name, e.g. `Capsules.graphql`.
    pub fn file_name(&self) -> String {
        format!("{}.graphql", self.stub_name())
    }
}

/// Enumerates the schema's root fields and narrows them down.
///
/// Freshly constructed it selects every root field of every namespace; the
/// filter methods whittle that set down before generation.
#[derive(Debug, Clone)]
pub struct OperationsGenerationConfig {
    root_fields: Vec<FieldConfig>,
    namespaces: Vec<String>,
    base_path: String,
}

impl OperationsGenerationConfig {
    pub fn new(schema: &SchemaDocument) -> Self {
        let mut root_fields = Vec::new();
        let mut namespaces: Vec<String> = Vec::new();

        for operation_type in [
            OperationType::Query,
            OperationType::Mutation,
            OperationType::Subscription,
        ] {
            let root_name = schema.root_type_name(operation_type);
            let root = schema.types.iter().find_map(|ty| match ty {
                TypeDefinition::Object(object) if object.name == root_name => Some(object),
                _ => None,
            });
            let Some(root) = root else {
                continue;
            };
            for field in &root.fields {
                let namespace = match field.name.find('_') {
                    Some(index) => field.name[..index].to_string(),
                    None => String::new(),
                };
                if !namespaces.contains(&namespace) {
                    namespaces.push(namespace.clone());
                }
                root_fields.push(FieldConfig {
                    operation_type,
                    root_field_name: field.name.clone(),
                    namespace,
                });
            }
        }

        Self {
            root_fields,
            namespaces,
            base_path: String::new(),
        }
    }

    /// Keep only fields of the given namespaces (unknown names are ignored).
    pub fn include_namespaces(&mut self, namespaces: &[&str]) {
        let known: Vec<&str> = namespaces
            .iter()
            .copied()
            .filter(|ns| self.namespaces.iter().any(|have| have == ns))
            .collect();
        self.root_fields
            .retain(|field| known.contains(&field.namespace.as_str()));
    }

    /// Drop fields of the given namespaces.
    pub fn exclude_namespaces(&mut self, namespaces: &[&str]) {
        self.root_fields
            .retain(|field| !namespaces.contains(&field.namespace.as_str()));
    }

    pub fn filter_root_fields(&mut self, keep: impl Fn(&FieldConfig) -> bool) {
        self.root_fields.retain(|field| keep(field));
    }

    pub fn exclude_query_fields(&mut self) {
        self.root_fields
            .retain(|field| field.operation_type != OperationType::Query);
    }

    pub fn exclude_mutation_fields(&mut self) {
        self.root_fields
            .retain(|field| field.operation_type != OperationType::Mutation);
    }

    pub fn exclude_subscription_fields(&mut self) {
        self.root_fields
            .retain(|field| field.operation_type != OperationType::Subscription);
    }

    /// Subdirectory under `operations/` the stubs are placed in.
    pub fn set_base_path(&mut self, base_path: impl Into<String>) {
        self.base_path = base_path.into();
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn root_fields(&self) -> &[FieldConfig] {
        &self.root_fields
    }

    /// Namespaces seen while enumerating the schema.
    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }
}

#[cfg(test)]
mod tests {
    use wiregen_model::{FieldDefinition, ObjectType, TypeRef};

    use super::*;

    fn schema() -> SchemaDocument {
        let field = |name: &str| FieldDefinition {
            name: name.to_string(),
            arguments: vec![],
            field_type: TypeRef::Named("String".to_string()),
        };
        SchemaDocument {
            types: vec![
                TypeDefinition::Object(ObjectType {
                    name: "Query".to_string(),
                    fields: vec![field("spacex_capsules"), field("weather_forecast"), field("me")],
                }),
                TypeDefinition::Object(ObjectType {
                    name: "Mutation".to_string(),
                    fields: vec![field("spacex_insert_user")],
                }),
            ],
            ..SchemaDocument::default()
        }
    }

    #[test]
    fn test_enumerates_root_fields_with_namespaces() {
        let config = OperationsGenerationConfig::new(&schema());
        assert_eq!(config.root_fields().len(), 4);
        assert_eq!(config.namespaces(), ["spacex", "weather", ""]);

        let capsules = &config.root_fields()[0];
        assert_eq!(capsules.operation_type, OperationType::Query);
        assert_eq!(capsules.root_field_name, "spacex_capsules");
        assert_eq!(capsules.namespace, "spacex");
    }

    #[test]
    fn test_include_namespaces_drops_unknown_names() {
        let mut config = OperationsGenerationConfig::new(&schema());
        config.include_namespaces(&["spacex", "nope"]);
        assert_eq!(config.root_fields().len(), 2);
        assert!(
            config
                .root_fields()
                .iter()
                .all(|field| field.namespace == "spacex")
        );
    }

    #[test]
    fn test_exclude_namespaces_and_kinds() {
        let mut config = OperationsGenerationConfig::new(&schema());
        config.exclude_namespaces(&["weather"]);
        config.exclude_mutation_fields();
        let names: Vec<&str> = config
            .root_fields()
            .iter()
            .map(|field| field.root_field_name.as_str())
            .collect();
        assert_eq!(names, ["spacex_capsules", "me"]);
    }

    #[test]
    fn test_stub_name_strips_namespace_and_capitalizes() {
        let field = FieldConfig {
            operation_type: OperationType::Query,
            root_field_name: "spacex_capsules".to_string(),
            namespace: "spacex".to_string(),
        };
        assert_eq!(field.stub_name(), "Capsules");
        assert_eq!(field.file_name(), "Capsules.graphql");
    }

    #[test]
    fn test_stub_name_with_empty_namespace_strips_nothing() {
        let field = FieldConfig {
            operation_type: OperationType::Query,
            root_field_name: "me".to_string(),
            namespace: String::new(),
        };
        assert_eq!(field.stub_name(), "Me");
    }

    #[test]
    fn test_selection_options_defaults() {
        let options = SelectionOptions::default();
        assert_eq!(options.depth_limit, DEFAULT_DEPTH_LIMIT);
        assert_eq!(
            options.circular_reference_depth,
            DEFAULT_CIRCULAR_REFERENCE_DEPTH
        );
        assert!(options.keeps_argument("anything"));
        assert!(!options.ignores_field("anything"));
    }
}
