//! Operation stub generation for the wiregen code generator.
//!
//! A parallel, self-contained pipeline next to the template executor: it
//! derives one `.graphql` operation stub per selected root field of the
//! merged schema, and keeps the `operations/` tree reconciled across runs
//! through a persisted manifest. Stubs a developer has claimed (by removing
//! the sentinel header) are never rewritten or deleted.

mod config;
mod document;
mod generate;
mod manifest;

pub use config::{
    DEFAULT_CIRCULAR_REFERENCE_DEPTH, DEFAULT_DEPTH_LIMIT, FieldConfig,
    OperationsGenerationConfig, SelectionOptions,
};
pub use document::build_operation_document;
pub use generate::{GenerateConfig, OperationsReport, generate_operations, stub_path};
pub use manifest::{GenerationManifest, MANIFEST_FILE_NAME};
