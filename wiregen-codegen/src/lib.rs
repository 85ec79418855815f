//! Template pipeline for the wiregen code generator.
//!
//! This crate is the generation core: templates declare what they emit and
//! which other templates they rely on, the resolver flattens that graph into
//! a deduplicated execution order, and the executor runs every template and
//! commits the output through a customization-preserving writer.
//!
//! # Module Organization
//!
//! - [`template`] - The [`Template`] contract and its output types
//! - [`resolve`] - Dependency flattening ([`collect_all_templates`])
//! - [`executor`] - Run orchestration ([`generate_code`])
//! - [`outwriter`] - Output writer abstraction (filesystem + in-memory)
//! - [`visitor`] - Recursive-descent JSON-schema visitor
//! - [`builder`] - Indentation-aware string builder

pub mod builder;
pub mod executor;
pub mod outwriter;
pub mod resolve;
pub mod template;
pub mod visitor;

pub use builder::{CodeBuilder, Indent};
pub use executor::{CodeGenConfig, GenerationSummary, generate_code};
pub use outwriter::{CodeGenOutWriter, FileSystemWriter, MemoryWriter};
pub use resolve::{DEFAULT_MAX_TEMPLATE_DEPTH, collect_all_templates};
pub use template::{GenerationContext, Template, TemplateOutputFile, WritePolicy};
pub use visitor::{SchemaVisitor, visit_json_schema};
