//! Sentinel headers marking tool-generated files.
//!
//! Both the Output Writer and the operation-stub generator use these exact
//! prefixes to decide whether a file on disk is still tool-owned. Removing
//! the header is how a developer claims a file; the tool then never writes
//! or deletes it again.

/// Header prefixed to generated source files written with
/// customization protection.
pub const GENERATED_FILE_HEADER: &str = "// This file is auto generated.\n// Remove/modify this header if you want to customize the file.\n\n";

/// Header prefixed to generated `.graphql` operation stubs.
pub const GENERATED_OPERATION_HEADER: &str =
    "# This file is auto generated.\n# Remove/modify this header if you want to customize the operation.\n";
