//! Typename derivation for generated TypeScript models.

use wiregen_model::Operation;

/// Interface name for an operation's public input model.
pub fn input_typename(operation: &Operation) -> String {
    format!("{}Input", operation.name)
}

/// Interface name for an operation's server-side input model.
pub fn internal_input_typename(operation: &Operation) -> String {
    format!("{}InternalInput", operation.name)
}

/// Interface name for an operation's response envelope.
pub fn response_typename(operation: &Operation) -> String {
    format!("{}Response", operation.name)
}
