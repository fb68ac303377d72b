//! Language-specific syntax knowledge.
//!
//! pinpoint resolves names in C# only. Grammar details (node kinds, field
//! names, which kinds count as declarations) live in [`csharp`]; generic
//! node helpers live in [`tree_sitter_utils`].

pub mod csharp;
pub mod tree_sitter_utils;
