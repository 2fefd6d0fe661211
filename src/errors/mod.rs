//! Error types and error reporting for the front end.
//!
//! This module defines the errors produced while parsing. It includes:
//!
//! - Syntax error structures with start and end positions
//! - The message variants for every lexical and syntactic failure
//! - The per-parse diagnostic sink, which drops repeated positions
//! - Rendering of errors as source excerpts with underlines

pub mod diagnostics;
pub mod errors;
pub mod render;
