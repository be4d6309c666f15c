//! # Inline Parsing
//!
//! Decomposes block content into a flat sequence of typed spans.
//!
//! ## Architecture
//!
//! The parser is a fixed pipeline over one evolving span sequence, starting
//! from a single `Plain` span:
//!
//! 1. Image extraction (`![alt](url)`)
//! 2. Link extraction (`[text](url)`, never re-capturing image markup)
//! 3. Bold split on `**`
//! 4. Italic split on `_`
//! 5. Code split on `` ` ``
//!
//! Each stage rewrites `Plain` spans only; styled spans produced by an
//! earlier stage are opaque to every later stage. There is no nesting:
//! bold-wrapped italic markup is never re-parsed, and swapping stage order
//! changes observable output.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum (Plain, Bold, Italic, Code, Link, Image)
//! - **`kinds`**: inline-specific types with owned delimiters and patterns
//! - **`parser`**: `parse_inline()` entry point with `split_*` stages

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{ParseError, parse_inline};
pub use types::InlineSpan;
