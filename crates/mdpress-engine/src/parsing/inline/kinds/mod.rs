//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Bold`**: `DELIMITER = "**"`
//! - **`Italic`**: `DELIMITER = "_"`
//! - **`CodeSpan`**: `DELIMITER = "`"`
//! - **`Image`**: `![alt](url)` pattern, `BANG = '!'`
//! - **`Link`**: `[text](url)` pattern
//!
//! ## Design Principle
//!
//! All delimiter and pattern constants live here, not scattered in parser
//! code. The parser calls these constants; it never hardcodes `**` or `![`.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use link::{Image, Link};
