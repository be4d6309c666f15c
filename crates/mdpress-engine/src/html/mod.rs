//! Generic tagged-tree model for HTML output and its serialization.

pub mod node;

pub use node::{Attributes, HtmlNode, SerializeError};
