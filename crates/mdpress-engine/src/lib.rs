pub mod html;
pub mod io;
pub mod parsing;
pub mod render;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use html::{HtmlNode, SerializeError};
pub use parsing::blocks::BlockType;
pub use parsing::inline::{InlineSpan, ParseError};
pub use render::{RenderError, render_document};
pub use site::{SiteError, generate_page, generate_pages_recursive};
