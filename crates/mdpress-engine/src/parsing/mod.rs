//! # Markdown Parsing
//!
//! Two-layer parsing: block-level splitting/classification and inline span
//! extraction.
//!
//! ## Parsing Phases
//!
//! 1. **Block splitting** (`split_blocks`): the document is cut on blank
//!    lines into trimmed, non-empty block strings, order preserved
//! 2. **Block classification** (`blocks`): each block string is tagged with
//!    a [`blocks::BlockType`] from its raw text alone
//! 3. **Inline parsing** (`inline`): block content is decomposed into a flat
//!    sequence of [`inline::InlineSpan`]s
//!
//! ## Modules
//!
//! - **`blocks`**: `BlockType` classification plus per-kind marker knowledge
//! - **`inline`**: `InlineSpan` types and the delimiter pipeline parser
//!
//! ## Key Invariants
//!
//! - Blocks are never reordered; blank-line runs and surrounding whitespace
//!   are normalized away
//! - Classification is a pure function of one block's text
//! - Inline parsing never nests: styled spans are opaque to later pipeline
//!   stages

pub mod blocks;
pub mod inline;

/// Separator between blocks: one blank line.
const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a markdown document into trimmed, non-empty block strings.
///
/// Empty or whitespace-only documents yield an empty vector.
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
