//! # Block Rendering
//!
//! Turns classified block strings into [`HtmlNode`] trees, invoking the
//! inline parser for leaf content. The document renderer collects every
//! block under a root `div`.

use crate::html::{Attributes, HtmlNode};
use crate::parsing::blocks::kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList};
use crate::parsing::blocks::{BlockType, classify};
use crate::parsing::inline::{InlineSpan, ParseError, parse_inline};
use crate::parsing::split_blocks;

/// Rendering failure. Unrecoverable for the document in progress.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A link or image span carried no URL. Unreachable through the
    /// parser, which always captures one; guards direct construction.
    #[error("{kind} span is missing a url")]
    MissingUrl { kind: &'static str },
}

/// Renders a whole markdown document into a root `div` node.
///
/// An empty or whitespace-only document yields a `div` with zero children,
/// which fails at serialization time per the parent-node invariant.
pub fn render_document(markdown: &str) -> Result<HtmlNode, RenderError> {
    let children = split_blocks(markdown)
        .into_iter()
        .map(|block| render_block(block, classify(block)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("div", children))
}

/// Renders one trimmed block string of the given kind.
pub fn render_block(block: &str, kind: BlockType) -> Result<HtmlNode, RenderError> {
    match kind {
        BlockType::Paragraph => render_paragraph(block),
        BlockType::Heading(level) => render_heading(block, level),
        BlockType::Code => Ok(render_code(block)),
        BlockType::Quote => render_quote(block),
        BlockType::UnorderedList => render_unordered_list(block),
        BlockType::OrderedList => render_ordered_list(block),
    }
}

/// Converts one inline span into its leaf node.
pub fn span_to_node(span: InlineSpan) -> Result<HtmlNode, RenderError> {
    match span {
        InlineSpan::Plain(text) => Ok(HtmlNode::text(text)),
        InlineSpan::Bold(text) => Ok(HtmlNode::leaf("b", text)),
        InlineSpan::Italic(text) => Ok(HtmlNode::leaf("i", text)),
        InlineSpan::Code(text) => Ok(HtmlNode::leaf("code", text)),
        InlineSpan::Link { text, url } => {
            let url = url.ok_or(RenderError::MissingUrl { kind: "link" })?;
            Ok(HtmlNode::leaf_with_attrs(
                "a",
                Some(text),
                Attributes::from([("href", url)]),
            ))
        }
        InlineSpan::Image { alt, url } => {
            let url = url.ok_or(RenderError::MissingUrl { kind: "image" })?;
            Ok(HtmlNode::leaf_with_attrs(
                "img",
                None,
                Attributes::from([("src", url), ("alt", alt)]),
            ))
        }
    }
}

/// Inline-parses `text` and wraps each span as a leaf node.
fn inline_children(text: &str) -> Result<Vec<HtmlNode>, RenderError> {
    parse_inline(text)?.into_iter().map(span_to_node).collect()
}

/// The non-blank lines of a block, each trimmed. Line-based renderers
/// operate on these, mirroring what classification matched on.
fn content_lines(block: &str) -> impl Iterator<Item = &str> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

fn render_paragraph(block: &str) -> Result<HtmlNode, RenderError> {
    let text = block.replace('\n', " ");
    Ok(HtmlNode::parent("p", inline_children(&text)?))
}

fn render_heading(block: &str, level: u8) -> Result<HtmlNode, RenderError> {
    let text = Heading::strip_marker(block);
    Ok(HtmlNode::parent(
        format!("h{level}"),
        inline_children(text)?,
    ))
}

/// Code content is literal: the fences (and any language-tag line) are
/// stripped and the rest bypasses inline parsing entirely.
fn render_code(block: &str) -> HtmlNode {
    let content = CodeFence::strip_fences(block);
    HtmlNode::parent("pre", vec![HtmlNode::leaf("code", content)])
}

fn render_quote(block: &str) -> Result<HtmlNode, RenderError> {
    let text = content_lines(block)
        .map(BlockQuote::strip_prefix)
        .collect::<Vec<_>>()
        .join(" ");
    Ok(HtmlNode::parent("blockquote", inline_children(&text)?))
}

fn render_unordered_list(block: &str) -> Result<HtmlNode, RenderError> {
    let items = content_lines(block)
        .map(|line| Ok(HtmlNode::parent("li", inline_children(UnorderedList::strip_marker(line))?)))
        .collect::<Result<Vec<_>, RenderError>>()?;
    Ok(HtmlNode::parent("ul", items))
}

fn render_ordered_list(block: &str) -> Result<HtmlNode, RenderError> {
    let items = content_lines(block)
        .map(|line| {
            let text = OrderedList::split_marker(line).map_or(line, |(_, rest)| rest);
            Ok(HtmlNode::parent("li", inline_children(text)?))
        })
        .collect::<Result<Vec<_>, RenderError>>()?;
    Ok(HtmlNode::parent("ol", items))
}
