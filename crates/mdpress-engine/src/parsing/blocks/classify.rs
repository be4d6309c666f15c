use super::kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList};

/// The kind of a markdown block, derived purely from its raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// The default when no other kind matches.
    Paragraph,
    /// A heading with its level (1-6).
    Heading(u8),
    /// A fenced code block.
    Code,
    /// A blockquote.
    Quote,
    /// A `- ` bulleted list.
    UnorderedList,
    /// A `1. 2. 3.` numbered list.
    OrderedList,
}

/// Classifies one trimmed block string.
///
/// Kinds are checked in precedence order and the first match wins. This is
/// a pure function with no failure mode: anything unrecognized is a
/// paragraph.
pub fn classify(block: &str) -> BlockType {
    if let Some(level) = Heading::level(block) {
        return BlockType::Heading(level);
    }
    if CodeFence::is_fenced(block) {
        return BlockType::Code;
    }

    // Line-based kinds consider non-blank lines only, each trimmed so that
    // trailing-whitespace lines don't break the match.
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return BlockType::Paragraph;
    }

    if lines.iter().all(|line| BlockQuote::is_quote_line(line)) {
        return BlockType::Quote;
    }
    if lines.iter().all(|line| UnorderedList::is_item(line)) {
        return BlockType::UnorderedList;
    }
    if is_ordered_list(&lines) {
        return BlockType::OrderedList;
    }

    BlockType::Paragraph
}

/// Every line must carry a `<digits>. ` marker and the numbers must run
/// 1, 2, 3, ... with no gaps. Any deviation disqualifies the whole block.
fn is_ordered_list(lines: &[&str]) -> bool {
    lines.iter().enumerate().all(|(i, line)| {
        matches!(OrderedList::split_marker(line), Some((n, _)) if n as usize == i + 1)
    })
}
