/// Fenced code block type with owned fence constant.
///
/// Fenced blocks are raw zones: no inline parsing happens inside them.
pub struct CodeFence;

impl CodeFence {
    /// The triple-backtick fence marker.
    pub const FENCE: &'static str = "```";

    /// Whether `block` opens and closes with a fence. Unterminated fences
    /// do not count.
    pub fn is_fenced(block: &str) -> bool {
        block.starts_with(Self::FENCE) && block.ends_with(Self::FENCE)
    }

    /// Strips the opening and closing fences and, when the opening fence
    /// line carries a language tag, drops everything up to and including
    /// the first newline.
    pub fn strip_fences(block: &str) -> &str {
        let inner = block.strip_prefix(Self::FENCE).unwrap_or(block);
        let inner = inner.strip_suffix(Self::FENCE).unwrap_or(inner);
        match inner.find('\n') {
            Some(i) => &inner[i + 1..],
            None => inner,
        }
    }
}
