/// Code span inline type with owned delimiter constant.
///
/// Code spans carry literal text; their content is never restyled.
pub struct CodeSpan;

impl CodeSpan {
    /// The single-backtick delimiter.
    pub const DELIMITER: &'static str = "`";
}
