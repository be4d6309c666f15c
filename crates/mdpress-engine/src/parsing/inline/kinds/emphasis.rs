/// Bold inline type with owned delimiter constant.
pub struct Bold;

impl Bold {
    /// The double-asterisk delimiter.
    pub const DELIMITER: &'static str = "**";
}

/// Italic inline type with owned delimiter constant.
pub struct Italic;

impl Italic {
    /// The underscore delimiter.
    pub const DELIMITER: &'static str = "_";
}
