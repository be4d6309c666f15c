/// Image inline type with owned pattern constants.
pub struct Image;

impl Image {
    /// The character distinguishing image markup from link markup.
    pub const BANG: char = '!';

    /// `![alt](url)` where alt and url contain no nested brackets or
    /// parentheses.
    pub const PATTERN: &'static str = r"!\[([^\[\]]*)\]\(([^()]*)\)";
}

/// Link inline type with owned pattern constant.
pub struct Link;

impl Link {
    /// `[text](url)` where text and url contain no nested brackets or
    /// parentheses. Matches preceded by `!` are image markup and must be
    /// skipped by the caller.
    pub const PATTERN: &'static str = r"\[([^\[\]]*)\]\(([^()]*)\)";
}
