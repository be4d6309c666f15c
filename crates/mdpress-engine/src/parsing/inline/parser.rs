use std::sync::OnceLock;

use regex::Regex;

use super::{
    kinds::{Bold, CodeSpan, Image, Italic, Link},
    types::InlineSpan,
};

/// Inline parsing failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A delimiter opened a styled span that never closed. Aborts the
    /// whole document render.
    #[error("unmatched delimiter '{delimiter}'")]
    UnmatchedDelimiter { delimiter: &'static str },
}

fn image_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(Image::PATTERN).expect("invalid image pattern"))
}

fn link_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(Link::PATTERN).expect("invalid link pattern"))
}

/// Parses raw inline text into an ordered span sequence.
///
/// Runs the fixed pipeline: images, links, bold, italic, code. Each stage
/// rewrites `Plain` spans only, so styled text is never re-parsed by a
/// later stage.
pub fn parse_inline(text: &str) -> Result<Vec<InlineSpan>, ParseError> {
    let mut spans = vec![InlineSpan::Plain(text.to_string())];
    spans = split_images(spans);
    spans = split_links(spans);
    spans = split_delimiter(spans, Bold::DELIMITER, InlineSpan::Bold)?;
    spans = split_delimiter(spans, Italic::DELIMITER, InlineSpan::Italic)?;
    spans = split_delimiter(spans, CodeSpan::DELIMITER, InlineSpan::Code)?;
    Ok(spans)
}

/// Replaces `![alt](url)` matches in `Plain` spans with `Image` spans,
/// splitting the surrounding text. Matches are taken left to right,
/// non-overlapping; empty surrounding fragments are dropped.
fn split_images(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    let mut out = Vec::new();
    for span in spans {
        let InlineSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };
        let mut consumed = 0;
        for caps in image_pattern().captures_iter(&text) {
            let Some(m) = caps.get(0) else { continue };
            if m.start() > consumed {
                out.push(InlineSpan::Plain(text[consumed..m.start()].to_string()));
            }
            out.push(InlineSpan::Image {
                alt: caps[1].to_string(),
                url: Some(caps[2].to_string()),
            });
            consumed = m.end();
        }
        if consumed == 0 {
            out.push(InlineSpan::Plain(text));
        } else if consumed < text.len() {
            out.push(InlineSpan::Plain(text[consumed..].to_string()));
        }
    }
    out
}

/// Replaces `[text](url)` matches in `Plain` spans with `Link` spans.
///
/// Runs after [`split_images`], and additionally skips any match directly
/// preceded by `!` so image markup is never captured as a link.
fn split_links(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    let mut out = Vec::new();
    for span in spans {
        let InlineSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };
        let mut consumed = 0;
        let mut matched = false;
        for caps in link_pattern().captures_iter(&text) {
            let Some(m) = caps.get(0) else { continue };
            if m.start() > 0 && text[..m.start()].ends_with(Image::BANG) {
                continue;
            }
            matched = true;
            if m.start() > consumed {
                out.push(InlineSpan::Plain(text[consumed..m.start()].to_string()));
            }
            out.push(InlineSpan::Link {
                text: caps[1].to_string(),
                url: Some(caps[2].to_string()),
            });
            consumed = m.end();
        }
        if !matched {
            out.push(InlineSpan::Plain(text));
        } else if consumed < text.len() {
            out.push(InlineSpan::Plain(text[consumed..].to_string()));
        }
    }
    out
}

/// Splits the text of every `Plain` span on `delimiter`, turning
/// odd-position fragments into spans built by `make`.
///
/// A span without the delimiter passes through untouched. An even fragment
/// count means an opener without a closer and fails the parse. Empty
/// fragments are dropped at the ends but preserved in the interior, so
/// empty styled spans stay representable.
fn split_delimiter(
    spans: Vec<InlineSpan>,
    delimiter: &'static str,
    make: fn(String) -> InlineSpan,
) -> Result<Vec<InlineSpan>, ParseError> {
    let mut out = Vec::new();
    for span in spans {
        let InlineSpan::Plain(text) = span else {
            out.push(span);
            continue;
        };
        if !text.contains(delimiter) {
            out.push(InlineSpan::Plain(text));
            continue;
        }
        let parts: Vec<&str> = text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(ParseError::UnmatchedDelimiter { delimiter });
        }
        let last = parts.len() - 1;
        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() && (i == 0 || i == last) {
                continue;
            }
            if i % 2 == 0 {
                out.push(InlineSpan::Plain(part.to_string()));
            } else {
                out.push(make(part.to_string()));
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(s: &str) -> InlineSpan {
        InlineSpan::Plain(s.to_string())
    }

    fn link(text: &str, url: &str) -> InlineSpan {
        InlineSpan::Link {
            text: text.to_string(),
            url: Some(url.to_string()),
        }
    }

    fn image(alt: &str, url: &str) -> InlineSpan {
        InlineSpan::Image {
            alt: alt.to_string(),
            url: Some(url.to_string()),
        }
    }

    #[test]
    fn plain_text_stays_whole() {
        let spans = parse_inline("just plain text").unwrap();
        assert_eq!(spans, vec![plain("just plain text")]);
    }

    #[test]
    fn bold_split() {
        let spans = parse_inline("a **b** c").unwrap();
        assert_eq!(
            spans,
            vec![plain("a "), InlineSpan::Bold("b".to_string()), plain(" c")]
        );
    }

    #[test]
    fn italic_split() {
        let spans = parse_inline("an _italic phrase_ here").unwrap();
        assert_eq!(
            spans,
            vec![
                plain("an "),
                InlineSpan::Italic("italic phrase".to_string()),
                plain(" here"),
            ]
        );
    }

    #[test]
    fn code_split() {
        let spans = parse_inline("text with a `code block` word").unwrap();
        assert_eq!(
            spans,
            vec![
                plain("text with a "),
                InlineSpan::Code("code block".to_string()),
                plain(" word"),
            ]
        );
    }

    #[test]
    fn delimiter_at_start_drops_leading_empty() {
        let spans = parse_inline("**bold** at start").unwrap();
        assert_eq!(
            spans,
            vec![InlineSpan::Bold("bold".to_string()), plain(" at start")]
        );
    }

    #[test]
    fn delimiter_at_end_drops_trailing_empty() {
        let spans = parse_inline("text at end `code`").unwrap();
        assert_eq!(
            spans,
            vec![plain("text at end "), InlineSpan::Code("code".to_string())]
        );
    }

    #[test]
    fn fully_delimited_text() {
        let spans = parse_inline("**only bold**").unwrap();
        assert_eq!(spans, vec![InlineSpan::Bold("only bold".to_string())]);
    }

    #[test]
    fn multiple_delimited_sections() {
        let spans = parse_inline("text `one` more `two` end").unwrap();
        assert_eq!(
            spans,
            vec![
                plain("text "),
                InlineSpan::Code("one".to_string()),
                plain(" more "),
                InlineSpan::Code("two".to_string()),
                plain(" end"),
            ]
        );
    }

    #[test]
    fn interior_empty_fragment_is_preserved() {
        let spans = parse_inline("text `` more").unwrap();
        assert_eq!(
            spans,
            vec![
                plain("text "),
                InlineSpan::Code(String::new()),
                plain(" more"),
            ]
        );
    }

    #[test]
    fn unmatched_bold_delimiter_fails() {
        let err = parse_inline("a **b c").unwrap_err();
        assert_eq!(err, ParseError::UnmatchedDelimiter { delimiter: "**" });
    }

    #[test]
    fn unmatched_code_delimiter_fails() {
        let err = parse_inline("text with `unmatched code").unwrap_err();
        assert_eq!(err, ParseError::UnmatchedDelimiter { delimiter: "`" });
    }

    #[test]
    fn extracts_link() {
        let spans = parse_inline("see [docs](https://example.com) for more").unwrap();
        assert_eq!(
            spans,
            vec![
                plain("see "),
                link("docs", "https://example.com"),
                plain(" for more"),
            ]
        );
    }

    #[test]
    fn extracts_image() {
        let spans = parse_inline("before ![alt text](/img/cat.png) after").unwrap();
        assert_eq!(
            spans,
            vec![
                plain("before "),
                image("alt text", "/img/cat.png"),
                plain(" after"),
            ]
        );
    }

    #[test]
    fn image_is_never_captured_as_link() {
        let spans = parse_inline("![a](u1) [b](u2)").unwrap();
        assert_eq!(
            spans,
            vec![image("a", "u1"), plain(" "), link("b", "u2")]
        );
    }

    #[test]
    fn adjacent_images_leave_no_empty_fragments() {
        let spans = parse_inline("![one](u1)![two](u2)").unwrap();
        assert_eq!(spans, vec![image("one", "u1"), image("two", "u2")]);
    }

    #[test]
    fn empty_alt_and_anchor_are_allowed() {
        let spans = parse_inline("![](u1) and [](u2)").unwrap();
        assert_eq!(
            spans,
            vec![image("", "u1"), plain(" and "), link("", "u2")]
        );
    }

    #[test]
    fn link_text_is_not_restyled_by_later_stages() {
        // Link extraction runs before the delimiter stages, so markup
        // inside the link text has already been captured and stays literal.
        let spans = parse_inline("[**bold** link](u)").unwrap();
        assert_eq!(spans, vec![link("**bold** link", "u")]);
    }

    #[test]
    fn bold_wrapped_italic_markup_is_not_reparsed() {
        let spans = parse_inline("**_x_**").unwrap();
        assert_eq!(spans, vec![InlineSpan::Bold("_x_".to_string())]);
    }

    #[test]
    fn mixed_styles_in_one_line() {
        let spans = parse_inline("This is **bold** and _italic_ and `code`").unwrap();
        assert_eq!(
            spans,
            vec![
                plain("This is "),
                InlineSpan::Bold("bold".to_string()),
                plain(" and "),
                InlineSpan::Italic("italic".to_string()),
                plain(" and "),
                InlineSpan::Code("code".to_string()),
            ]
        );
    }

    #[test]
    fn empty_input_is_a_single_empty_plain_span() {
        let spans = parse_inline("").unwrap();
        assert_eq!(spans, vec![plain("")]);
    }

    #[test]
    fn concatenated_span_text_covers_the_input() {
        let spans = parse_inline("a **b** c [d](u) e").unwrap();
        let rejoined: String = spans
            .iter()
            .map(|s| match s {
                InlineSpan::Plain(t)
                | InlineSpan::Bold(t)
                | InlineSpan::Italic(t)
                | InlineSpan::Code(t) => t.clone(),
                InlineSpan::Link { text, .. } => text.clone(),
                InlineSpan::Image { alt, .. } => alt.clone(),
            })
            .collect();
        assert_eq!(rejoined, "a b c d e");
    }
}
