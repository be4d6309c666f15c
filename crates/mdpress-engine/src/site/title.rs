use crate::parsing::blocks::kinds::Heading;

/// No line of the document is a non-empty `# ` heading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no h1 heading found in markdown content")]
pub struct NoHeadingFound;

/// Extracts the page title: the trimmed text of the first level-1 heading
/// line. A `# ` line with empty text is skipped and scanning continues.
pub fn extract_title(markdown: &str) -> Result<String, NoHeadingFound> {
    markdown
        .lines()
        .map(str::trim)
        .filter(|line| Heading::level(line) == Some(1))
        .map(|line| Heading::strip_marker(line).trim())
        .find(|title| !title.is_empty())
        .map(str::to_string)
        .ok_or(NoHeadingFound)
}
