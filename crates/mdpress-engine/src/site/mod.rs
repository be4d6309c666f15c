//! # Site Generation
//!
//! Orchestrates the per-file pipeline: read markdown, render to HTML,
//! extract the title, fill the shared template, write the mirrored output
//! file.
//!
//! ## Modules
//!
//! - **`title`**: first-`# `-line title extraction
//! - **`template`**: `{{ Title }}`/`{{ Content }}` substitution and base
//!   path rewriting

pub mod template;
pub mod title;

use std::fs;
use std::path::{Path, PathBuf};

use relative_path::{RelativePath, RelativePathBuf};

use crate::html::SerializeError;
use crate::io::{self, IoError};
use crate::render::{RenderError, render_document};
use template::apply_template;
use title::{NoHeadingFound, extract_title};

/// Failure while assembling one page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Serialize(#[from] SerializeError),
    #[error(transparent)]
    Title(#[from] NoHeadingFound),
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Site generation failure. Aborts the walk; the failing page's path is
/// carried for reporting.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("template file does not exist: {0}")]
    TemplateNotFound(PathBuf),
    #[error("failed to generate {path}: {source}")]
    Page { path: String, source: PageError },
}

/// Renders one markdown document into a finished HTML page string.
pub fn render_page(markdown: &str, template: &str, base_path: &str) -> Result<String, PageError> {
    let content = render_document(markdown)?.to_html()?;
    let title = extract_title(markdown)?;
    Ok(apply_template(template, &title, &content, base_path))
}

/// Generates a single page from a markdown file.
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    let template = read_template(template_path)?;
    let markdown = fs::read_to_string(from_path).map_err(IoError::Io)?;

    let page = render_page(&markdown, &template, base_path).map_err(|source| SiteError::Page {
        path: from_path.display().to_string(),
        source,
    })?;

    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(dest_path, page).map_err(IoError::Io)?;
    Ok(())
}

/// Converts every `.md` file under `content_dir` into a same-named `.html`
/// file in the mirrored `dest_dir` tree.
///
/// The template is read once and shared by all pages. Non-markdown files
/// are ignored. Returns the generated pages' paths relative to `dest_dir`,
/// in the order they were written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<RelativePathBuf>, SiteError> {
    io::validate_dir(content_dir)?;
    let template = read_template(template_path)?;

    let mut generated = Vec::new();
    for source in io::scan_markdown_files(content_dir)? {
        let markdown = io::read_file(&source, content_dir).map_err(|e| page_error(&source, e))?;
        let page = render_page(&markdown, &template, base_path)
            .map_err(|source_err| SiteError::Page {
                path: source.to_string(),
                source: source_err,
            })?;

        let dest = source.with_extension("html");
        io::write_file(&dest, dest_dir, &page).map_err(|e| page_error(&source, e))?;
        generated.push(dest);
    }

    Ok(generated)
}

fn page_error(path: &RelativePath, err: IoError) -> SiteError {
    SiteError::Page {
        path: path.to_string(),
        source: PageError::Io(err),
    }
}

fn read_template(template_path: &Path) -> Result<String, SiteError> {
    if !template_path.exists() {
        return Err(SiteError::TemplateNotFound(template_path.to_path_buf()));
    }
    fs::read_to_string(template_path)
        .map_err(|e| SiteError::Io(IoError::Io(e)))
}
