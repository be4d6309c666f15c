use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// Extension of source files picked up by the content scan.
pub const MARKDOWN_EXTENSION: &str = "md";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory: {0}")]
    InvalidDir(String),
    #[error("Path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),
}

/// Read a file under `root` and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a file under `root`, creating parent directories
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Scan for markdown files under the content directory, returning their
/// paths relative to it, sorted.
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    if !content_root.exists() {
        return Err(IoError::InvalidDir(
            "content directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(content_root, content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    root: &Path,
    dir: &Path,
    files: &mut Vec<RelativePathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(root, &path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == MARKDOWN_EXTENSION
        {
            let relative = path
                .strip_prefix(root)
                .ok()
                .and_then(|p| RelativePathBuf::from_path(p).ok())
                .ok_or_else(|| IoError::NonUtf8Path(path.clone()))?;
            files.push(relative);
        }
    }

    Ok(())
}

/// Mirror `src` into `dest`, deleting any existing `dest` first so the
/// copy is clean.
pub fn copy_dir_contents(src: &Path, dest: &Path) -> Result<(), IoError> {
    if !src.exists() {
        return Err(IoError::NotFound(src.to_path_buf()));
    }
    if !src.is_dir() {
        return Err(IoError::InvalidDir(format!(
            "source path is not a directory: {}",
            src.display()
        )));
    }

    if dest.exists() {
        fs::remove_dir_all(dest).map_err(IoError::Io)?;
    }
    fs::create_dir_all(dest).map_err(IoError::Io)?;

    copy_recursive(src, dest)
}

fn copy_recursive(src: &Path, dest: &Path) -> Result<(), IoError> {
    for entry in fs::read_dir(src).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let src_item = entry.path();
        let dest_item = dest.join(entry.file_name());

        if src_item.is_dir() {
            fs::create_dir_all(&dest_item).map_err(IoError::Io)?;
            copy_recursive(&src_item, &dest_item)?;
        } else {
            fs::copy(&src_item, &dest_item).map_err(IoError::Io)?;
        }
    }

    Ok(())
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDir(format!(
            "directory does not exist: {}",
            path.display()
        )));
    }

    Ok(())
}
