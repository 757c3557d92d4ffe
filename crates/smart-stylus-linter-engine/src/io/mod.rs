use crate::models::StylesheetFile;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory: {0}")]
    InvalidDir(String),
}

/// Read a stylesheet relative to `root`
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to a stylesheet relative to `root`
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Recursively find files under `root` whose extension is in `extensions`
pub fn scan_stylesheet_files(
    root: &Path,
    extensions: &[String],
) -> Result<Vec<StylesheetFile>, IoError> {
    validate_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, root, extensions, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    root: &Path,
    dir: &Path,
    extensions: &[String],
    files: &mut Vec<StylesheetFile>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            // Skip hidden directories such as .git
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            scan_directory_recursive(root, &path, extensions, files)?;
        } else if let Some(file) = to_stylesheet_file(root, &path)
            && file.has_extension(extensions)
        {
            files.push(file);
        }
    }

    Ok(())
}

/// Express `path` relative to `root`, if it lies underneath it
pub fn to_stylesheet_file(root: &Path, path: &Path) -> Option<StylesheetFile> {
    let relative = path.strip_prefix(root).ok()?;
    RelativePathBuf::from_path(relative)
        .ok()
        .map(StylesheetFile::new)
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDir(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }

    Ok(())
}
