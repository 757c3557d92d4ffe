use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use smart_stylus_linter_config::Config;
use smart_stylus_linter_engine::{StylesheetFile, io};

/// A file to process, addressed relative to the directory it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub root: PathBuf,
    pub file: StylesheetFile,
}

impl Target {
    fn from_path(path: &Path) -> Result<Self> {
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            bail!("{} is not a usable file name", path.display());
        };
        let root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Ok(Self {
            root,
            file: StylesheetFile::from_relative_str(name),
        })
    }

    /// Path shown to the user, relative to the current directory where possible.
    pub fn display_path(&self) -> String {
        if self.root == Path::new(".") {
            self.file.display_path().to_string()
        } else {
            self.file
                .relative_path()
                .to_path(&self.root)
                .display()
                .to_string()
        }
    }

    /// Language a host would assign from the file extension.
    pub fn language_id(&self, config: &Config) -> String {
        if self.file.has_extension(&config.extensions) {
            config.language_id.clone()
        } else {
            self.file.extension().unwrap_or("plaintext").to_lowercase()
        }
    }
}

/// Turn command-line paths into targets.
///
/// Directories are scanned recursively for the configured extensions. Files
/// are taken as given, whatever their extension. Without paths the config's
/// `include` patterns are used, or the current directory is scanned when
/// there are none.
pub fn collect(paths: &[PathBuf], config: &Config) -> Result<Vec<Target>> {
    let cwd = Path::new(".");

    if paths.is_empty() {
        if config.include.is_empty() {
            return scan(cwd, config);
        }
        return config
            .resolve_include(cwd)?
            .iter()
            .map(|path| match io::to_stylesheet_file(cwd, path) {
                Some(file) => Ok(Target {
                    root: cwd.to_path_buf(),
                    file,
                }),
                None => Target::from_path(path),
            })
            .collect();
    }

    let mut targets = Vec::new();
    for path in paths {
        if path.is_dir() {
            targets.extend(scan(path, config)?);
        } else if path.is_file() {
            targets.push(Target::from_path(path)?);
        } else {
            bail!("{}: no such file or directory", path.display());
        }
    }
    Ok(targets)
}

fn scan(dir: &Path, config: &Config) -> Result<Vec<Target>> {
    let files = io::scan_stylesheet_files(dir, &config.extensions)?;
    log::debug!("found {} stylesheets under {}", files.len(), dir.display());
    Ok(files
        .into_iter()
        .map(|file| Target {
            root: dir.to_path_buf(),
            file,
        })
        .collect())
}
