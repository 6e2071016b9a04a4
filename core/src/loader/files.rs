//! Corpus source reading documents from files.
//!
//! Glob patterns are resolved to files, directories are walked recursively,
//! and each file becomes one corpus entry with the file stem as its id.
//! All formats are treated as plain text; PDFs are parsed when the `pdf`
//! feature is enabled.

use std::io;
use std::path::{Path, PathBuf};

use glob::{glob, Pattern};
use walkdir::WalkDir;

use super::{CorpusEntry, LoaderError};

/// Resolves glob patterns into corpus entries.
pub struct FileCorpusSource {
    patterns: Vec<String>,
}

impl FileCorpusSource {
    /// Validates the patterns up front; resolution happens in
    /// [`Self::entries`].
    pub fn new(patterns: Vec<String>) -> Result<Self, LoaderError> {
        for pattern in &patterns {
            Pattern::new(pattern)?;
        }
        Ok(Self { patterns })
    }

    /// Reads every matched file, in sorted path order for a deterministic
    /// load order. Fails with [`LoaderError::NoMatchingDocuments`] when the
    /// patterns match nothing.
    pub fn entries(&self) -> Result<Vec<CorpusEntry>, LoaderError> {
        let files = resolve_input_to_files(&self.patterns)?;
        if files.is_empty() {
            return Err(LoaderError::NoMatchingDocuments);
        }

        let mut entries = Vec::with_capacity(files.len());
        for path in files {
            let id = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let text = parse_file(&path).map_err(|source| LoaderError::Read {
                path: path.display().to_string(),
                source,
            })?;
            entries.push(CorpusEntry::new(id, text));
        }
        Ok(entries)
    }
}

fn resolve_input_to_files(patterns: &[String]) -> Result<Vec<PathBuf>, LoaderError> {
    let mut files = Vec::new();

    for pattern in patterns {
        for entry in glob(pattern)? {
            match entry {
                Ok(path) => {
                    if path.is_dir() {
                        for entry in WalkDir::new(&path) {
                            let entry = entry.map_err(|e| LoaderError::Read {
                                path: path.display().to_string(),
                                source: e.into(),
                            })?;
                            if entry.file_type().is_file() {
                                files.push(entry.path().to_path_buf());
                            }
                        }
                    } else if path.is_file() {
                        files.push(path);
                    }
                }
                Err(e) => tracing::warn!("glob error: {e}"),
            }
        }
    }

    files.sort();
    Ok(files)
}

fn parse_file(file_path: &Path) -> io::Result<String> {
    #[cfg(feature = "pdf")]
    if file_path.extension().is_some_and(|ext| ext == "pdf") {
        return pdf_extract::extract_text(file_path).map_err(|e| {
            io::Error::new(io::ErrorKind::Other, format!("Failed to parse PDF: {e}"))
        });
    }
    std::fs::read_to_string(file_path)
}
