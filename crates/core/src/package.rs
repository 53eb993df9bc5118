//! Design package filesystem layout
//!
//! Functions for reading prompt documents from, and writing generated components
//! and the run manifest into, a design package directory:
//!
//! ```text
//! <package>/<prompts_dir>/*.md
//! <package>/<output_dir>/<Component>.<ext>
//! <package>/<output_dir>/manifest.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::manifest::{RunManifest, MANIFEST_FILENAME};
use crate::prompt::PromptDocument;

/// Error type for design package operations
#[derive(Debug)]
pub enum PackageError {
    IoError(String),
    Unreadable { path: PathBuf, message: String },
    NoPrompts(PathBuf),
    PromptNotFound(PathBuf),
    Serialization(String),
}

impl std::fmt::Display for PackageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageError::IoError(msg) => write!(f, "IO error: {}", msg),
            PackageError::Unreadable { path, message } => {
                write!(f, "Cannot read prompts folder {}: {}", path.display(), message)
            }
            PackageError::NoPrompts(path) => {
                write!(f, "No prompt files (*.md) found in {}", path.display())
            }
            PackageError::PromptNotFound(path) => {
                write!(f, "Prompt file not found: {}", path.display())
            }
            PackageError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for PackageError {}

impl From<std::io::Error> for PackageError {
    fn from(err: std::io::Error) -> Self {
        PackageError::IoError(err.to_string())
    }
}

fn is_prompt_file(path: &Path) -> bool {
    path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("md")
}

/// List prompt filenames in `prompts_dir`, sorted by name.
///
/// A missing or unreadable directory and a directory without prompt files are both
/// errors: a run cannot start without at least one prompt.
pub fn list_prompt_files(prompts_dir: &Path) -> Result<Vec<String>, PackageError> {
    let unreadable = |err: std::io::Error| PackageError::Unreadable {
        path: prompts_dir.to_path_buf(),
        message: err.to_string(),
    };

    let mut files = Vec::new();

    for entry in fs::read_dir(prompts_dir).map_err(unreadable)? {
        let path = entry.map_err(unreadable)?.path();

        if is_prompt_file(&path) {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                files.push(name.to_string());
            }
        }
    }

    if files.is_empty() {
        return Err(PackageError::NoPrompts(prompts_dir.to_path_buf()));
    }

    files.sort();
    Ok(files)
}

/// Read a single prompt document.
pub fn load_prompt_document(
    prompts_dir: &Path,
    filename: &str,
) -> Result<PromptDocument, PackageError> {
    let path = prompts_dir.join(filename);

    if !path.is_file() {
        return Err(PackageError::PromptNotFound(path));
    }

    Ok(PromptDocument {
        filename: filename.to_string(),
        content: fs::read_to_string(&path)?,
    })
}

/// Write a generated component, creating `output_dir` if needed.
///
/// An existing file with the same name is replaced.
pub fn write_component(
    output_dir: &Path,
    filename: &str,
    content: &str,
) -> Result<PathBuf, PackageError> {
    fs::create_dir_all(output_dir)?;

    let path = output_dir.join(filename);
    fs::write(&path, content)?;

    Ok(path)
}

/// Persist the run manifest as pretty-printed JSON.
pub fn write_manifest(output_dir: &Path, manifest: &RunManifest) -> Result<PathBuf, PackageError> {
    fs::create_dir_all(output_dir)?;

    let json = serde_json::to_string_pretty(manifest)
        .map_err(|e| PackageError::Serialization(e.to_string()))?;

    let path = output_dir.join(MANIFEST_FILENAME);
    fs::write(&path, json)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::build_manifest;
    use crate::result::GenerationResult;
    use tempfile::TempDir;

    #[test]
    fn test_list_prompt_files_sorted_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();

        fs::write(dir.join("navbar.md"), "Navbar").unwrap();
        fs::write(dir.join("hero.md"), "Hero").unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();
        fs::create_dir(dir.join("drafts.md")).unwrap();

        let files = list_prompt_files(dir).unwrap();
        assert_eq!(files, vec!["hero.md", "navbar.md"]);
    }

    #[test]
    fn test_list_prompt_files_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let result = list_prompt_files(temp_dir.path());
        assert!(matches!(result, Err(PackageError::NoPrompts(_))));
    }

    #[test]
    fn test_list_prompt_files_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nonexistent");

        let result = list_prompt_files(&missing);
        assert!(matches!(result, Err(PackageError::Unreadable { .. })));
    }

    #[test]
    fn test_load_prompt_document() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("hero.md"), "Hero\n---\nBuild it").unwrap();

        let doc = load_prompt_document(temp_dir.path(), "hero.md").unwrap();
        assert_eq!(doc.filename, "hero.md");
        assert_eq!(doc.content, "Hero\n---\nBuild it");

        let missing = load_prompt_document(temp_dir.path(), "footer.md");
        assert!(matches!(missing, Err(PackageError::PromptNotFound(_))));
    }

    #[test]
    fn test_write_component_creates_directory_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("components");

        let path = write_component(&output_dir, "Hero.tsx", "first").unwrap();
        assert_eq!(path, output_dir.join("Hero.tsx"));

        write_component(&output_dir, "Hero.tsx", "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("components");
        let manifest = build_manifest(
            chrono::Utc::now(),
            "pkg",
            &[GenerationResult::failed("Hero", "boom")],
        );

        let path = write_manifest(&output_dir, &manifest).unwrap();
        assert_eq!(path, output_dir.join("manifest.json"));

        let loaded: RunManifest =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, manifest);
    }
}
