//! Output types for code generation.
//!
//! # Examples
//!
//! ```
//! use mcp_forge_codegen::{GeneratedCode, GeneratedFile};
//!
//! let mut code = GeneratedCode::new();
//! code.add_file(GeneratedFile::new("server.py", "server.start()\n"));
//!
//! assert_eq!(code.file_count(), 1);
//! assert!(code.get("server.py").is_some());
//! ```

use serde::{Deserialize, Serialize};

/// Result of code generation containing all generated files.
///
/// Files are kept in generation order; the primary server source is always
/// first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCode {
    /// Generated files with paths and contents
    pub files: Vec<GeneratedFile>,
}

impl GeneratedCode {
    /// Creates a new empty generated code container.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Adds a generated file to the collection.
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Returns the number of generated files.
    #[inline]
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns an iterator over the generated files.
    #[inline]
    pub fn files(&self) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter()
    }

    /// Looks up a file by relative path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|file| file.path == path)
    }

    /// Returns the primary server source file, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&GeneratedFile> {
        self.files.first()
    }

    /// Returns the total size of all file contents in bytes.
    #[must_use]
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|file| file.content.len()).sum()
    }
}

/// A single generated file with path and content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Relative path where the file should be written
    pub path: String,
    /// File content
    pub content: String,
}

impl GeneratedFile {
    /// Creates a generated file.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Returns the file path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the file content.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns `true` if the file should be marked executable when written.
    #[must_use]
    pub fn is_executable(&self) -> bool {
        std::path::Path::new(&self.path)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("sh"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_default() {
        let code = GeneratedCode::default();
        assert_eq!(code.file_count(), 0);
        assert!(code.primary().is_none());
    }

    #[test]
    fn test_add_and_lookup() {
        let mut code = GeneratedCode::new();
        code.add_file(GeneratedFile::new("server.ts", "export {}"));
        code.add_file(GeneratedFile::new("package.json", "{}"));

        assert_eq!(code.file_count(), 2);
        assert_eq!(code.primary().unwrap().path(), "server.ts");
        assert_eq!(code.get("package.json").unwrap().content(), "{}");
        assert!(code.get("missing").is_none());
        assert_eq!(code.total_bytes(), 11);
    }

    #[test]
    fn test_is_executable() {
        assert!(GeneratedFile::new("install.sh", "").is_executable());
        assert!(!GeneratedFile::new("server.py", "").is_executable());
    }
}
