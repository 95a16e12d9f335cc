//! Page store operations
//!
//! Deterministic mapping between page names, page files, and asset
//! directories, plus directory listing and deduplication. Page and asset
//! values are computed on demand from the wiki root and a name; the
//! filesystem is the single source of truth.
//!
//! Layout invariant: page file `<root>/<Name>.org`, asset directory
//! `<root>/<Name>/` with arbitrary files directly inside it.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::WikiContext;
use crate::constants as C;
use crate::paths;

impl WikiContext {
    /// Path of the page file for `name`: `<root>/<name>.<ext>`
    pub fn page_to_file(&self, name: &str) -> PathBuf {
        let file = format!("{}.{}", name, self.config.extension);
        PathBuf::from(paths::path_join(&self.root_str(), &file))
    }

    /// Page name for a page file: base name with the extension stripped.
    /// Left inverse of [`page_to_file`](Self::page_to_file) for names free
    /// of separator and extension characters.
    pub fn page_name_from_file(&self, file_path: &str) -> String {
        let name = Path::new(file_path)
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let suffix = format!(".{}", self.config.extension);
        match name.strip_suffix(&suffix) {
            Some(base) => base.to_string(),
            None => match name.rsplit_once('.') {
                Some((base, _)) => base.to_string(),
                None => name,
            },
        }
    }

    /// Path of the page file for the configured index page
    pub fn index_file(&self) -> PathBuf {
        self.page_to_file(&self.config.index)
    }

    /// Enumerate page files directly under the wiki root, excluding editor
    /// lock, autosave, and backup artifacts. Sorted for stable output.
    pub fn list_page_files(&self) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let suffix = format!(".{}", self.config.extension);

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if is_transient(&name) || !name.ends_with(&suffix) {
                continue;
            }
            files.push(entry.path());
        }

        files.sort();
        Ok(files)
    }

    /// All page names in the wiki, in the order of [`list_page_files`](Self::list_page_files)
    pub fn list_pages(&self) -> io::Result<Vec<String>> {
        let files = self.list_page_files()?;
        Ok(files
            .iter()
            .map(|p| self.page_name_from_file(&paths::display_path(p)))
            .collect())
    }

    /// Asset directory for a page: `<root>/<name>/`
    pub fn asset_dir(&self, page_name: &str) -> PathBuf {
        PathBuf::from(paths::path_join(&self.root_str(), page_name))
    }

    /// Create the asset directory if absent. Idempotent: an already
    /// existing directory is success, so concurrent callers (e.g. a batch
    /// export process running next to the interactive session) never race.
    pub fn ensure_asset_dir(&self, page_name: &str) -> io::Result<PathBuf> {
        let dir = self.asset_dir(page_name);
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// File names inside a page's asset directory, sorted.
    ///
    /// Creates the directory first if it does not exist; callers rely on
    /// this side effect to get a usable directory out of a listing call.
    pub fn list_asset_files(&self, page_name: &str) -> io::Result<Vec<String>> {
        let dir = self.ensure_asset_dir(page_name)?;

        let mut files = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                files.push(name.to_string());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Page name for an arbitrary file path, if it is a page file directly
    /// under the wiki root. Returns `None` for files outside the wiki.
    pub fn page_for_path(&self, file_path: &Path) -> Option<String> {
        // Canonicalize when possible so relative paths and symlinked roots
        // still compare equal (dunce avoids UNC prefixes on Windows)
        let file = dunce::canonicalize(file_path).unwrap_or_else(|_| file_path.to_path_buf());
        let root = dunce::canonicalize(&self.root).unwrap_or_else(|_| self.root.clone());

        if file.parent() != Some(root.as_path()) {
            return None;
        }

        let name = file.file_name()?.to_string_lossy();
        let suffix = format!(".{}", self.config.extension);
        if is_transient(&name) || !name.ends_with(suffix.as_str()) {
            return None;
        }

        Some(self.page_name_from_file(&paths::display_path(&file)))
    }
}

/// Check whether a directory entry is an editor-generated transient file:
/// lock (`.#x`), autosave (`#x#`), or backup (`x~`)
fn is_transient(file_name: &str) -> bool {
    file_name.starts_with(C::LOCK_PREFIX)
        || file_name.starts_with(C::AUTOSAVE_MARKER)
        || file_name.ends_with(C::AUTOSAVE_MARKER)
        || file_name.ends_with(C::BACKUP_SUFFIX)
}

/// Remove repeated entries, preserving first-seen order
pub fn deduplicate(names: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .filter(|n| seen.insert(n.as_str()))
        .cloned()
        .collect()
}
