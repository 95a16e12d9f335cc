//! Pure path helpers for the wiki page model
//!
//! All functions here are plain string computations; nothing touches the
//! filesystem. Paths are compared by normalized form (case-sensitive).

use std::path::Path;

/// Join a base directory and a relative component with exactly one
/// separator between them, regardless of trailing separators on `base`.
pub fn path_join(base: &str, rel: &str) -> String {
    let base = base.trim_end_matches(['/', '\\']);
    let rel = rel.trim_start_matches(['/', '\\']);
    format!("{}/{}", base, rel)
}

/// Normalize a path string: make it absolute, collapse doubled separators,
/// and strip a single trailing separator.
///
/// Two paths refer to the same location iff their normalized forms are
/// string-equal. Symlinks are not resolved.
pub fn normalize_path(path: &str) -> String {
    let mut s = path.replace('\\', "/");

    // Expand a leading ~ against the home directory
    if s == "~" || s.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            let rest = s[1..].trim_start_matches('/');
            s = path_join(&home.to_string_lossy().replace('\\', "/"), rest);
        }
    }

    // Anchor relative paths at the current working directory
    if !s.starts_with('/') && !is_drive_absolute(&s) {
        if let Ok(cwd) = std::env::current_dir() {
            s = path_join(&cwd.to_string_lossy().replace('\\', "/"), &s);
        }
    }

    while s.contains("//") {
        s = s.replace("//", "/");
    }

    if s.len() > 1 && s.ends_with('/') {
        s.pop();
    }

    s
}

/// Check for a Windows drive-absolute path like `C:/...`
fn is_drive_absolute(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Replace everything after the *first* dot in the file name with `new_ext`.
///
/// Known limitation carried over from the original naming model: a file
/// name containing multiple dots loses everything after the first one,
/// so `file.v1.org` becomes `file.html`, not `file.v1.html`.
pub fn replace_extension(file_path: &str, new_ext: &str) -> String {
    let path = file_path.replace('\\', "/");
    let (dir, name) = match path.rfind('/') {
        Some(pos) => (&path[..=pos], &path[pos + 1..]),
        None => ("", path.as_str()),
    };

    let stem = name.split('.').next().unwrap_or(name);
    format!("{}{}.{}", dir, stem, new_ext)
}

/// Display a path with forward slashes (cross-platform standard)
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
