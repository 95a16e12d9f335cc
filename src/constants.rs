//! Constants for deskwiki
//!
//! This module contains the fixed names, markers, and format strings used
//! throughout the codebase to avoid duplication.

// === File and Directory Names ===

/// Default wiki root directory name (under the user's home directory)
pub const DEFAULT_WIKI_DIR: &str = "wiki";

/// Configuration file name, looked up inside the wiki root
pub const CONFIG_FILENAME: &str = "wiki.yml";

/// Default markup extension for page files (without the dot)
pub const DEFAULT_EXTENSION: &str = "org";

/// Extension used for exported pages (without the dot)
pub const HTML_EXTENSION: &str = "html";

/// Default name of the wiki's entry page
pub const DEFAULT_INDEX_PAGE: &str = "index";

// === Environment Variables ===

/// Overrides the wiki root directory
pub const ENV_WIKI_ROOT: &str = "DESKWIKI_ROOT";

// === Link Schemes ===

/// Scheme for page-to-page links: `wiki:<pageName>`
pub const WIKI_SCHEME: &str = "wiki";

/// Scheme for asset links: `wiki-asset-sys:<pageName>;<fileName>`
pub const ASSET_SCHEME: &str = "wiki-asset-sys";

/// Separator between page name and file name in an asset link target.
/// Reserved: must not appear in page names or asset file names.
pub const ASSET_SEPARATOR: char = ';';

// === Editor Artifact Markers ===

/// Prefix of editor lock files (`.#Page.org`)
pub const LOCK_PREFIX: &str = ".#";

/// Prefix and suffix of editor autosave files (`#Page.org#`)
pub const AUTOSAVE_MARKER: char = '#';

/// Suffix of editor backup files (`Page.org~`)
pub const BACKUP_SUFFIX: char = '~';

// === Page Template ===

/// Date format used in the header of newly created pages
pub const PAGE_DATE_FORMAT: &str = "%Y-%m-%d";

// === Default Exporter Command ===

/// Default converter program invoked per page during export
pub const DEFAULT_EXPORT_PROGRAM: &str = "pandoc";

/// Default converter arguments; `{input}` and `{output}` are substituted
pub const DEFAULT_EXPORT_ARGS: &[&str] = &["--standalone", "{input}", "-o", "{output}"];
