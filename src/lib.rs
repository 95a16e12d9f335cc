pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod link;
pub mod opener;
pub mod paths;
pub mod select;
pub mod store;

pub use cli::{Cli, Command, LinkCommand};
pub use config::{ConfigError, ExporterConfig, WikiConfig, WikiContext};
pub use export::{Exporter, ExportReport, ProcessExporter};
pub use link::{AssetLink, ExportBackend, PageLink, WikiLink};
pub use opener::{OsOpener, SystemOpener};
pub use select::{PageSelector, StdinSelector};
pub use store::deduplicate;

/// Get the default wiki root path in the user's home directory
pub fn default_wiki_path() -> Option<std::path::PathBuf> {
    dirs::home_dir().map(|p| p.join(constants::DEFAULT_WIKI_DIR))
}
