//! Page export via an external converter process
//!
//! The markup-to-HTML conversion itself is delegated to a configurable
//! external command (see [`ExporterConfig`](crate::config::ExporterConfig));
//! this module only builds the per-page command line, runs it, and reports
//! the exit status. A failed page does not abort the remaining pages.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::{ExporterConfig, WikiContext};
use crate::constants as C;
use crate::paths;

/// Seam between the wiki and the converter; implemented by
/// [`ProcessExporter`] and by test doubles
pub trait Exporter {
    /// Convert one page file into the given output file
    fn export(&self, input: &Path, output: &Path) -> io::Result<()>;
}

/// Exporter that shells out to the configured converter command
#[derive(Debug, Clone)]
pub struct ProcessExporter {
    program: String,
    args: Vec<String>,
}

impl ProcessExporter {
    pub fn new(config: &ExporterConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
        }
    }

    /// Substitute `{input}` and `{output}` placeholders in the argument
    /// template
    fn build_args(&self, input: &Path, output: &Path) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{input}", &paths::display_path(input))
                    .replace("{output}", &paths::display_path(output))
            })
            .collect()
    }
}

impl Exporter for ProcessExporter {
    fn export(&self, input: &Path, output: &Path) -> io::Result<()> {
        let args = self.build_args(input, output);
        tracing::debug!(program = %self.program, ?args, "running converter");

        let status = Command::new(&self.program).args(&args).status()?;
        if !status.success() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("converter '{}' exited with {}", self.program, status),
            ));
        }
        Ok(())
    }
}

/// Output file for a page's exported HTML: the page file with its
/// extension replaced
pub fn export_target(ctx: &WikiContext, name: &str) -> PathBuf {
    let page_file = ctx.page_to_file(name);
    PathBuf::from(paths::replace_extension(
        &paths::display_path(&page_file),
        C::HTML_EXTENSION,
    ))
}

/// Export a single page, returning the written HTML file
pub fn export_page(ctx: &WikiContext, exporter: &dyn Exporter, name: &str) -> io::Result<PathBuf> {
    let input = ctx.page_to_file(name);
    if !input.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("page '{}' not found at {}", name, paths::display_path(&input)),
        ));
    }

    let output = export_target(ctx, name);
    exporter.export(&input, &output)?;
    Ok(output)
}

/// Result of a batch export. Reporting is left to the calling layer.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub exported: Vec<(String, PathBuf)>,
    pub failed: Vec<(String, io::Error)>,
}

/// Export every page in the wiki. A failed page is recorded and does not
/// stop the batch.
pub fn export_all(ctx: &WikiContext, exporter: &dyn Exporter) -> io::Result<ExportReport> {
    let mut report = ExportReport::default();

    for name in ctx.list_pages()? {
        match export_page(ctx, exporter, &name) {
            Ok(output) => report.exported.push((name, output)),
            Err(err) => {
                tracing::warn!(page = %name, %err, "export failed");
                report.failed.push((name, err));
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_args_substitution() {
        let exporter = ProcessExporter {
            program: "pandoc".to_string(),
            args: vec![
                "--standalone".to_string(),
                "{input}".to_string(),
                "-o".to_string(),
                "{output}".to_string(),
            ],
        };
        let args = exporter.build_args(Path::new("/wiki/Linux.org"), Path::new("/wiki/Linux.html"));
        assert_eq!(
            args,
            vec!["--standalone", "/wiki/Linux.org", "-o", "/wiki/Linux.html"]
        );
    }

    #[test]
    fn test_export_target_replaces_extension() {
        let ctx = WikiContext::with_root("/wiki");
        assert_eq!(export_target(&ctx, "Linux"), PathBuf::from("/wiki/Linux.html"));
    }

    /// Exporter double that records invocations and fails on request
    struct FakeExporter {
        fail_on: Option<String>,
        calls: RefCell<Vec<String>>,
    }

    impl Exporter for FakeExporter {
        fn export(&self, input: &Path, output: &Path) -> io::Result<()> {
            let name = input.file_stem().unwrap().to_string_lossy().into_owned();
            self.calls.borrow_mut().push(name.clone());
            if self.fail_on.as_deref() == Some(name.as_str()) {
                return Err(io::Error::new(io::ErrorKind::Other, "converter exited with 1"));
            }
            fs::write(output, "<html></html>")
        }
    }

    #[test]
    fn test_export_missing_page() {
        let dir = TempDir::new().unwrap();
        let ctx = WikiContext::with_root(dir.path());
        let exporter = FakeExporter {
            fail_on: None,
            calls: RefCell::new(Vec::new()),
        };
        assert!(export_page(&ctx, &exporter, "Nope").is_err());
        assert!(exporter.calls.borrow().is_empty());
    }

    #[test]
    fn test_export_all_continues_past_failures() {
        let dir = TempDir::new().unwrap();
        let ctx = WikiContext::with_root(dir.path());
        for name in ["Bash.org", "Linux.org", "Vim.org"] {
            fs::write(dir.path().join(name), "* page\n").unwrap();
        }

        let exporter = FakeExporter {
            fail_on: Some("Linux".to_string()),
            calls: RefCell::new(Vec::new()),
        };
        let report = export_all(&ctx, &exporter).unwrap();

        // The failing page is recorded but the batch keeps going
        assert_eq!(report.exported.len(), 2);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, "Linux");
        assert_eq!(*exporter.calls.borrow(), vec!["Bash", "Linux", "Vim"]);
        assert!(dir.path().join("Vim.html").is_file());
        assert!(!dir.path().join("Linux.html").exists());
    }
}
