//! Export command module

use std::io;

use deskwiki::export;
use deskwiki::paths;
use deskwiki::{ProcessExporter, WikiContext};

pub fn run(ctx: &WikiContext, name: Option<&str>, all: bool) -> io::Result<()> {
    let exporter = ProcessExporter::new(&ctx.config.exporter);

    match (name, all) {
        (Some(name), false) => {
            let output = export::export_page(ctx, &exporter, name)?;
            println!("Exported {} -> {}", name, paths::display_path(&output));
            Ok(())
        }
        (None, true) => {
            println!("Exporting all pages...");
            let report = export::export_all(ctx, &exporter)?;
            for (name, output) in &report.exported {
                println!("  {} -> {}", name, paths::display_path(output));
            }
            for (name, err) in &report.failed {
                eprintln!("  {} FAILED: {}", name, err);
            }
            println!("{} exported, {} failed", report.exported.len(), report.failed.len());
            Ok(())
        }
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Specify a page name or --all",
        )),
    }
}
