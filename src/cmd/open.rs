//! Open page command module

use std::io;

use deskwiki::export;
use deskwiki::paths;
use deskwiki::{deduplicate, OsOpener, PageSelector, StdinSelector, SystemOpener, WikiContext};

pub fn run(ctx: &WikiContext, name: Option<&str>, html: bool) -> io::Result<()> {
    let name = match name {
        Some(n) => n.to_string(),
        None => match pick_page(ctx)? {
            Some(n) => n,
            None => {
                println!("(cancelled)");
                return Ok(());
            }
        },
    };

    let path = if html {
        let target = export::export_target(ctx, &name);
        if !target.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!(
                    "No exported HTML for '{}'; run `deskwiki export {}` first",
                    name, name
                ),
            ));
        }
        target
    } else {
        let page_path = ctx.page_to_file(&name);
        if !page_path.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Page '{}' not found", name),
            ));
        }
        page_path
    };

    OsOpener.open(&path)?;
    println!("Opening {}", paths::display_path(&path));
    Ok(())
}

/// Choose a page through the selector seam
fn pick_page(ctx: &WikiContext) -> io::Result<Option<String>> {
    let pages = deduplicate(&ctx.list_pages()?);
    if pages.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "No pages in the wiki; create one with `deskwiki new`",
        ));
    }
    StdinSelector.choose_page(&pages)
}
