//! Create page command module

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::Local;
use deskwiki::constants as C;
use deskwiki::paths;
use deskwiki::WikiContext;

pub fn run(ctx: &WikiContext, name: &str) -> io::Result<()> {
    let page_path = create_page(ctx, name)?;

    // Output full path for shell pipeline compatibility
    println!("{}", paths::display_path(&page_path));
    Ok(())
}

/// Create a page file with a dated header, failing if it already exists
pub fn create_page(ctx: &WikiContext, name: &str) -> io::Result<PathBuf> {
    validate_page_name(name)?;

    let page_path = ctx.page_to_file(name);
    if page_path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Page '{}' already exists", name),
        ));
    }

    fs::create_dir_all(&ctx.root)?;
    fs::write(&page_path, page_template(name))?;
    Ok(page_path)
}

/// Reject names that would break the name<->file bijection
fn validate_page_name(name: &str) -> io::Result<()> {
    if name.is_empty()
        || name.contains(['/', '\\', '.'])
        || name.contains(C::ASSET_SEPARATOR)
    {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "Invalid page name '{}': separators, dots, and '{}' are reserved",
                name,
                C::ASSET_SEPARATOR
            ),
        ));
    }
    Ok(())
}

fn page_template(name: &str) -> String {
    let date = Local::now().format(C::PAGE_DATE_FORMAT);
    format!("#+TITLE: {}\n#+DATE: {}\n\n", name, date)
}
